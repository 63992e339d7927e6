//! Pagination arithmetic.
//!
//! Pure helpers over the size of the filtered subset: page count, clamping of
//! a requested page, and the half-open slice bounds of the visible page.
//! Pages are 1-indexed throughout.

use std::ops::Range;

use roster_types::PageSize;

/// Number of pages needed for `len` records.
///
/// Zero records need zero pages; callers treat `total_pages <= 1` as "no
/// pagination control".
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get())
}

/// Clamp a requested page into the valid range.
///
/// The controls only ever emit valid page numbers, but the filtered subset can
/// shrink after a page was selected, so requests are clamped to
/// `1..=total_pages` (and to 1 when there are no pages at all).
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.max(1).min(total_pages.max(1))
}

/// Slice bounds of the given page within `len` records.
///
/// `start = (page - 1) * page_size`, `end = min(start + page_size, len)`.
/// A page beyond the end yields an empty range.
pub fn page_slice(len: usize, page_size: PageSize, page: usize) -> Range<usize> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size.get()).min(len);
    let end = (start + page_size.get()).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).expect("valid page size")
    }

    #[test]
    fn twelve_records_at_five_per_page_is_three_pages() {
        assert_eq!(total_pages(12, size(5)), 3);
    }

    #[test]
    fn exact_multiple_needs_no_extra_page() {
        assert_eq!(total_pages(10, size(5)), 2);
    }

    #[test]
    fn empty_subset_has_zero_pages() {
        assert_eq!(total_pages(0, size(5)), 0);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        assert_eq!(page_slice(12, size(5), 3), 10..12);
    }

    #[test]
    fn full_page_bounds() {
        assert_eq!(page_slice(12, size(5), 1), 0..5);
        assert_eq!(page_slice(12, size(5), 2), 5..10);
    }

    #[test]
    fn page_beyond_end_is_empty() {
        assert_eq!(page_slice(12, size(5), 4), 12..12);
        assert_eq!(page_slice(0, size(5), 1), 0..0);
    }

    #[test]
    fn no_page_is_longer_than_the_page_size() {
        for len in 0..40 {
            for page in 1..12 {
                let bounds = page_slice(len, size(5), page);
                assert!(bounds.len() <= 5, "len={len} page={page}");
            }
        }
    }

    #[test]
    fn pages_partition_the_subset_exactly() {
        let len = 12;
        let page_size = size(5);
        let mut seen = Vec::new();
        for page in 1..=total_pages(len, page_size) {
            seen.extend(page_slice(len, page_size, page));
        }
        assert_eq!(seen, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn clamps_out_of_range_pages() {
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(5, 0), 1);
    }
}
