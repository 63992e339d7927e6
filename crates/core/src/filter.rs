//! Filter engine for the record list.
//!
//! Recomputes the visible subset of records from the two filter inputs: the
//! free-text search term and the family name selected from the dropdown. The
//! result is a set of indices into the record slice, preserving original
//! order, so the filtered view is always a subsequence of the full set.

use roster_bundle::RecordEntry;

/// Compute the indices of records passing both filter inputs.
///
/// A record passes when both hold:
/// - `search_term` is empty, or is a case-insensitive substring of the
///   normalized family or given name;
/// - `selected_family` is empty, or equals the normalized family name exactly
///   (case-sensitive).
///
/// The case asymmetry between the two inputs is intentional and preserved:
/// search is forgiving free text, the dropdown matches the exact option the
/// index builder produced.
pub fn apply_filter(
    records: &[RecordEntry],
    search_term: &str,
    selected_family: &str,
) -> Vec<usize> {
    let needle = search_term.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            let name = record.display_name();

            let matches_search = needle.is_empty()
                || name.family.to_lowercase().contains(&needle)
                || name.given.to_lowercase().contains(&needle);

            let matches_dropdown = selected_family.is_empty() || name.family == selected_family;

            matches_search && matches_dropdown
        })
        .map(|(index, _)| index)
        .collect()
}
