//! Filter-option derivation.
//!
//! Scans the loaded record set once and derives the dropdown's option list:
//! the distinct normalized family names, sorted. The options are independent
//! of the current filter state and are not recomputed on filtering.

use std::collections::BTreeSet;

use roster_bundle::RecordEntry;

/// Build the dropdown options for a record set.
///
/// Returns the distinct family names produced by the normalizer, excluding
/// the name sentinels, in ascending lexicographic order with no duplicates.
pub fn build_filter_options(records: &[RecordEntry]) -> Vec<String> {
    let mut names = BTreeSet::new();

    for record in records {
        let name = record.display_name();
        if name.has_real_family() {
            names.insert(name.family);
        }
    }

    names.into_iter().collect()
}
