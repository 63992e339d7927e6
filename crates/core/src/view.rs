//! Abstract view seam.
//!
//! The session never touches a concrete rendering technology. It hands
//! immutable [`PageView`] snapshots to a [`RosterView`] implementation and
//! receives user input back as [`ViewEvent`] values, so the same engine can
//! sit behind a terminal table, an HTML table, or a test double.

use roster_bundle::RecordEntry;

/// Immutable snapshot of the currently visible page.
///
/// Borrowed from the session; discarded and rebuilt on every recomputation,
/// never patched incrementally.
#[derive(Debug)]
pub struct PageView<'a> {
    /// The visible slice of the filtered subset, in original record order.
    pub entries: Vec<&'a RecordEntry>,
    /// 1-indexed page the slice belongs to.
    pub current_page: usize,
    /// Total number of pages over the filtered subset. When this is 0 or 1
    /// the renderer shows no pagination control.
    pub total_pages: usize,
    /// Size of the whole filtered subset, across all pages.
    pub total_matches: usize,
}

impl PageView<'_> {
    /// True when the pagination control should be shown at all.
    pub fn needs_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

/// User input events consumed by the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// The free-text search input changed.
    SearchChanged(String),
    /// The family-name dropdown selection changed. An empty string clears the
    /// selection.
    FamilySelected(String),
    /// A pagination button was clicked (1-indexed).
    PageSelected(usize),
}

/// Rendering collaborator driven by the session.
///
/// Filter changes re-render the table and rebuild the pagination control;
/// page changes re-render the table and only move the active-page highlight.
pub trait RosterView {
    /// Present the visible page as a table. An empty page is still rendered,
    /// as an explicit "no matching records" state rather than a blank table.
    fn render_table(&mut self, page: &PageView<'_>);

    /// Rebuild the pagination control for a new filtered subset.
    fn render_pagination(&mut self, current_page: usize, total_pages: usize);

    /// Move the active-page highlight without rebuilding the control.
    fn render_active_page(&mut self, current_page: usize);

    /// Show a message in place of the table, e.g. a load failure.
    fn render_message(&mut self, message: &str);
}
