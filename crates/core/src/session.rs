//! Roster session state.
//!
//! [`RosterSession`] owns everything the patient-list page keeps between
//! events: the immutable record set, the derived filter options, the current
//! filter inputs, the current page, and the filtered subset. Each user event
//! recomputes the derived state synchronously and runs to completion before
//! the next event is handled.

use roster_bundle::RecordEntry;
use roster_types::PageSize;

use crate::view::{PageView, RosterView, ViewEvent};
use crate::{filter, index, paginate};

/// One user session over one loaded record set.
pub struct RosterSession {
    /// Immutable after load.
    records: Vec<RecordEntry>,
    /// Derived once from `records`; independent of the filter state.
    filter_options: Vec<String>,
    search_term: String,
    selected_family: String,
    /// 1-indexed; reset to 1 on every filter change.
    current_page: usize,
    /// Indices into `records`, in original order. Recomputed wholesale.
    filtered: Vec<usize>,
    page_size: PageSize,
}

impl RosterSession {
    /// Start a session over a loaded record set.
    ///
    /// The initial state is unfiltered: every record is visible and the
    /// session is on page 1. Filter options are derived here, once.
    pub fn new(records: Vec<RecordEntry>, page_size: PageSize) -> Self {
        let filter_options = index::build_filter_options(&records);
        let filtered = (0..records.len()).collect();

        Self {
            records,
            filter_options,
            search_term: String::new(),
            selected_family: String::new(),
            current_page: 1,
            filtered,
            page_size,
        }
    }

    /// The dropdown options derived at load time.
    pub fn filter_options(&self) -> &[String] {
        &self.filter_options
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_family(&self) -> &str {
        &self.selected_family
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Size of the filtered subset across all pages.
    pub fn match_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.filtered.len(), self.page_size)
    }

    /// Look up a record by its identifier, across the whole set (not just the
    /// visible page). Used to resolve a selection to a viewer URL.
    pub fn record(&self, id: &str) -> Option<&RecordEntry> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Replace the search term, recompute the subset, and reset to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refilter();
    }

    /// Replace the dropdown selection, recompute the subset, and reset to
    /// page 1. An empty selection clears the dropdown filter.
    pub fn set_selected_family(&mut self, family: impl Into<String>) {
        self.selected_family = family.into();
        self.refilter();
    }

    /// Move to a page, clamped into the valid range.
    pub fn select_page(&mut self, page: usize) {
        self.current_page = paginate::clamp_page(page, self.total_pages());
    }

    /// Snapshot the currently visible page.
    ///
    /// The page is clamped here as well: the filtered subset may have shrunk
    /// since the page was selected.
    pub fn page(&self) -> PageView<'_> {
        let total_pages = self.total_pages();
        let current_page = paginate::clamp_page(self.current_page, total_pages);
        let bounds = paginate::page_slice(self.filtered.len(), self.page_size, current_page);

        PageView {
            entries: self.filtered[bounds]
                .iter()
                .map(|&i| &self.records[i])
                .collect(),
            current_page,
            total_pages,
            total_matches: self.filtered.len(),
        }
    }

    /// Initial presentation: table plus pagination control.
    pub fn present<V: RosterView>(&self, view: &mut V) {
        let page = self.page();
        view.render_table(&page);
        view.render_pagination(page.current_page, page.total_pages);
    }

    /// Handle one user event and re-render the affected surfaces.
    ///
    /// Filter changes rebuild table and pagination control; a page selection
    /// re-renders the table and moves the active-page highlight only.
    pub fn dispatch<V: RosterView>(&mut self, event: ViewEvent, view: &mut V) {
        match event {
            ViewEvent::SearchChanged(term) => {
                self.set_search_term(term);
                self.present(view);
            }
            ViewEvent::FamilySelected(family) => {
                self.set_selected_family(family);
                self.present(view);
            }
            ViewEvent::PageSelected(page) => {
                self.select_page(page);
                let snapshot = self.page();
                view.render_table(&snapshot);
                view.render_active_page(snapshot.current_page);
            }
        }
    }

    fn refilter(&mut self) {
        self.current_page = 1;
        self.filtered =
            filter::apply_filter(&self.records, &self.search_term, &self.selected_family);
        tracing::debug!(
            matches = self.filtered.len(),
            search = %self.search_term,
            family = %self.selected_family,
            "recomputed filtered subset"
        );
    }
}
