//! Terminal renderer for the record list.
//!
//! [`TextView`] implements the core's `RosterView` seam against any
//! `io::Write` sink. It keeps the last pagination state so an active-page
//! change can redraw the control without the session resupplying the page
//! count, the same way a concrete control keeps its buttons between clicks.

use std::io::Write;

use roster_core::{PageView, RosterView};

/// Row shown when the filtered subset is empty.
const NO_RESULTS_ROW: &str = "No matching patients found";

/// Text renderer over an arbitrary writer.
pub struct TextView<W: Write> {
    out: W,
    total_pages: usize,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        Self { out, total_pages: 0 }
    }

    /// Consume the view and hand back the writer. Used by tests to inspect
    /// what was rendered.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_page_buttons(&mut self, current_page: usize) {
        // One row of 1-indexed buttons, the active page bracketed.
        let buttons: Vec<String> = (1..=self.total_pages)
            .map(|page| {
                if page == current_page {
                    format!("[{page}]")
                } else {
                    page.to_string()
                }
            })
            .collect();
        let _ = writeln!(self.out, "Pages: {}", buttons.join(" "));
    }
}

impl<W: Write> RosterView for TextView<W> {
    fn render_table(&mut self, page: &PageView<'_>) {
        if page.entries.is_empty() {
            let _ = writeln!(self.out, "{NO_RESULTS_ROW}");
            return;
        }

        let _ = writeln!(self.out, "{:<20} {:<24} {:<20} ID", "FAMILY", "GIVEN", "LAST MODIFIED");
        for entry in &page.entries {
            let name = entry.display_name();
            let _ = writeln!(
                self.out,
                "{:<20} {:<24} {:<20} {}",
                name.family,
                name.given,
                entry.last_modified_display(),
                entry.id
            );
        }
        let _ = writeln!(
            self.out,
            "Showing {} of {} matching record(s)",
            page.entries.len(),
            page.total_matches
        );
    }

    fn render_pagination(&mut self, current_page: usize, total_pages: usize) {
        self.total_pages = total_pages;
        // A single page needs no control.
        if total_pages <= 1 {
            return;
        }
        self.write_page_buttons(current_page);
    }

    fn render_active_page(&mut self, current_page: usize) {
        if self.total_pages <= 1 {
            return;
        }
        self.write_page_buttons(current_page);
    }

    fn render_message(&mut self, message: &str) {
        let _ = writeln!(self.out, "{message}");
    }
}
