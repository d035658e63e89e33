//! Scroll methods
//!
//! Every change of the scroll offset is a scroll notification: the page
//! geometry is re-probed and the active-section tracker updated.

use crate::App;
use folio::logic::page::PageGeometry;
use folio::SectionId;

impl App {
    /// Viewport geometry of the page as last rendered
    fn page_geometry(&self) -> PageGeometry<'_> {
        let nav = &self.model.navigation;
        PageGeometry::new(
            &nav.section_spans,
            nav.scroll_offset,
            nav.content_top,
            self.cell_height_px,
        )
    }

    /// Deliver one scroll notification to the tracker
    pub(crate) fn notify_scroll(&mut self) {
        let nav = &self.model.navigation;
        let geometry = PageGeometry::new(
            &nav.section_spans,
            nav.scroll_offset,
            nav.content_top,
            self.cell_height_px,
        );
        let current = self.tracker.on_scroll(&geometry);
        tracing::trace!(
            target: "scroll",
            offset = nav.scroll_offset,
            section = %current,
            "scroll_notification"
        );
    }

    pub(crate) fn scroll_by(&mut self, delta: i32) {
        if self.model.navigation.scroll_by(delta) {
            self.notify_scroll();
        }
    }

    pub(crate) fn scroll_to(&mut self, offset: u16) {
        if self.model.navigation.scroll_to(offset) {
            self.notify_scroll();
        }
    }

    /// Bring a section to the viewport top (closes the menu like any jump)
    pub(crate) fn scroll_to_section(&mut self, id: SectionId) {
        self.model.close_menu();
        if self.model.navigation.scroll_to_section(id) {
            self.notify_scroll();
        } else {
            tracing::debug!(section = %id, "scroll target not on page");
            self.model
                .show_toast(format!("Error: no {} section on this page", id.label()));
        }
    }

    /// Copy the tracker's latest section into the model for rendering
    pub(crate) fn sync_highlighted_section(&mut self) {
        if self.section_rx.has_changed().unwrap_or(false) {
            let section = *self.section_rx.borrow_and_update();
            self.model.navigation.highlighted = section;
        }
    }

    /// Index of the project card under the probe line
    pub(crate) fn project_at_probe(&self) -> Option<usize> {
        let row = self.page_geometry().probe_row();
        self.model.navigation.project_at_row(row)
    }
}
