//! Navigation Model
//!
//! This sub-model contains all state related to moving around the page:
//! scroll offset, the measured section layout, the highlighted section, and
//! the navigation menu.

use super::types::ProjectSpan;
use crate::logic::{self, page::SectionSpan, sections::SectionId};

/// Navigation state (scroll position, section layout, menu)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// First page row shown at the top of the content viewport
    pub scroll_offset: u16,

    /// Largest valid scroll offset for the last measured layout
    pub max_scroll: u16,

    /// Height of the content viewport in rows
    pub viewport_height: u16,

    /// Terminal row where the content viewport starts (below the nav bar)
    pub content_top: u16,

    /// Section spans from the last render pass
    pub section_spans: Vec<SectionSpan>,

    /// Project card spans from the last render pass
    pub project_spans: Vec<ProjectSpan>,

    /// Section highlighted in the nav bar (mirrors the tracker)
    pub highlighted: SectionId,

    /// Whether the section menu popup is open
    pub menu_open: bool,

    /// Selected entry in the section menu
    pub menu_selection: usize,

    /// Selected contact entry
    pub selected_contact: usize,
}

impl NavigationModel {
    /// Create navigation state at the top of the page
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            max_scroll: 0,
            viewport_height: 0,
            content_top: 0,
            section_spans: Vec::new(),
            project_spans: Vec::new(),
            highlighted: SectionId::Home,
            menu_open: false,
            menu_selection: 0,
            selected_contact: 0,
        }
    }

    /// Span of a section, if it is on the page
    pub fn span_of(&self, id: SectionId) -> Option<&SectionSpan> {
        self.section_spans.iter().find(|s| s.id == id)
    }

    /// Store a freshly measured layout
    ///
    /// Returns `true` if the scroll offset had to be clamped to the new bounds.
    pub fn set_page_layout(
        &mut self,
        section_spans: Vec<SectionSpan>,
        project_spans: Vec<ProjectSpan>,
        content_top: u16,
        viewport_height: u16,
    ) -> bool {
        let page_height = logic::page::page_height(&section_spans);
        self.section_spans = section_spans;
        self.project_spans = project_spans;
        self.content_top = content_top;
        self.viewport_height = viewport_height;
        self.max_scroll = logic::navigation::max_scroll(page_height, viewport_height);

        if self.scroll_offset > self.max_scroll {
            self.scroll_offset = self.max_scroll;
            true
        } else {
            false
        }
    }

    /// Move by `delta` rows. Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let next = logic::navigation::scroll_by(self.scroll_offset, delta, self.max_scroll);
        self.set_offset(next)
    }

    /// Jump to an absolute offset (clamped). Returns `true` if the offset changed.
    pub fn scroll_to(&mut self, offset: u16) -> bool {
        self.set_offset(offset.min(self.max_scroll))
    }

    /// Put a section at the viewport top
    ///
    /// Returns `false` if the section is not on the page.
    pub fn scroll_to_section(&mut self, id: SectionId) -> bool {
        let Some(top) = self.span_of(id).map(|s| s.top) else {
            return false;
        };
        let target = logic::navigation::scroll_target(top, self.max_scroll);
        self.set_offset(target);
        true
    }

    /// Project card containing a page row
    pub fn project_at_row(&self, row: u16) -> Option<usize> {
        self.project_spans
            .iter()
            .find(|span| span.contains_row(row))
            .map(|span| span.project_index)
    }

    fn set_offset(&mut self, offset: u16) -> bool {
        let changed = self.scroll_offset != offset;
        self.scroll_offset = offset;
        changed
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::page::stack_sections;

    fn laid_out() -> NavigationModel {
        let mut nav = NavigationModel::new();
        let spans = stack_sections(&[
            (SectionId::Home, 40),
            (SectionId::Skills, 20),
            (SectionId::Projects, 80),
            (SectionId::Contact, 10),
        ]);
        let projects = vec![
            ProjectSpan {
                project_index: 0,
                top: 63,
                height: 20,
            },
            ProjectSpan {
                project_index: 1,
                top: 84,
                height: 20,
            },
        ];
        nav.set_page_layout(spans, projects, 3, 30);
        nav
    }

    #[test]
    fn test_navigation_model_creation() {
        let nav = NavigationModel::new();
        assert_eq!(nav.scroll_offset, 0);
        assert_eq!(nav.highlighted, SectionId::Home);
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_max_scroll_from_layout() {
        let nav = laid_out();
        assert_eq!(nav.max_scroll, 150 - 30);
    }

    #[test]
    fn test_layout_clamps_offset() {
        let mut nav = laid_out();
        nav.scroll_offset = 500;
        let spans = stack_sections(&[(SectionId::Home, 50)]);
        assert!(nav.set_page_layout(spans, Vec::new(), 3, 30));
        assert_eq!(nav.scroll_offset, 20);
    }

    #[test]
    fn test_scroll_by_reports_change() {
        let mut nav = laid_out();
        assert!(!nav.scroll_by(-1));
        assert!(nav.scroll_by(5));
        assert_eq!(nav.scroll_offset, 5);
    }

    #[test]
    fn test_scroll_to_section() {
        let mut nav = laid_out();
        assert!(nav.scroll_to_section(SectionId::Projects));
        assert_eq!(nav.scroll_offset, 60);
    }

    #[test]
    fn test_scroll_to_last_section_stops_at_max() {
        let mut nav = laid_out();
        assert!(nav.scroll_to_section(SectionId::Contact));
        assert_eq!(nav.scroll_offset, nav.max_scroll);
    }

    #[test]
    fn test_scroll_to_absent_section() {
        let mut nav = laid_out();
        assert!(!nav.scroll_to_section(SectionId::Experience));
        assert_eq!(nav.scroll_offset, 0);
    }

    #[test]
    fn test_project_at_row() {
        let nav = laid_out();
        assert_eq!(nav.project_at_row(70), Some(0));
        assert_eq!(nav.project_at_row(84), Some(1));
        assert_eq!(nav.project_at_row(83), None);
    }
}
