//! Page geometry
//!
//! The page is one tall column of sections, measured in terminal rows and
//! scrolled under a fixed navigation bar. These functions stack section
//! heights into row spans and translate spans into viewport-relative bounds
//! for the active-section tracker.

use crate::error::{PortfolioError, Result};
use crate::logic::sections::{SectionBounds, SectionGeometry, SectionId, PROBE_LINE};

/// Geometry units per terminal row when the terminal does not report a font size
pub const DEFAULT_CELL_HEIGHT_PX: u16 = 16;

/// Upper bound on the nav bar's height in geometry units
///
/// Tall cells would otherwise push the nav bar over the probe line, leaving
/// no section under it at the top of the page.
pub const MAX_NAV_BAR_UNITS: i32 = 64;

/// Rows occupied by one section, in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: u16,
    pub height: u16,
}

impl SectionSpan {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Stack section heights top to bottom
///
/// # Examples
/// ```
/// use folio::logic::page::stack_sections;
/// use folio::SectionId;
///
/// let spans = stack_sections(&[(SectionId::Home, 20), (SectionId::Skills, 12)]);
/// assert_eq!(spans[1].top, 20);
/// assert_eq!(spans[1].bottom(), 32);
/// ```
pub fn stack_sections(heights: &[(SectionId, u16)]) -> Vec<SectionSpan> {
    let mut top = 0u16;
    heights
        .iter()
        .map(|&(id, height)| {
            let span = SectionSpan { id, top, height };
            top = top.saturating_add(height);
            span
        })
        .collect()
}

/// Total page height in rows
pub fn page_height(spans: &[SectionSpan]) -> u16 {
    spans.iter().map(|s| s.bottom()).max().unwrap_or(0)
}

/// Viewport geometry of the scrolled page, as seen from the terminal top
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry<'a> {
    spans: &'a [SectionSpan],
    scroll_offset: u16,
    /// Terminal row where the scrolled content starts (below the nav bar)
    content_top: u16,
    cell_height_px: u16,
}

impl<'a> PageGeometry<'a> {
    pub fn new(
        spans: &'a [SectionSpan],
        scroll_offset: u16,
        content_top: u16,
        cell_height_px: u16,
    ) -> Self {
        Self {
            spans,
            scroll_offset,
            content_top,
            cell_height_px: cell_height_px.max(1),
        }
    }

    /// Height of the nav bar in geometry units
    ///
    /// # Examples
    /// ```
    /// use folio::logic::page::PageGeometry;
    ///
    /// assert_eq!(PageGeometry::new(&[], 0, 3, 16).nav_bar_units(), 48);
    /// assert_eq!(PageGeometry::new(&[], 0, 3, 40).nav_bar_units(), 64);
    /// ```
    pub fn nav_bar_units(&self) -> i32 {
        (self.content_top as i32 * self.cell_height_px as i32).min(MAX_NAV_BAR_UNITS)
    }

    /// Page row currently under the probe line
    pub fn probe_row(&self) -> u16 {
        let rows_below_nav = (PROBE_LINE - self.nav_bar_units()) / self.cell_height_px as i32;
        (rows_below_nav.max(0) as u16).saturating_add(self.scroll_offset)
    }
}

impl SectionGeometry for PageGeometry<'_> {
    fn section_bounds(&self, id: SectionId) -> Result<SectionBounds> {
        let span = self
            .spans
            .iter()
            .find(|s| s.id == id)
            .ok_or(PortfolioError::MissingElement(id))?;

        let unit = self.cell_height_px as i32;
        let top = self.nav_bar_units() + (span.top as i32 - self.scroll_offset as i32) * unit;
        Ok(SectionBounds {
            id,
            top,
            bottom: top + span.height as i32 * unit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::sections::find_active_section;

    fn sample_spans() -> Vec<SectionSpan> {
        stack_sections(&[
            (SectionId::Home, 30),
            (SectionId::Skills, 15),
            (SectionId::Projects, 60),
            (SectionId::Contact, 10),
        ])
    }

    #[test]
    fn test_stack_sections_contiguous() {
        let spans = sample_spans();
        for pair in spans.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        assert_eq!(page_height(&spans), 115);
    }

    #[test]
    fn test_bounds_scale_by_cell_height() {
        let spans = sample_spans();
        let geometry = PageGeometry::new(&spans, 0, 3, 16);
        let skills = geometry.section_bounds(SectionId::Skills).unwrap();
        assert_eq!(skills.top, (3 + 30) * 16);
        assert_eq!(skills.bottom, (3 + 45) * 16);
    }

    #[test]
    fn test_bounds_move_with_scroll() {
        let spans = sample_spans();
        let geometry = PageGeometry::new(&spans, 40, 3, 16);
        let skills = geometry.section_bounds(SectionId::Skills).unwrap();
        assert_eq!(skills.top, (3 + 30 - 40) * 16);
    }

    #[test]
    fn test_absent_section_is_missing_element() {
        let spans = sample_spans();
        let geometry = PageGeometry::new(&spans, 0, 3, 16);
        let err = geometry.section_bounds(SectionId::Experience).unwrap_err();
        assert!(matches!(err, PortfolioError::MissingElement(SectionId::Experience)));
    }

    #[test]
    fn test_scrolled_to_section_top_activates_it() {
        let spans = sample_spans();
        let geometry = PageGeometry::new(&spans, 45, 3, 16);
        assert_eq!(
            find_active_section(&geometry, &SectionId::ALL),
            Some(SectionId::Projects)
        );
    }

    #[test]
    fn test_probe_row_tracks_scroll() {
        let spans = sample_spans();
        // 100 / 16 = row 6 of the terminal, row 3 of the content
        assert_eq!(PageGeometry::new(&spans, 0, 3, 16).probe_row(), 3);
        assert_eq!(PageGeometry::new(&spans, 50, 3, 16).probe_row(), 53);
    }

    #[test]
    fn test_tall_cells_keep_probe_below_nav_bar() {
        let spans = sample_spans();
        for cell_height in [34, 40] {
            let mut tracker = crate::ActiveSectionTracker::new();
            let down = PageGeometry::new(&spans, 35, 3, cell_height);
            assert_eq!(tracker.on_scroll(&down), SectionId::Skills);

            let top = PageGeometry::new(&spans, 0, 3, cell_height);
            assert_eq!(top.nav_bar_units(), MAX_NAV_BAR_UNITS);
            assert_eq!(tracker.on_scroll(&top), SectionId::Home, "cell height {}", cell_height);
        }
    }

    #[test]
    fn test_tall_cells_probe_row() {
        let spans = sample_spans();
        // (100 - 64) / 34 = 1 row below the nav bar
        assert_eq!(PageGeometry::new(&spans, 0, 3, 34).probe_row(), 1);
        assert_eq!(PageGeometry::new(&spans, 10, 3, 40).probe_row(), 10);
    }
}
