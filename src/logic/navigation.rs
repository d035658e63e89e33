//! Scroll position logic
//!
//! Pure functions for moving the page scroll offset. All results are clamped
//! to `0..=max_scroll`.

/// Rows scrolled per mouse wheel notch
pub const MOUSE_SCROLL_ROWS: i32 = 3;

/// Largest valid scroll offset for a page in a viewport
///
/// # Examples
/// ```
/// use folio::logic::navigation::max_scroll;
///
/// assert_eq!(max_scroll(120, 40), 80);
/// assert_eq!(max_scroll(30, 40), 0); // Page shorter than viewport
/// ```
pub fn max_scroll(page_height: u16, viewport_height: u16) -> u16 {
    page_height.saturating_sub(viewport_height)
}

/// Apply a signed row delta to a scroll offset
///
/// # Arguments
/// * `offset` - Current scroll offset
/// * `delta` - Rows to move (negative scrolls up)
/// * `max` - Largest valid offset
///
/// # Examples
/// ```
/// use folio::logic::navigation::scroll_by;
///
/// assert_eq!(scroll_by(10, -3, 50), 7);
/// assert_eq!(scroll_by(2, -5, 50), 0);
/// assert_eq!(scroll_by(48, 5, 50), 50);
/// ```
pub fn scroll_by(offset: u16, delta: i32, max: u16) -> u16 {
    (offset as i32 + delta).clamp(0, max as i32) as u16
}

/// Offset that puts a section's first row at the viewport top
///
/// Sections near the end of the page cannot reach the top; they stop at `max`.
pub fn scroll_target(section_top: u16, max: u16) -> u16 {
    section_top.min(max)
}

/// Rows moved by a half-page scroll (at least one)
pub fn half_page(viewport_height: u16) -> i32 {
    (viewport_height / 2).max(1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_by_clamps_both_ends() {
        assert_eq!(scroll_by(0, -1, 10), 0);
        assert_eq!(scroll_by(10, 1, 10), 10);
        assert_eq!(scroll_by(5, 2, 10), 7);
    }

    #[test]
    fn test_scroll_by_with_empty_range() {
        assert_eq!(scroll_by(0, 20, 0), 0);
    }

    #[test]
    fn test_scroll_target_clamped_to_max() {
        assert_eq!(scroll_target(30, 100), 30);
        assert_eq!(scroll_target(130, 100), 100);
    }

    #[test]
    fn test_half_page_minimum() {
        assert_eq!(half_page(40), 20);
        assert_eq!(half_page(1), 1);
        assert_eq!(half_page(0), 1);
    }
}
