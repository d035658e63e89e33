//! Skills tab selection
//!
//! Pure functions for cycling through skill category tabs.

/// Move to the next or previous tab, wrapping at both ends
///
/// # Arguments
/// * `current` - Index of the active tab
/// * `tab_count` - Number of skill categories
/// * `forward` - `true` for the next tab, `false` for the previous one
///
/// # Returns
/// The new tab index (always 0 when there are no tabs)
///
/// # Examples
/// ```
/// use folio::logic::skills::cycle_tab;
///
/// assert_eq!(cycle_tab(0, 5, true), 1);
/// assert_eq!(cycle_tab(4, 5, true), 0);
/// assert_eq!(cycle_tab(0, 5, false), 4);
/// assert_eq!(cycle_tab(0, 0, true), 0);
/// ```
pub fn cycle_tab(current: usize, tab_count: usize, forward: bool) -> usize {
    if tab_count == 0 {
        return 0;
    }

    let current = current.min(tab_count - 1);
    if forward {
        (current + 1) % tab_count
    } else if current == 0 {
        tab_count - 1
    } else {
        current - 1
    }
}

/// Number of skill cards per grid row for a given width
pub fn grid_columns(width: u16, card_width: u16) -> usize {
    (width / card_width.max(1)).clamp(1, 4) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_forward_wraps() {
        assert_eq!(cycle_tab(2, 3, true), 0);
    }

    #[test]
    fn test_cycle_backward_wraps() {
        assert_eq!(cycle_tab(0, 3, false), 2);
        assert_eq!(cycle_tab(2, 3, false), 1);
    }

    #[test]
    fn test_cycle_single_tab_stays() {
        assert_eq!(cycle_tab(0, 1, true), 0);
        assert_eq!(cycle_tab(0, 1, false), 0);
    }

    #[test]
    fn test_stale_index_clamped_before_cycling() {
        assert_eq!(cycle_tab(9, 3, false), 1);
    }

    #[test]
    fn test_grid_columns_bounds() {
        assert_eq!(grid_columns(10, 24), 1);
        assert_eq!(grid_columns(80, 24), 3);
        assert_eq!(grid_columns(300, 24), 4);
    }
}
