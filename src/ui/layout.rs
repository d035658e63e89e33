use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows of the fixed navigation bar (border, text, border)
pub const NAV_HEIGHT: u16 = 3;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Fixed navigation bar at the top
    pub nav_area: Rect,
    /// Scrolled page viewport
    pub content_area: Rect,
    /// Hotkey legend (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    vim_mode: bool,
    menu_open: bool,
    has_open_command: bool,
) -> LayoutInfo {
    // Dynamic legend height based on terminal width and content
    let legend_height = super::legend::calculate_legend_height(
        terminal_size.width,
        vim_mode,
        menu_open,
        has_open_command,
    );

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(legend_height),
        ])
        .split(terminal_size);

    LayoutInfo {
        nav_area: main_chunks[0],
        content_area: main_chunks[1],
        legend_area: main_chunks[2],
    }
}
