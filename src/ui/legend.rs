use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    menu_open: bool,
    has_open_command: bool,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // The menu is modal; only its own keys apply
    if menu_open {
        let nav = if vim_mode { "j/k" } else { "↑/↓" };
        hotkey_spans.extend(vec![
            key(nav),
            Span::raw(":Select  "),
            key("Enter"),
            Span::raw(":Go  "),
            key("1-5"),
            Span::raw(":Jump  "),
            key("Esc"),
            Span::raw(":Close"),
        ]);
        return hotkey_spans;
    }

    // Scrolling keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            key("j/k"),
            Span::raw(":Scroll  "),
            key("^d/^u"),
            Span::raw(":½Page  "),
            key("gg/G"),
            Span::raw(":Top/Bottom  "),
            key("h/l"),
            Span::raw(":Skills tab  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("↑/↓"),
            Span::raw(":Scroll  "),
            key("PgUp/PgDn"),
            Span::raw(":½Page  "),
            key("Home/End"),
            Span::raw(":Top/Bottom  "),
            key("Tab"),
            Span::raw(":Skills tab  "),
        ]);
    }

    hotkey_spans.extend(vec![
        key("1-5"),
        Span::raw(":Section  "),
        key("m"),
        Span::raw(":Menu  "),
        key("p"),
        Span::raw(":Projects  "),
        key("[/]"),
        Span::raw(":Contact  "),
    ]);

    // Open - only show if open_command is configured
    if has_open_command {
        hotkey_spans.extend(vec![
            key("o"),
            Span::raw(":Open contact  "),
            key("i"),
            Span::raw(":Open image  "),
        ]);
    }

    hotkey_spans.extend(vec![key("y"), Span::raw(":Copy  "), key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    vim_mode: bool,
    menu_open: bool,
    has_open_command: bool,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, menu_open, has_open_command));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (changes with vim mode and the menu)
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    menu_open: bool,
    has_open_command: bool,
) {
    let legend = build_legend_paragraph(vim_mode, menu_open, has_open_command);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    menu_open: bool,
    has_open_command: bool,
) -> u16 {
    // Build paragraph WITHOUT block borders for accurate line counting
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, menu_open, has_open_command));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    // Calculate available width (subtract left + right borders)
    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_vim_mode_keys() {
        let text = spans_to_text(&build_hotkey_spans(true, false, false));
        assert!(text.contains("gg/G"), "got: {}", text);
        assert!(text.contains("^d/^u"), "got: {}", text);
        assert!(!text.contains("PgUp"), "got: {}", text);
    }

    #[test]
    fn test_standard_keys() {
        let text = spans_to_text(&build_hotkey_spans(false, false, false));
        assert!(text.contains("PgUp/PgDn"), "got: {}", text);
        assert!(!text.contains("gg/G"), "got: {}", text);
    }

    #[test]
    fn test_open_hidden_without_command() {
        let text = spans_to_text(&build_hotkey_spans(false, false, false));
        let has_o_key = text.split_whitespace().any(|word| word.starts_with("o:"));
        assert!(!has_o_key, "got: {}", text);

        let text = spans_to_text(&build_hotkey_spans(false, false, true));
        assert!(text.contains("o:Open contact"), "got: {}", text);
    }

    #[test]
    fn test_menu_legend_is_modal() {
        let text = spans_to_text(&build_hotkey_spans(false, true, true));
        assert!(text.contains("Enter:Go"), "got: {}", text);
        assert!(!text.contains("Quit"), "got: {}", text);
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(400, false, false, true);
        let narrow = calculate_legend_height(40, false, false, true);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
