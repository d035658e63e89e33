use folio::SectionId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::page::ACCENT;

/// Build the section entries (extracted for testability)
///
/// The entry for `current` is highlighted; sections not on the page are dimmed.
fn build_section_spans(current: SectionId, present: &[SectionId]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(SectionId::ALL.len() * 2);

    for (i, id) in SectionId::ALL.iter().enumerate() {
        let style = if *id == current {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else if present.contains(id) {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        spans.push(Span::styled(format!(" {} {} ", i + 1, id.label()), style));
        spans.push(Span::raw(" "));
    }

    spans
}

/// Render the fixed navigation bar at the top of the screen
pub fn render_nav_bar(
    f: &mut Frame,
    area: Rect,
    name: &str,
    current: SectionId,
    present: &[SectionId],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Name on the left, section entries right-aligned after it
    let name_width = (name.width() as u16 + 2).min(inner.width / 3);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(name_width), Constraint::Min(0)])
        .split(inner);

    let name_line = Paragraph::new(Line::from(Span::styled(
        format!(" {}", name),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(name_line, chunks[0]);

    let sections = Paragraph::new(Line::from(build_section_spans(current, present)))
        .alignment(ratatui::layout::Alignment::Right);
    f.render_widget(sections, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_section_highlighted() {
        let spans = build_section_spans(SectionId::Projects, &SectionId::ALL);
        let highlighted: Vec<&str> = spans
            .iter()
            .filter(|s| s.style.bg == Some(ACCENT))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(highlighted, vec![" 3 Projects "]);
    }

    #[test]
    fn test_absent_section_dimmed() {
        let present = [
            SectionId::Home,
            SectionId::Skills,
            SectionId::Projects,
            SectionId::Contact,
        ];
        let spans = build_section_spans(SectionId::Home, &present);
        let experience = spans
            .iter()
            .find(|s| s.content.contains("Experience"))
            .unwrap();
        assert_eq!(experience.style.fg, Some(Color::DarkGray));
    }
}
