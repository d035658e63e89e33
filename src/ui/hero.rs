use folio::portfolio::Hero;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::page::{text_area, ACCENT};

fn hero_paragraph(hero: &Hero) -> Paragraph<'_> {
    let lines = vec![
        Line::from(Span::styled(
            hero.name.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            hero.title.as_str(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            hero.subtitle.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(Span::styled(
            hero.description.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("p", Style::default().fg(Color::Yellow)),
            Span::raw(": View projects   "),
            Span::styled("↓", Style::default().fg(Color::Yellow)),
            Span::raw(": Scroll"),
        ]),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// The hero always fills at least one screen
pub fn height(hero: &Hero, width: u16, viewport_height: u16) -> u16 {
    let text_width = text_area(Rect::new(0, 0, width, 1)).width;
    let content = hero_paragraph(hero).line_count(text_width) as u16;
    content.saturating_add(4).max(viewport_height)
}

pub fn draw(buf: &mut Buffer, area: Rect, hero: &Hero) {
    let paragraph = hero_paragraph(hero);
    let column = text_area(area);
    let content = (paragraph.line_count(column.width) as u16).min(area.height);

    // Vertically centered
    let text = Rect {
        y: area.y + (area.height - content) / 2,
        height: content,
        ..column
    };
    paragraph.render(text, buf);
}
