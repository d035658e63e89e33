use folio::portfolio::Experience;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::page::{draw_heading, heading_height, text_area, ACCENT};

const TITLE: &str = "Professional Experience";
const TAGLINE: &str = "My path in software development and the areas I work in";

/// Below this width the two cards are stacked
const MIN_SPLIT_WIDTH: u16 = 60;

fn summary_paragraph(exp: &Experience) -> Paragraph<'_> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}+", exp.years),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "years of experience",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Companies",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(exp.companies.iter().map(|c| bullet(c)));
    Paragraph::new(lines).wrap(Wrap { trim: true })
}

fn specialties_paragraph(exp: &Experience) -> Paragraph<'_> {
    let mut lines = vec![Line::from(Span::styled(
        "Key specialties",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(exp.specialties.iter().map(|s| bullet(s)));
    Paragraph::new(lines).wrap(Wrap { trim: true })
}

fn bullet(text: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled("• ", Style::default().fg(ACCENT)),
        Span::styled(text, Style::default().fg(Color::Gray)),
    ])
}

fn card_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

pub fn height(exp: &Experience, width: u16) -> u16 {
    let body = text_area(Rect::new(0, 0, width, 1)).width;
    let cards = if body < MIN_SPLIT_WIDTH {
        let inner = body.saturating_sub(2);
        summary_paragraph(exp).line_count(inner) as u16
            + specialties_paragraph(exp).line_count(inner) as u16
            + 4
    } else {
        let inner = (body / 2).saturating_sub(2);
        summary_paragraph(exp)
            .line_count(inner)
            .max(specialties_paragraph(exp).line_count(inner)) as u16
            + 2
    };
    heading_height(TITLE, TAGLINE, width) + cards + 1
}

pub fn draw(buf: &mut Buffer, area: Rect, exp: &Experience) {
    let body = text_area(draw_heading(buf, area, TITLE, TAGLINE));
    let body = Rect {
        height: body.height.saturating_sub(1),
        ..body
    };

    let (summary_area, specialties_area) = if body.width < MIN_SPLIT_WIDTH {
        let inner = body.width.saturating_sub(2);
        let summary_height = summary_paragraph(exp).line_count(inner) as u16 + 2;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(summary_height), Constraint::Min(0)])
            .split(body);
        (rows[0], rows[1])
    } else {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body);
        (halves[0], halves[1])
    };

    summary_paragraph(exp)
        .block(card_block())
        .render(summary_area, buf);
    specialties_paragraph(exp)
        .block(card_block())
        .render(specialties_area, buf);
}
