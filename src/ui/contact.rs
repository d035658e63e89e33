use folio::logic::contact::ContactLink;
use folio::logic::skills::grid_columns;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::page::{draw_heading, heading_height, text_area, ACCENT};

const TITLE: &str = "Let's Talk";
const TAGLINE: &str = "Interested in working together or have a question? Get in touch!";

const CARD_WIDTH: u16 = 25;
const CARD_HEIGHT: u16 = 4;
/// Separator line, credit line, and a blank row below
const FOOTER_HEIGHT: u16 = 4;

fn card_rows(links: &[ContactLink], width: u16) -> u16 {
    let columns = grid_columns(text_area(Rect::new(0, 0, width, 1)).width, CARD_WIDTH);
    links.len().div_ceil(columns) as u16
}

pub fn height(links: &[ContactLink], width: u16) -> u16 {
    heading_height(TITLE, TAGLINE, width)
        + card_rows(links, width) * CARD_HEIGHT
        + 1
        + FOOTER_HEIGHT
}

pub fn draw(buf: &mut Buffer, area: Rect, links: &[ContactLink], selected: usize, name: &str) {
    let body = text_area(draw_heading(buf, area, TITLE, TAGLINE));
    let columns = grid_columns(body.width, CARD_WIDTH);
    let card_width = body.width / columns as u16;

    for (i, link) in links.iter().enumerate() {
        let col = (i % columns) as u16;
        let row = (i / columns) as u16;
        let card = Rect {
            x: body.x + col * card_width,
            y: body.y + row * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT,
        };
        if card.bottom() > area.bottom() {
            break;
        }
        draw_card(buf, card, link, i == selected);
    }

    let footer = Rect {
        y: area.bottom().saturating_sub(FOOTER_HEIGHT),
        height: FOOTER_HEIGHT.min(area.height),
        ..area
    };
    draw_footer(buf, footer, name);
}

fn draw_card(buf: &mut Buffer, area: Rect, link: &ContactLink, selected: bool) {
    let (border, marker) = if selected {
        (Style::default().fg(Color::Yellow), "▶ ")
    } else {
        (Style::default().fg(Color::DarkGray), "")
    };

    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(
                link.kind.label(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            link.value.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(border))
    .render(area, buf);
}

fn draw_footer(buf: &mut Buffer, area: Rect, name: &str) {
    Paragraph::new(Line::from(Span::styled(
        format!("© {}. Built with Rust and ratatui.", name),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(ACCENT)),
    )
    .render(
        Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1).min(2),
            ..area
        },
        buf,
    );
}
