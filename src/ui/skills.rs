use folio::logic::skills::grid_columns;
use folio::portfolio::SkillSet;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
};

use super::page::{draw_heading, heading_height, text_area, ACCENT};

const TITLE: &str = "Technical Skills";
const TAGLINE: &str = "Technologies and tools I use to build robust, scalable solutions";

/// Width of one skill card, borders included
const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 3;
const TABS_HEIGHT: u16 = 3;

fn grid_rows(skill_count: usize, columns: usize) -> u16 {
    skill_count.div_ceil(columns.max(1)) as u16
}

/// Section height, sized for the largest category so switching tabs never
/// moves the sections below
pub fn height(skills: &SkillSet, width: u16) -> u16 {
    let columns = grid_columns(text_area(Rect::new(0, 0, width, 1)).width, CARD_WIDTH);
    let largest = skills
        .categories()
        .iter()
        .map(|c| c.skills.len())
        .max()
        .unwrap_or(0);

    heading_height(TITLE, TAGLINE, width)
        + TABS_HEIGHT
        + 1
        + grid_rows(largest, columns) * CARD_HEIGHT
        + 1
}

pub fn draw(buf: &mut Buffer, area: Rect, skills: &SkillSet, active_tab: usize) {
    let body = text_area(draw_heading(buf, area, TITLE, TAGLINE));
    if skills.is_empty() || body.height < TABS_HEIGHT {
        return;
    }

    let active_tab = active_tab.min(skills.len() - 1);
    let titles: Vec<Line> = skills
        .categories()
        .iter()
        .map(|c| Line::from(capitalize(&c.name)))
        .collect();

    Tabs::new(titles)
        .select(active_tab)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .render(Rect { height: TABS_HEIGHT, ..body }, buf);

    let Some(category) = skills.get(active_tab) else {
        return;
    };

    let columns = grid_columns(body.width, CARD_WIDTH);
    let card_width = body.width / columns as u16;
    let grid_top = body.y + TABS_HEIGHT + 1;

    for (i, skill) in category.skills.iter().enumerate() {
        let col = (i % columns) as u16;
        let row = (i / columns) as u16;
        let card = Rect {
            x: body.x + col * card_width,
            y: grid_top + row * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT,
        };
        if card.bottom() > area.bottom() {
            break;
        }

        Paragraph::new(skill.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(card, buf);
    }
}

/// "backend" -> "Backend"
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
