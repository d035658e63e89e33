use folio::SectionId;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Render the section menu popup (centered)
pub fn render_menu(f: &mut Frame, selection: usize, current: SectionId, present: &[SectionId]) {
    let menu_items: Vec<ListItem> = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let marker = if *id == current { "● " } else { "  " };
            let style = if present.contains(id) {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(super::page::ACCENT)),
                Span::styled(format!("{}  {}", i + 1, id.label()), style),
            ]))
        })
        .collect();

    let area = f.area();
    let menu_width = 36u16.min(area.width);
    let menu_height = (SectionId::ALL.len() as u16 + 2).min(area.height);
    let menu_area = Rect {
        x: (area.width.saturating_sub(menu_width)) / 2,
        y: (area.height.saturating_sub(menu_height)) / 2,
        width: menu_width,
        height: menu_height,
    };

    let menu = List::new(menu_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Go to section (Enter, Esc to close)")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(Some(selection));

    f.render_widget(Clear, menu_area);
    f.render_stateful_widget(menu, menu_area, &mut state);
}
