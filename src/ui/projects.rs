//! Project cards
//!
//! Each card pairs an image column, arranged by the project's layout plan,
//! with an info column. Even cards put the images on the left, odd cards on
//! the right. Narrow terminals stack the images above the info instead.

use folio::logic::layout::{select_layout, Alignment, LayoutPlan, LayoutVariant, MAX_THUMBNAILS};
use folio::portfolio::Project;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment as TextAlignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use std::path::PathBuf;

use super::page::{draw_heading, heading_height, text_area, ImageSlot, ImageStatus, ACCENT};
use crate::utils::display_file_name;

const TITLE: &str = "Featured Projects";
const TAGLINE: &str = "Work built on solid engineering practice and modern tooling";

/// Rows for a main image (single, pair, or gallery primary)
const IMAGE_HEIGHT: u16 = 12;
/// Rows for the gallery thumbnail strip
const THUMBNAIL_HEIGHT: u16 = 5;
/// Below this card width the columns are stacked
const MIN_SPLIT_WIDTH: u16 = 70;
/// Blank rows between cards
const CARD_GAP: u16 = 1;

/// Rows of one card, relative to the section top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub project_index: usize,
    pub top: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsLayout {
    pub cards: Vec<CardLayout>,
    pub height: u16,
}

/// Measure every card and the section as a whole
pub fn measure(projects: &[Project], width: u16) -> ProjectsLayout {
    let card_width = text_area(Rect::new(0, 0, width, 1)).width;
    let mut top = heading_height(TITLE, TAGLINE, width);
    let mut cards = Vec::with_capacity(projects.len());

    for (index, project) in projects.iter().enumerate() {
        let height = card_height(project, index, card_width);
        cards.push(CardLayout {
            project_index: index,
            top,
            height,
        });
        top = top.saturating_add(height).saturating_add(CARD_GAP);
    }

    ProjectsLayout {
        cards,
        height: top.saturating_add(1),
    }
}

fn card_height(project: &Project, index: usize, card_width: u16) -> u16 {
    let Ok(plan) = select_layout(&project.images, index) else {
        return error_text(project, index).line_count(card_width.saturating_sub(2)) as u16 + 2;
    };

    let inner_width = card_width.saturating_sub(2);
    let image_height = image_column_height(plan.variant);
    let inner = if inner_width < MIN_SPLIT_WIDTH {
        image_height + info_paragraph(project).line_count(inner_width) as u16
    } else {
        let info_width = inner_width / 2;
        image_height.max(info_paragraph(project).line_count(info_width.saturating_sub(1)) as u16)
    };
    inner + 2
}

fn image_column_height(variant: LayoutVariant) -> u16 {
    match variant {
        LayoutVariant::Single | LayoutVariant::Pair => IMAGE_HEIGHT,
        LayoutVariant::Gallery => IMAGE_HEIGHT + THUMBNAIL_HEIGHT,
    }
}

/// Draw all cards; returns where their images go (section coordinates)
pub fn draw(
    buf: &mut Buffer,
    area: Rect,
    projects: &[Project],
    layout: &ProjectsLayout,
    images: &ImageStatus,
) -> Vec<ImageSlot> {
    draw_heading(buf, area, TITLE, TAGLINE);
    let column = text_area(area);
    let mut slots = Vec::new();

    for card in &layout.cards {
        let Some(project) = projects.get(card.project_index) else {
            continue;
        };
        let card_area = Rect {
            y: area.y + card.top,
            height: card.height,
            ..column
        };

        match select_layout(&project.images, card.project_index) {
            Ok(plan) => {
                slots.extend(draw_card(buf, card_area, project, &plan, images));
            }
            Err(e) => {
                // Only this card is affected; the rest of the page renders normally
                tracing::warn!(project = project.id, error = %e, "project cannot be laid out");
                error_text(project, card.project_index)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(Color::Red))
                            .title(" Error "),
                    )
                    .render(card_area, buf);
            }
        }
    }

    slots
}

fn draw_card(
    buf: &mut Buffer,
    area: Rect,
    project: &Project,
    plan: &LayoutPlan<'_, PathBuf>,
    images: &ImageStatus,
) -> Vec<ImageSlot> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", project.name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let image_height = image_column_height(plan.variant);
    let (image_area, info_area) = if inner.width < MIN_SPLIT_WIDTH {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(image_height), Constraint::Min(0)])
            .split(inner);
        (rows[0], rows[1])
    } else {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);
        let (image, info) = match plan.alignment {
            Alignment::Left => (halves[0], halves[1]),
            Alignment::Right => (halves[1], halves[0]),
        };
        // One column of padding between images and text
        let info = match plan.alignment {
            Alignment::Left => Rect {
                x: info.x + 1,
                width: info.width.saturating_sub(1),
                ..info
            },
            Alignment::Right => Rect {
                width: info.width.saturating_sub(1),
                ..info
            },
        };
        (
            Rect {
                height: image_height.min(image.height),
                ..image
            },
            info,
        )
    };

    info_paragraph(project).render(info_area, buf);
    image_slots(plan, image_area)
        .into_iter()
        .map(|slot| {
            draw_placeholder(buf, &slot, images);
            slot
        })
        .collect()
}

/// Image rectangles for a plan inside the image column
fn image_slots(plan: &LayoutPlan<'_, PathBuf>, area: Rect) -> Vec<ImageSlot> {
    let slot = |path: &PathBuf, area: Rect| ImageSlot {
        path: path.clone(),
        area,
    };

    match plan.variant {
        LayoutVariant::Single => plan
            .primary_image
            .map(|path| vec![slot(path, area)])
            .unwrap_or_default(),
        LayoutVariant::Pair => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(area);
            plan.secondary_images
                .iter()
                .zip(halves.iter())
                .map(|(path, half)| slot(path, *half))
                .collect()
        }
        LayoutVariant::Gallery => {
            let mut slots = Vec::with_capacity(1 + plan.secondary_images.len());
            let main = Rect {
                height: IMAGE_HEIGHT.min(area.height),
                ..area
            };
            if let Some(path) = plan.primary_image {
                slots.push(slot(path, main));
            }

            let strip = Rect {
                y: main.bottom(),
                height: area.height.saturating_sub(main.height),
                ..area
            };
            if !plan.secondary_images.is_empty() && strip.height > 0 {
                let constraints = vec![Constraint::Ratio(1, MAX_THUMBNAILS as u32); MAX_THUMBNAILS];
                let cells = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(constraints)
                    .split(strip);
                slots.extend(
                    plan.secondary_images
                        .iter()
                        .zip(cells.iter())
                        .map(|(path, cell)| slot(path, *cell)),
                );
            }
            slots
        }
    }
}

/// Framed placeholder; a decoded image is drawn over its inner area when the
/// whole slot is on screen
fn draw_placeholder(buf: &mut Buffer, slot: &ImageSlot, images: &ImageStatus) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(display_file_name(&slot.path));
    let status = images.describe(&slot.path);

    Paragraph::new(Line::from(Span::styled(
        status,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(TextAlignment::Center)
    .wrap(Wrap { trim: true })
    .block(block)
    .render(slot.area, buf);
}

fn info_paragraph(project: &Project) -> Paragraph<'_> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(project.category.as_str(), Style::default().fg(ACCENT)),
            Span::raw(" • "),
            Span::styled(project.status.as_str(), Style::default().fg(Color::Green)),
        ]),
        Line::from(Span::styled(
            project.subtitle.as_str(),
            Style::default().fg(ACCENT).add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(Span::styled(
            project.description.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];

    if !project.features.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Key features:",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        lines.extend(project.features.iter().map(|feature| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(ACCENT)),
                Span::styled(feature.as_str(), Style::default().fg(Color::Gray)),
            ])
        }));
    }

    if !project.technologies.is_empty() {
        lines.push(Line::default());
        let mut tags = Vec::with_capacity(project.technologies.len() * 2);
        for tech in &project.technologies {
            tags.push(Span::styled(
                format!("[{}]", tech),
                Style::default().fg(Color::Cyan),
            ));
            tags.push(Span::raw(" "));
        }
        lines.push(Line::from(tags));
    }

    Paragraph::new(lines).wrap(Wrap { trim: true })
}

/// Measured without its frame; `line_count` and borders do not mix well
fn error_text(project: &Project, index: usize) -> Paragraph<'static> {
    Paragraph::new(format!(
        "Project {} ({}) at position {} has no images to show",
        project.id,
        project.name,
        index + 1
    ))
    .style(Style::default().fg(Color::Red))
    .wrap(Wrap { trim: true })
}
