//! Offscreen page
//!
//! Each section is drawn into its own buffer at full height. The frame shows
//! a window of rows starting at the scroll offset, copied cell by cell from
//! the section buffers. Stacking the section heights yields the spans the
//! active-section tracker probes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use folio::logic::page::{stack_sections, SectionSpan};
use folio::model::{Model, ProjectSpan};
use folio::SectionId;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{contact, experience, hero, projects, skills};
use crate::ImagePreviewState;

/// Accent color for headings and highlights
pub const ACCENT: Color = Color::Magenta;

/// Text never runs wider than this, however wide the terminal
const MAX_TEXT_WIDTH: u16 = 100;

/// Where a project image goes, in page coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub path: PathBuf,
    pub area: Rect,
}

/// One section drawn at full height
struct SectionLayer {
    top: u16,
    buffer: Buffer,
}

/// The whole page, drawn and measured
pub struct Page {
    layers: Vec<SectionLayer>,
    pub section_spans: Vec<SectionSpan>,
    pub project_spans: Vec<ProjectSpan>,
    pub image_slots: Vec<ImageSlot>,
}

/// What a placeholder says about an image that is not being drawn
pub struct ImageStatus<'a> {
    pub states: &'a HashMap<PathBuf, ImagePreviewState>,
    pub previews_enabled: bool,
}

impl ImageStatus<'_> {
    pub fn describe(&self, path: &Path) -> String {
        if !self.previews_enabled {
            return "preview disabled".to_string();
        }
        match self.states.get(path) {
            None | Some(ImagePreviewState::Loading) => "loading…".to_string(),
            Some(ImagePreviewState::Ready { metadata, .. }) => {
                let size = crate::utils::format_bytes(metadata.file_size);
                match (metadata.dimensions, &metadata.format) {
                    (Some((w, h)), Some(format)) => format!("{}×{} {} ({})", w, h, format, size),
                    (Some((w, h)), None) => format!("{}×{} ({})", w, h, size),
                    _ => size,
                }
            }
            Some(ImagePreviewState::Failed { reason }) => reason.clone(),
        }
    }
}

/// Draw every section present in the data and measure the result
pub fn build_page(model: &Model, width: u16, viewport_height: u16, images: &ImageStatus) -> Page {
    let portfolio = &model.portfolio;
    let mut heights: Vec<(SectionId, u16)> = Vec::with_capacity(SectionId::ALL.len());
    let mut buffers = Vec::with_capacity(SectionId::ALL.len());
    let mut project_spans = Vec::new();
    let mut image_slots = Vec::new();

    for id in SectionId::ALL {
        let buffer = match id {
            SectionId::Home => {
                let height = hero::height(&portfolio.hero, width, viewport_height);
                draw_layer(width, height, |buf, area| hero::draw(buf, area, &portfolio.hero))
            }
            SectionId::Skills => {
                let height = skills::height(&portfolio.skills, width);
                draw_layer(width, height, |buf, area| {
                    skills::draw(buf, area, &portfolio.skills, model.ui.skills_tab)
                })
            }
            SectionId::Projects => {
                let layout = projects::measure(&portfolio.projects, width);
                let top = page_top(&heights);
                for card in &layout.cards {
                    project_spans.push(ProjectSpan {
                        project_index: card.project_index,
                        top: top.saturating_add(card.top),
                        height: card.height,
                    });
                }
                draw_layer(width, layout.height, |buf, area| {
                    let slots = projects::draw(buf, area, &portfolio.projects, &layout, images);
                    image_slots.extend(slots.into_iter().map(|slot| ImageSlot {
                        area: Rect {
                            y: slot.area.y.saturating_add(top),
                            ..slot.area
                        },
                        ..slot
                    }));
                })
            }
            SectionId::Experience => {
                // No experience record, no section
                let Some(exp) = &portfolio.experience else {
                    continue;
                };
                let height = experience::height(exp, width);
                draw_layer(width, height, |buf, area| experience::draw(buf, area, exp))
            }
            SectionId::Contact => {
                let links = model.contact_links();
                let height = contact::height(&links, width);
                draw_layer(width, height, |buf, area| {
                    contact::draw(
                        buf,
                        area,
                        &links,
                        model.navigation.selected_contact,
                        &portfolio.hero.name,
                    )
                })
            }
        };
        heights.push((id, buffer.area.height));
        buffers.push(buffer);
    }

    let section_spans = stack_sections(&heights);
    let layers = section_spans
        .iter()
        .zip(buffers)
        .map(|(span, buffer)| SectionLayer {
            top: span.top,
            buffer,
        })
        .collect();

    Page {
        layers,
        section_spans,
        project_spans,
        image_slots,
    }
}

fn page_top(heights: &[(SectionId, u16)]) -> u16 {
    heights
        .iter()
        .fold(0u16, |top, &(_, height)| top.saturating_add(height))
}

fn draw_layer(width: u16, height: u16, draw: impl FnOnce(&mut Buffer, Rect)) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    draw(&mut buffer, area);
    buffer
}

/// Copy the rows `scroll..scroll + dest.height` of the page into `target`
pub fn blit(page: &Page, scroll: u16, target: &mut Buffer, dest: Rect) {
    for dy in 0..dest.height {
        let row = scroll.saturating_add(dy);
        let Some(layer) = page
            .layers
            .iter()
            .find(|l| row >= l.top && row - l.top < l.buffer.area.height)
        else {
            // Past the end of the page
            continue;
        };
        let src_y = row - layer.top;

        for dx in 0..dest.width.min(layer.buffer.area.width) {
            let Some(src) = layer.buffer.cell((dx, src_y)) else {
                continue;
            };
            if let Some(dst) = target.cell_mut((dest.x + dx, dest.y + dy)) {
                *dst = src.clone();
            }
        }
    }
}

/// Screen rectangle of a page-space area, if it is entirely inside the viewport
///
/// Terminal graphics cannot be clipped, so partially visible images are not
/// drawn at all.
pub fn visible_rect(area: Rect, scroll: u16, dest: Rect) -> Option<Rect> {
    let top = area.y.checked_sub(scroll)?;
    if top.saturating_add(area.height) > dest.height || area.right() > dest.width {
        return None;
    }
    Some(Rect {
        x: dest.x + area.x,
        y: dest.y + top,
        width: area.width,
        height: area.height,
    })
}

/// Centered text column inside a section
pub fn text_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(MAX_TEXT_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Rows taken by a section heading (including the blank rows around it)
pub fn heading_height(title: &str, tagline: &str, width: u16) -> u16 {
    let text_width = text_area(Rect::new(0, 0, width, 1)).width;
    (heading(title, tagline).line_count(text_width) as u16).saturating_add(2)
}

/// Draw a section heading at the top of `area`; returns the rows below it
pub fn draw_heading(buf: &mut Buffer, area: Rect, title: &str, tagline: &str) -> Rect {
    let height = heading_height(title, tagline, area.width).min(area.height);
    let text = text_area(Rect {
        y: area.y + 1,
        height: height.saturating_sub(2),
        ..area
    });
    heading(title, tagline).render(text, buf);

    Rect {
        y: area.y + height,
        height: area.height - height,
        ..area
    }
}

fn heading<'a>(title: &'a str, tagline: &'a str) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(tagline, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::PortfolioData;

    fn sample_page(width: u16, viewport_height: u16) -> Page {
        let model = Model::new(PortfolioData::bundled().unwrap(), false);
        let states = HashMap::new();
        let images = ImageStatus {
            states: &states,
            previews_enabled: false,
        };
        build_page(&model, width, viewport_height, &images)
    }

    #[test]
    fn test_sections_stack_in_page_order() {
        let page = sample_page(100, 30);
        let ids: Vec<SectionId> = page.section_spans.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
        for pair in page.section_spans.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
    }

    #[test]
    fn test_hero_fills_viewport() {
        let page = sample_page(100, 45);
        assert!(page.section_spans[0].height >= 45);
    }

    #[test]
    fn test_missing_experience_has_no_span() {
        let mut data = PortfolioData::bundled().unwrap();
        data.experience = None;
        let model = Model::new(data, false);
        let states = HashMap::new();
        let images = ImageStatus {
            states: &states,
            previews_enabled: false,
        };
        let page = build_page(&model, 100, 30, &images);
        assert!(page
            .section_spans
            .iter()
            .all(|s| s.id != SectionId::Experience));
    }

    #[test]
    fn test_project_spans_inside_projects_section() {
        let page = sample_page(100, 30);
        let section = page
            .section_spans
            .iter()
            .find(|s| s.id == SectionId::Projects)
            .unwrap();
        assert_eq!(page.project_spans.len(), 3);
        for span in &page.project_spans {
            assert!(span.top >= section.top);
            assert!(span.top + span.height <= section.bottom());
        }
    }

    #[test]
    fn test_gallery_slots_capped() {
        // Project 1 has six images: one primary plus four thumbnails are shown
        let page = sample_page(100, 30);
        let first_project_images = page
            .image_slots
            .iter()
            .filter(|slot| {
                let span = page.project_spans[0];
                slot.area.y >= span.top && slot.area.y < span.top + span.height
            })
            .count();
        assert_eq!(first_project_images, 5);
    }

    #[test]
    fn test_blit_copies_scrolled_rows() {
        let page = sample_page(60, 20);
        let dest = Rect::new(0, 3, 60, 10);
        let mut screen = Buffer::empty(Rect::new(0, 0, 60, 13));
        blit(&page, 5, &mut screen, dest);

        let layer = &page.layers[0];
        for x in 0..60 {
            assert_eq!(screen.cell((x, 3)), layer.buffer.cell((x, 5)));
        }
    }

    #[test]
    fn test_visible_rect_requires_full_visibility() {
        let dest = Rect::new(0, 3, 80, 20);
        let slot = Rect::new(2, 30, 20, 8);

        assert_eq!(
            visible_rect(slot, 25, dest),
            Some(Rect::new(2, 8, 20, 8))
        );
        // Top edge scrolled past
        assert_eq!(visible_rect(slot, 31, dest), None);
        // Bottom edge below the viewport
        assert_eq!(visible_rect(slot, 15, dest), None);
    }

    #[test]
    fn test_visible_rect_exact_fit() {
        let dest = Rect::new(0, 0, 20, 8);
        assert!(visible_rect(Rect::new(0, 10, 20, 8), 10, dest).is_some());
    }
}
