use crate::{App, ImagePreviewState};
use ratatui::{
    widgets::{Block, Borders},
    Frame,
};
use ratatui_image::StatefulImage;

use super::{layout, legend, menu, nav_bar, page, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let layout_info = layout::calculate_layout(
        size,
        app.model.ui.vim_mode,
        app.model.navigation.menu_open,
        app.open_command.is_some(),
    );
    let content = layout_info.content_area;

    // Draw and measure the whole page for the current viewport width
    let images = page::ImageStatus {
        states: &app.image_state_map,
        previews_enabled: app.image_picker.is_some(),
    };
    let page = page::build_page(&app.model, content.width, content.height, &images);

    let clamped = app.model.navigation.set_page_layout(
        page.section_spans.clone(),
        page.project_spans.clone(),
        content.y,
        content.height,
    );
    if clamped {
        // A shorter page moved the scroll offset under us
        app.notify_scroll();
        app.sync_highlighted_section();
    }

    let scroll = app.model.navigation.scroll_offset;
    page::blit(&page, scroll, f.buffer_mut(), content);

    // Images go over their placeholders, only when fully on screen and no
    // popup is covering the page
    if !app.model.has_modal() {
        for slot in &page.image_slots {
            let Some(rect) = page::visible_rect(slot.area, scroll, content) else {
                continue;
            };
            if let Some(ImagePreviewState::Ready { protocol, .. }) =
                app.image_state_map.get_mut(&slot.path)
            {
                let inner = Block::default().borders(Borders::ALL).inner(rect);
                f.render_stateful_widget(StatefulImage::default(), inner, protocol);
            }
        }
    }

    let present: Vec<_> = page.section_spans.iter().map(|s| s.id).collect();
    nav_bar::render_nav_bar(
        f,
        layout_info.nav_area,
        &app.model.portfolio.hero.name,
        app.model.navigation.highlighted,
        &present,
    );

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.model.ui.vim_mode,
        app.model.navigation.menu_open,
        app.open_command.is_some(),
    );

    if app.model.navigation.menu_open {
        menu::render_menu(
            f,
            app.model.navigation.menu_selection,
            app.model.navigation.highlighted,
            &present,
        );
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
