//! Mouse Input Handler
//!
//! Only the wheel is used; every notch is one scroll notification.

use crossterm::event::{MouseEvent, MouseEventKind};
use folio::logic::navigation::MOUSE_SCROLL_ROWS;

use crate::App;

/// Handle mouse input
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    // The menu popup swallows wheel events like it swallows keys
    if app.model.has_modal() {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_by(MOUSE_SCROLL_ROWS),
        MouseEventKind::ScrollUp => app.scroll_by(-MOUSE_SCROLL_ROWS),
        _ => {}
    }
}
