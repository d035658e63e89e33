//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, the active skills tab, and transient messages.

use std::time::Instant;

use super::types::VimCommandState;

/// UI preferences and transient state
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// Index of the active skills tab
    pub skills_tab: usize,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Font size reported by the terminal (width, height) in pixels
    pub image_font_size: Option<(u16, u16)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            skills_tab: 0,
            toast_message: None,
            image_font_size: None,
            should_quit: false,
        }
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message.as_ref().is_some_and(|(_, shown_at)| {
            crate::logic::ui::should_dismiss_toast(shown_at.elapsed().as_millis())
        })
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let ui = UiModel::new(true);
        assert!(ui.vim_mode);
        assert_eq!(ui.skills_tab, 0);
        assert_eq!(ui.vim_command_state, VimCommandState::None);
        assert!(!ui.should_quit);
    }

    #[test]
    fn test_toast() {
        let mut ui = UiModel::new(false);
        assert!(ui.toast_message.is_none());
        assert!(!ui.should_dismiss_toast());

        ui.show_toast("Test".to_string());
        assert!(ui.toast_message.is_some());
        assert!(!ui.should_dismiss_toast());

        ui.dismiss_toast();
        assert!(ui.toast_message.is_none());
    }
}
