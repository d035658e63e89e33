//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **PortfolioData**: The static content being rendered
//! - **NavigationModel**: Scroll position, section layout, menu
//! - **UiModel**: Preferences, skills tab, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: Image decoding, processes and terminal I/O live in the binary
//! - Pure accessors: Helper methods are side-effect free

pub mod navigation;
pub mod types;
pub mod ui;

pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

use crate::logic::contact::{contact_links, ContactLink};
use crate::logic::sections::SectionId;
use crate::portfolio::PortfolioData;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Content being rendered
    pub portfolio: PortfolioData,

    /// Scroll and menu state
    pub navigation: NavigationModel,

    /// UI preferences and transient messages
    pub ui: UiModel,
}

impl Model {
    /// Create initial model at the top of the page
    pub fn new(portfolio: PortfolioData, vim_mode: bool) -> Self {
        Self {
            portfolio,
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Check if any modal popup is showing
    pub fn has_modal(&self) -> bool {
        self.navigation.menu_open
    }

    /// Open the section menu with the highlighted section preselected
    pub fn open_menu(&mut self) {
        self.navigation.menu_open = true;
        self.navigation.menu_selection = self.navigation.highlighted.position();
    }

    pub fn close_menu(&mut self) {
        self.navigation.menu_open = false;
    }

    /// Section currently selected in the menu
    pub fn menu_section(&self) -> SectionId {
        SectionId::ALL
            .get(self.navigation.menu_selection)
            .copied()
            .unwrap_or(SectionId::Home)
    }

    /// Contact entries in display order
    pub fn contact_links(&self) -> Vec<ContactLink> {
        contact_links(&self.portfolio.contact, &self.portfolio.hero.name)
    }

    /// Currently selected contact entry (if any)
    pub fn selected_contact(&self) -> Option<ContactLink> {
        self.contact_links()
            .into_iter()
            .nth(self.navigation.selected_contact)
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}
