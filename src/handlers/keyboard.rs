//! Keyboard Input Handler
//!
//! Handles all keyboard input. The section menu is modal and gets first
//! look at every key; everything else is page navigation or an action on
//! the selected contact or the project under the probe line.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio::logic::{self, navigation::half_page};
use folio::model::VimCommandState;
use folio::SectionId;

use crate::App;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Release and repeat events arrive on some platforms; act on presses only
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Ctrl-C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    if app.model.navigation.menu_open {
        handle_menu_key(app, key);
        return Ok(());
    }

    let vim_mode = app.model.ui.vim_mode;

    // Any key other than 'g' cancels a pending 'gg'
    let pending_g = app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG;
    app.model.ui.vim_command_state = VimCommandState::None;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.model.ui.should_quit = true,

        // Vim keybindings with Ctrl modifiers (check before plain letters)
        KeyCode::Char('d') if vim_mode && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_by(half_page(app.model.navigation.viewport_height));
        }
        KeyCode::Char('u') if vim_mode && key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_by(-half_page(app.model.navigation.viewport_height));
        }

        // Line scrolling
        KeyCode::Down => app.scroll_by(1),
        KeyCode::Up => app.scroll_by(-1),
        KeyCode::Char('j') if vim_mode => app.scroll_by(1),
        KeyCode::Char('k') if vim_mode => app.scroll_by(-1),

        // Page scrolling
        KeyCode::PageDown => app.scroll_by(half_page(app.model.navigation.viewport_height)),
        KeyCode::PageUp => app.scroll_by(-half_page(app.model.navigation.viewport_height)),
        KeyCode::Home => app.scroll_to(0),
        KeyCode::End => app.scroll_to(app.model.navigation.max_scroll),
        KeyCode::Char('g') if vim_mode => {
            if pending_g {
                // gg - jump to top
                app.scroll_to(0);
            } else {
                // First 'g' press
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        KeyCode::Char('G') if vim_mode => app.scroll_to(app.model.navigation.max_scroll),

        // Section jumps
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(id) = c.to_digit(10).and_then(SectionId::from_hotkey) {
                app.scroll_to_section(id);
            }
        }
        KeyCode::Char('p') => app.scroll_to_section(SectionId::Projects),
        KeyCode::Char('m') => app.model.open_menu(),

        // Skills tabs
        KeyCode::Tab => cycle_skills_tab(app, true),
        KeyCode::BackTab => cycle_skills_tab(app, false),
        KeyCode::Char('l') if vim_mode => cycle_skills_tab(app, true),
        KeyCode::Char('h') if vim_mode => cycle_skills_tab(app, false),

        // Contact selection and actions
        KeyCode::Char(']') => cycle_contact(app, true),
        KeyCode::Char('[') => cycle_contact(app, false),
        KeyCode::Char('o') => {
            // Open contact link with configured command
            app.open_selected_contact();
        }
        KeyCode::Char('y') => {
            // Copy contact value to clipboard
            app.copy_selected_contact();
        }
        KeyCode::Char('i') => {
            // Open the primary image of the project under the probe
            app.open_project_image();
        }
        _ => {}
    }

    Ok(())
}

/// Keys while the section menu is showing
fn handle_menu_key(app: &mut App, key: KeyEvent) {
    let vim_mode = app.model.ui.vim_mode;
    let last = SectionId::ALL.len() - 1;
    let selection = app.model.navigation.menu_selection;

    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => app.model.close_menu(),
        KeyCode::Down => app.model.navigation.menu_selection = (selection + 1).min(last),
        KeyCode::Up => app.model.navigation.menu_selection = selection.saturating_sub(1),
        KeyCode::Char('j') if vim_mode => {
            app.model.navigation.menu_selection = (selection + 1).min(last)
        }
        KeyCode::Char('k') if vim_mode => {
            app.model.navigation.menu_selection = selection.saturating_sub(1)
        }
        KeyCode::Enter => {
            let section = app.model.menu_section();
            app.scroll_to_section(section);
        }
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(id) = c.to_digit(10).and_then(SectionId::from_hotkey) {
                app.scroll_to_section(id);
            }
        }
        _ => {}
    }
}

fn cycle_skills_tab(app: &mut App, forward: bool) {
    let tab_count = app.model.portfolio.skills.len();
    app.model.ui.skills_tab = logic::skills::cycle_tab(app.model.ui.skills_tab, tab_count, forward);
}

/// Contact entries cycle like tabs
fn cycle_contact(app: &mut App, forward: bool) {
    let count = app.model.contact_links().len();
    let current = app.model.navigation.selected_contact;
    app.model.navigation.selected_contact = logic::skills::cycle_tab(current, count, forward);
}
