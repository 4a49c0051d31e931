//! Keyboard event to action mapping
//!
//! Converts crossterm KeyEvents into Actions. Which keys do what depends on
//! whether the navigation list or the panel has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use super::action::{Action, PanelAction};
use super::state::AppState;
use super::types::Function;

/// Keys that work regardless of focus
fn handle_global_keys(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

/// Jump straight to an entry with 1-6
fn handle_number_keys(key_code: KeyCode) -> Option<Action> {
    let KeyCode::Char(c) = key_code else {
        return None;
    };
    let index = c.to_digit(10)?.checked_sub(1)?;
    Function::from_index(index as usize).map(Action::SelectFunction)
}

/// Navigation list focused: move the selection or step into the panel
fn handle_navigation_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Enter | KeyCode::Right | KeyCode::Tab => Some(Action::FocusContent),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Panel focused: edit the focused input
fn handle_panel_keys(key_code: KeyCode) -> Option<Action> {
    let panel_action = match key_code {
        KeyCode::Esc => {
            debug!("KEY: ESC pressed in panel - returning to navigation");
            return Some(Action::FocusNavigation);
        }
        KeyCode::Enter => PanelAction::Submit,
        KeyCode::Backspace => PanelAction::DeleteChar,
        KeyCode::Tab | KeyCode::Down => PanelAction::FocusNextField,
        KeyCode::BackTab | KeyCode::Up => PanelAction::FocusPreviousField,
        KeyCode::Char(c) => PanelAction::InsertChar(c),
        _ => return None,
    };
    Some(Action::PanelAction(panel_action))
}

pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    let content_focused = state.navigation.content_focused;

    trace!(
        "KEY: {:?} (selected={:?}, content_focused={})",
        key.code,
        state.navigation.selected,
        content_focused
    );

    if let Some(action) = handle_global_keys(&key) {
        return Some(action);
    }

    if content_focused {
        return handle_panel_keys(key.code);
    }

    if let Some(action) = handle_number_keys(key.code) {
        return Some(action);
    }

    handle_navigation_keys(key.code)
}
