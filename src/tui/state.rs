use crate::config::ConfigStore;

use super::panel::Panel;
use super::types::Function;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
/// Components receive slices of this state as props.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Which entry is selected and where keyboard focus is
    pub navigation: NavigationState,

    /// Content shown for the selected entry
    pub panel: Panel,

    /// System state
    pub system: SystemState,
}

impl AppState {
    /// Startup state: the first navigation entry is selected and its panel built
    pub fn new(config: ConfigStore) -> Self {
        let first = Function::ALL[0];
        Self {
            navigation: NavigationState {
                selected: Some(first),
                content_focused: false,
            },
            panel: Panel::for_function(first, &config),
            system: SystemState {
                config,
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    /// None only before the first selection
    pub selected: Option<Function>,
    /// Whether focus is on the panel (true) or the navigation list (false)
    pub content_focused: bool,
}

/// Status bar hints while the navigation list has focus
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ↑↓ select | Enter open panel | 1-6 jump | q quit";

/// Status bar hints while a panel has focus
pub const PANEL_STATUS_MESSAGE: &str =
    "Keys: type to edit | Tab next field | Enter submit | Esc back";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: ConfigStore,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}
