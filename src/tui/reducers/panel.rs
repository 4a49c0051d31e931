use tracing::debug;

use crate::tui::action::PanelAction;
use crate::tui::component::Effect;
use crate::tui::panel::Panel;
use crate::tui::reducers::submit_settings;
use crate::tui::state::AppState;

/// Apply input to whichever panel is shown
///
/// Panels without inputs ignore everything.
pub fn reduce_panel(state: AppState, action: PanelAction) -> (AppState, Effect) {
    let mut new_state = state;

    match action {
        PanelAction::InsertChar(c) => {
            if let Some(input) = new_state.panel.focused_input_mut() {
                input.insert(c);
            }
            (new_state, Effect::None)
        }

        PanelAction::DeleteChar => {
            if let Some(input) = new_state.panel.focused_input_mut() {
                input.backspace();
            }
            (new_state, Effect::None)
        }

        PanelAction::FocusNextField => {
            if let Panel::Settings(form) = &mut new_state.panel {
                form.focus_next();
            }
            (new_state, Effect::None)
        }

        PanelAction::FocusPreviousField => {
            if let Panel::Settings(form) = &mut new_state.panel {
                form.focus_previous();
            }
            (new_state, Effect::None)
        }

        PanelAction::Submit => match &new_state.panel {
            Panel::Analysis(analysis) => {
                // The account number is not wired to any data source
                debug!("Submitted: {}", analysis.account_number.value);
                (new_state, Effect::None)
            }
            Panel::Settings(_) => submit_settings(new_state),
            Panel::Placeholder | Panel::Label(_) => (new_state, Effect::None),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigKey;
    use crate::tui::types::Function;

    fn state_with(function: Function) -> AppState {
        let mut state = AppState::default();
        state.panel = Panel::for_function(function, &state.system.config);
        state.navigation.selected = Some(function);
        state
    }

    fn type_text(state: AppState, text: &str) -> AppState {
        text.chars().fold(state, |state, c| {
            reduce_panel(state, PanelAction::InsertChar(c)).0
        })
    }

    #[test]
    fn test_typing_into_account_number() {
        let state = type_text(state_with(Function::Analysis), "1920");

        let (state, _) = reduce_panel(state, PanelAction::DeleteChar);

        match &state.panel {
            Panel::Analysis(analysis) => assert_eq!(analysis.account_number.value, "192"),
            other => panic!("Expected Analysis panel, got {:?}", other),
        }
    }

    #[test]
    fn test_analysis_submit_changes_nothing() {
        let state = type_text(state_with(Function::Analysis), "1920");
        let before = state.panel.clone();

        let (state, effect) = reduce_panel(state, PanelAction::Submit);

        assert_eq!(state.panel, before);
        assert!(matches!(effect, Effect::None));
        assert_eq!(state.system.config.get(ConfigKey::Server), "localhost");
        match &state.panel {
            Panel::Analysis(analysis) => assert!(analysis.table.rows().is_empty()),
            other => panic!("Expected Analysis panel, got {:?}", other),
        }
    }

    #[test]
    fn test_label_panel_ignores_input() {
        let state = state_with(Function::Help);

        let (state, effect) = reduce_panel(state, PanelAction::InsertChar('x'));
        assert_eq!(state.panel, Panel::Label(Function::Help));
        assert!(matches!(effect, Effect::None));

        let (state, effect) = reduce_panel(state, PanelAction::Submit);
        assert_eq!(state.panel, Panel::Label(Function::Help));
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_settings_field_navigation_routes_typing() {
        let state = state_with(Function::Settings);
        let state = type_text(state, "srv");
        let (state, _) = reduce_panel(state, PanelAction::FocusNextField);
        let state = type_text(state, "9000");
        let (state, _) = reduce_panel(state, PanelAction::FocusPreviousField);
        let state = type_text(state, "1");

        match &state.panel {
            Panel::Settings(form) => {
                assert_eq!(form.value(ConfigKey::Server), "srv1");
                assert_eq!(form.value(ConfigKey::Port), "9000");
            }
            other => panic!("Expected Settings panel, got {:?}", other),
        }
    }

    #[test]
    fn test_settings_submit_returns_save_effect() {
        let state = type_text(state_with(Function::Settings), "ledger.local");

        let (state, effect) = reduce_panel(state, PanelAction::Submit);

        assert_eq!(state.system.config.get(ConfigKey::Server), "ledger.local");
        assert!(matches!(effect, Effect::Async(_)));
    }
}
