use tracing::debug;

use super::action::Action;
use super::component::Effect;
use super::reducers::{reduce_navigation, reduce_panel};
use super::state::AppState;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// All side effects (writing the config file) are returned as `Effect` to be
/// executed separately.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    // Navigation actions
    let state = match reduce_navigation(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::PanelAction(panel_action) => reduce_panel(state, panel_action),

        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }

        Action::Quit => {
            debug!("ACTION: Quit requested");
            (state, Effect::None)
        }

        // Navigation actions are consumed above
        _ => (state, Effect::None),
    }
}
