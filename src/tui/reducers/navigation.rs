use tracing::{debug, trace};

use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::panel::Panel;
use crate::tui::state::{AppState, PANEL_STATUS_MESSAGE};
use crate::tui::types::Function;

/// Handle all navigation-related actions
///
/// Returns `Ok((state, effect))` if the action was handled, or `Err(state)`
/// to hand ownership back for the next reducer to try.
pub fn reduce_navigation(
    state: AppState,
    action: &Action,
) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::SelectFunction(function) => Ok(select_function(state, *function)),
        Action::SelectPrevious => {
            let target = state
                .navigation
                .selected
                .map(Function::previous)
                .unwrap_or(Function::ALL[0]);
            Ok(select_function(state, target))
        }
        Action::SelectNext => {
            let target = state
                .navigation
                .selected
                .map(Function::next)
                .unwrap_or(Function::ALL[0]);
            Ok(select_function(state, target))
        }
        Action::FocusContent => Ok(focus_content(state)),
        Action::FocusNavigation => Ok(focus_navigation(state)),
        _ => Err(state),
    }
}

/// Discard the current panel and build the one for `function`
///
/// Re-selecting the current entry also rebuilds it from scratch.
fn select_function(state: AppState, function: Function) -> (AppState, Effect) {
    trace!("Selecting function: {:?}", function);
    let mut new_state = state;
    new_state.panel = Panel::for_function(function, &new_state.system.config);
    new_state.navigation.selected = Some(function);
    new_state.navigation.content_focused = false;
    (new_state, Effect::None)
}

fn focus_content(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;
    if !new_state.panel.accepts_focus() {
        debug!("FOCUS: Panel has no inputs, staying on navigation list");
        return (new_state, Effect::None);
    }

    debug!("FOCUS: Entering panel focus");
    new_state.navigation.content_focused = true;
    new_state
        .system
        .set_status_message(PANEL_STATUS_MESSAGE.to_string());
    (new_state, Effect::None)
}

fn focus_navigation(state: AppState) -> (AppState, Effect) {
    debug!("FOCUS: Returning to navigation list");
    let mut new_state = state;
    new_state.navigation.content_focused = false;
    new_state.system.reset_status_message();
    (new_state, Effect::None)
}
