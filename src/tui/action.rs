use super::types::Function;

/// Global actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - Effects (config saves completing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation actions
    SelectFunction(Function),
    SelectPrevious,
    SelectNext,
    FocusContent,    // Enter/Right: move focus from the list into the panel
    FocusNavigation, // Esc: move focus from the panel back to the list

    // Panel input
    PanelAction(PanelAction),

    // System actions
    Quit,
    SetStatusMessage { message: String, is_error: bool },
}

/// Input routed to whichever panel is currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    InsertChar(char),
    DeleteChar,
    FocusNextField,
    FocusPreviousField,
    Submit,
}

impl Action {
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quit() {
        assert!(Action::Quit.is_quit());
        assert!(!Action::SelectNext.is_quit());
        assert!(!Action::PanelAction(PanelAction::Submit).is_quit());
        assert!(!Action::SetStatusMessage {
            message: "quit".to_string(),
            is_error: false,
        }
        .is_quit());
    }
}
