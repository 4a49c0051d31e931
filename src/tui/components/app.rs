use tracing::trace;

use crate::tui::component::{horizontal, vertical, Component, Constraint, Element};
use crate::tui::constants::{NAVIGATION_WIDTH_PERCENT, STATUS_BAR_HEIGHT};
use crate::tui::state::AppState;

use super::{
    ContentPanel, ContentPanelProps, NavList, NavListProps, StatusBar, StatusBarProps,
};

/// Root App component
///
/// Navigation list on the left, the selected panel on the right, status bar
/// underneath.
pub struct App;

impl Component for App {
    type Props = AppState;

    fn view(&self, props: &Self::Props) -> Element {
        trace!("APP: App.view() called with selected={:?}", props.navigation.selected);
        vertical(
            [
                Constraint::Min(0),                   // Navigation + content
                Constraint::Length(STATUS_BAR_HEIGHT), // StatusBar (separator + content)
            ],
            vec![self.render_main(props), self.render_status_bar(props)],
        )
    }
}

impl App {
    fn render_main(&self, state: &AppState) -> Element {
        let content_focused = state.navigation.content_focused;

        horizontal(
            [
                Constraint::Percentage(NAVIGATION_WIDTH_PERCENT),
                Constraint::Percentage(100 - NAVIGATION_WIDTH_PERCENT),
            ],
            vec![
                NavList.view(&NavListProps {
                    selected: state.navigation.selected,
                    focused: !content_focused,
                }),
                ContentPanel.view(&ContentPanelProps {
                    panel: state.panel.clone(),
                    focused: content_focused,
                }),
            ],
        )
    }

    fn render_status_bar(&self, state: &AppState) -> Element {
        StatusBar.view(&StatusBarProps {
            message: state.system.status_message.clone(),
            is_error: state.system.status_is_error,
            content_focused: state.navigation.content_focused,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use crate::tui::panel::PLACEHOLDER_TEXT;
    use crate::tui::state::DEFAULT_STATUS_MESSAGE;
    use crate::tui::testing::{buffer_lines, render_element, RENDER_WIDTH};

    #[test]
    fn test_initial_screen() {
        let state = AppState::new(ConfigStore::default());
        let buf = render_element(&App.view(&state), RENDER_WIDTH, 12);
        let lines = buffer_lines(&buf);

        // 20% of 80 columns for the list, content starts right after
        assert!(lines[0].starts_with(" Bookholder "));
        assert_eq!(lines[0].chars().nth(15), Some('│'));
        assert_eq!(lines[0].trim_end(), " Bookholder    │ Overview");
        assert!(!lines[0].contains(PLACEHOLDER_TEXT));
        assert!(lines[1].starts_with("▶ Overview"));
        assert!(lines[2].starts_with("  Capture"));
        assert!(lines[10].chars().all(|c| c == '─'));
        assert_eq!(lines[11].trim_end(), format!(" {}", DEFAULT_STATUS_MESSAGE));
    }

    #[test]
    fn test_app_has_main_and_status_bar() {
        match App.view(&AppState::default()) {
            Element::Container { children, .. } => assert_eq!(children.len(), 2),
            other => panic!("Expected container, got {:?}", other),
        }
    }
}
