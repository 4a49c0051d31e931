use crate::tui::component::{Component, Element};
use crate::tui::state::{DEFAULT_STATUS_MESSAGE, PANEL_STATUS_MESSAGE};
use crate::tui::widgets::StatusBarWidget;

#[derive(Debug, Clone)]
pub struct StatusBarProps {
    pub message: Option<String>,
    pub is_error: bool,
    pub content_focused: bool,
}

/// StatusBar component - shows the last status message, or key hints for
/// the current focus when there is none
pub struct StatusBar;

impl Component for StatusBar {
    type Props = StatusBarProps;

    fn view(&self, props: &Self::Props) -> Element {
        let message = match &props.message {
            Some(message) => message.clone(),
            None if props.content_focused => PANEL_STATUS_MESSAGE.to_string(),
            None => DEFAULT_STATUS_MESSAGE.to_string(),
        };

        Element::Widget(Box::new(StatusBarWidget {
            message,
            is_error: props.is_error,
        }))
    }
}
