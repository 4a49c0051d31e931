use crate::tui::component::{Component, Element};
use crate::tui::types::Function;
use crate::tui::widgets::NavListWidget;

#[derive(Debug, Clone)]
pub struct NavListProps {
    pub selected: Option<Function>,
    /// The list owns keyboard focus (the panel does not)
    pub focused: bool,
}

pub struct NavList;

impl Component for NavList {
    type Props = NavListProps;

    fn view(&self, props: &Self::Props) -> Element {
        Element::Widget(Box::new(NavListWidget {
            selected: props.selected,
            focused: props.focused,
        }))
    }
}
