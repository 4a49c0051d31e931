//! Content area to the right of the navigation list
//!
//! Dispatches on the current [`Panel`] and lays out its widgets.

use ratatui::style::Style;

use crate::tui::component::{vertical, Component, Constraint, ContainerLayout, Element};
use crate::tui::constants::{INPUT_HEIGHT, PLACEHOLDER_FG};
use crate::tui::panel::{AnalysisPanel, Panel, SettingsForm, PLACEHOLDER_TEXT};
use crate::tui::table::ledger_columns;
use crate::tui::widgets::{DataTableWidget, LabelWidget, TextInputWidget};

pub const SETTINGS_SUBMIT_HINT: &str = "Press Enter to save";

#[derive(Debug, Clone)]
pub struct ContentPanelProps {
    pub panel: Panel,
    /// Keyboard focus is inside the panel
    pub focused: bool,
}

pub struct ContentPanel;

impl Component for ContentPanel {
    type Props = ContentPanelProps;

    fn view(&self, props: &Self::Props) -> Element {
        match &props.panel {
            Panel::Placeholder => Element::Widget(Box::new(
                LabelWidget::new(PLACEHOLDER_TEXT).style(Style::default().fg(PLACEHOLDER_FG)),
            )),
            Panel::Label(function) => Element::Widget(Box::new(LabelWidget::new(function.label()))),
            Panel::Analysis(analysis) => self.analysis(analysis, props.focused),
            Panel::Settings(form) => self.settings(form, props.focused),
        }
    }
}

impl ContentPanel {
    /// Account number input above the ledger table
    fn analysis(&self, analysis: &AnalysisPanel, focused: bool) -> Element {
        vertical(
            [Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)],
            vec![
                Element::Widget(Box::new(TextInputWidget::from_input(
                    &analysis.account_number,
                    focused,
                ))),
                Element::Widget(Box::new(DataTableWidget::new(
                    &ledger_columns(),
                    analysis.table.rows(),
                ))),
            ],
        )
    }

    /// One titled input per key, then the submit hint
    fn settings(&self, form: &SettingsForm, focused: bool) -> Element {
        let mut constraints = vec![Constraint::Length(INPUT_HEIGHT); form.fields.len()];
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));

        let mut children: Vec<Element> = form
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let is_focused = focused && i == form.focused_field;
                Element::Widget(Box::new(
                    TextInputWidget::from_input(&field.input, is_focused).title(field.key.name()),
                ))
            })
            .collect();
        children.push(Element::Widget(Box::new(
            LabelWidget::new(SETTINGS_SUBMIT_HINT).style(Style::default().fg(PLACEHOLDER_FG)),
        )));
        children.push(Element::None);

        Element::Container {
            children,
            layout: ContainerLayout::Vertical(constraints),
        }
    }
}
