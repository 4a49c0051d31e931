//! NavList widget - the vertical function list on the left
//!
//! The selected entry carries a marker and the selection color, dimmed while
//! the panel has keyboard focus.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::tui::component::ElementWidget;
use crate::tui::constants::{APP_TITLE, SELECTION_FG, UNFOCUSED_SELECTION_FG};
use crate::tui::types::Function;

const SELECTED_MARKER: &str = "▶ ";
const UNSELECTED_MARKER: &str = "  ";

#[derive(Debug, Clone)]
pub struct NavListWidget {
    pub selected: Option<Function>,
    pub focused: bool,
}

impl NavListWidget {
    fn selection_style(&self) -> Style {
        let fg = if self.focused {
            SELECTION_FG
        } else {
            UNFOCUSED_SELECTION_FG
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }
}

impl ElementWidget for NavListWidget {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .title(format!(" {} ", APP_TITLE));
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, function) in Function::ALL.into_iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }

            let is_selected = self.selected == Some(function);
            let (marker, style) = if is_selected {
                (SELECTED_MARKER, self.selection_style())
            } else {
                (UNSELECTED_MARKER, Style::default())
            };
            let text = format!("{}{}", marker, function.label());
            buf.set_stringn(inner.x, y, &text, inner.width as usize, style);
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
