//! Bordered single-line input
//!
//! Shows the placeholder in gray while the input is empty, and a block
//! cursor after the text while focused.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::ElementWidget;
use crate::tui::constants::{PLACEHOLDER_FG, SELECTION_FG};
use crate::tui::panel::TextInput;

const CURSOR: &str = "█";

#[derive(Debug, Clone)]
pub struct TextInputWidget {
    pub title: Option<String>,
    pub value: String,
    pub placeholder: String,
    pub focused: bool,
}

impl TextInputWidget {
    pub fn from_input(input: &TextInput, focused: bool) -> Self {
        Self {
            title: None,
            value: input.display_value(),
            placeholder: input.display_placeholder(),
            focused,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl ElementWidget for TextInputWidget {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(SELECTION_FG)
        } else {
            Style::default()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        if let Some(title) = &self.title {
            block = block.title(format!(" {} ", title));
        }

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let max_width = inner.width as usize;
        if self.value.is_empty() {
            let mut x = inner.x;
            if self.focused {
                (x, _) = buf.set_stringn(x, inner.y, CURSOR, 1, Style::default());
            }
            let remaining = max_width - (x - inner.x) as usize;
            buf.set_stringn(
                x,
                inner.y,
                &self.placeholder,
                remaining,
                Style::default().fg(PLACEHOLDER_FG),
            );
            return;
        }

        let (x, _) = buf.set_stringn(inner.x, inner.y, &self.value, max_width, Style::default());
        if self.focused && self.value.width() < max_width {
            buf.set_stringn(x, inner.y, CURSOR, 1, Style::default());
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{assert_buffer, render_widget};

    fn widget(value: &str, focused: bool) -> TextInputWidget {
        TextInputWidget {
            title: None,
            value: value.to_string(),
            placeholder: "Account number".to_string(),
            focused,
        }
    }

    #[test]
    fn test_empty_input_shows_placeholder() {
        let buf = render_widget(&widget("", false), 20, 3);

        assert_buffer(
            &buf,
            &[
                "┌──────────────────┐",
                "│Account number    │",
                "└──────────────────┘",
            ],
        );
        assert_eq!(buf[(1, 1)].fg, PLACEHOLDER_FG);
    }

    #[test]
    fn test_value_replaces_placeholder() {
        let buf = render_widget(&widget("1920", false), 20, 3);
        assert_eq!(buffer_line(&buf, 1), "│1920              │");
    }

    #[test]
    fn test_focused_input_shows_cursor() {
        let buf = render_widget(&widget("19", true), 10, 3);
        assert_eq!(buffer_line(&buf, 1), "│19█     │");
    }

    #[test]
    fn test_focused_empty_input_keeps_placeholder_visible() {
        let buf = render_widget(&widget("", true), 20, 3);
        assert_eq!(buffer_line(&buf, 1), "│█Account number   │");
    }

    #[test]
    fn test_title_on_border() {
        let buf = render_widget(&widget("", false).title("Server"), 16, 3);
        assert_eq!(buffer_line(&buf, 0), "┌ Server ──────┐");
    }

    #[test]
    fn test_masked_input_from_panel_state() {
        let mut input = TextInput::password("admin");
        input.insert('p');
        input.insert('w');

        let buf = render_widget(&TextInputWidget::from_input(&input, false), 10, 3);

        assert_eq!(buffer_line(&buf, 1), "│••      │");

        let empty = TextInput::password("admin");
        let buf = render_widget(&TextInputWidget::from_input(&empty, false), 10, 3);
        assert_eq!(buffer_line(&buf, 1), "│•••••   │");
    }

    fn buffer_line(buf: &Buffer, y: usize) -> String {
        crate::tui::testing::buffer_lines(buf)[y].clone()
    }
}
