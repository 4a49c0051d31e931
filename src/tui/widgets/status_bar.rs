//! StatusBar widget - two lines at the bottom of the screen
//!
//! - Top line: horizontal separator
//! - Bottom line: status message, in the error color when it reports a failure

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::tui::component::ElementWidget;
use crate::tui::constants::ERROR_FG;

#[derive(Debug, Clone)]
pub struct StatusBarWidget {
    pub message: String,
    pub is_error: bool,
}

impl ElementWidget for StatusBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let separator = "─".repeat(area.width as usize);
        buf.set_string(area.x, area.y, &separator, Style::default());

        if area.height < 2 {
            return;
        }
        let style = if self.is_error {
            Style::default().fg(ERROR_FG)
        } else {
            Style::default()
        };
        buf.set_stringn(
            area.x,
            area.y + 1,
            format!(" {}", self.message),
            area.width as usize,
            style,
        );
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::{assert_buffer, render_widget};

    #[test]
    fn test_status_bar_renders_separator_and_message() {
        let widget = StatusBarWidget {
            message: "Configuration saved at 10:15:00".to_string(),
            is_error: false,
        };

        let buf = render_widget(&widget, 40, 2);

        assert_buffer(
            &buf,
            &[
                "────────────────────────────────────────",
                " Configuration saved at 10:15:00",
            ],
        );
        assert_eq!(buf[(1, 1)].fg, ratatui::style::Color::Reset);
    }

    #[test]
    fn test_error_message_uses_error_color() {
        let widget = StatusBarWidget {
            message: "Failed to save config".to_string(),
            is_error: true,
        };

        let buf = render_widget(&widget, 30, 2);

        assert_eq!(buf[(1, 1)].fg, ERROR_FG);
    }

    #[test]
    fn test_long_message_is_truncated() {
        let widget = StatusBarWidget {
            message: "abcdefghij".to_string(),
            is_error: false,
        };

        let buf = render_widget(&widget, 5, 2);

        assert_buffer(&buf, &["─────", " abcd"]);
    }
}
