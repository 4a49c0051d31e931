use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::tui::component::ElementWidget;

/// Single line of text, indented by one cell
#[derive(Debug, Clone)]
pub struct LabelWidget {
    pub text: String,
    pub style: Style,
}

impl LabelWidget {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl ElementWidget for LabelWidget {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        buf.set_stringn(
            area.x + 1,
            area.y,
            &self.text,
            (area.width - 1) as usize,
            self.style,
        );
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
