use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::tui::component::ElementWidget;
use crate::tui::table::{fit_cell, ColumnDef};

const COLUMN_SEPARATOR: &str = " ";

/// Plain text table: header row, rule, then one line per row
///
/// Cells are extracted and fitted when the widget is built, so rendering
/// only writes strings.
#[derive(Debug, Clone)]
pub struct DataTableWidget {
    header: String,
    rows: Vec<String>,
}

impl DataTableWidget {
    pub fn new<T>(columns: &[ColumnDef<T>], rows: &[T]) -> Self {
        let header = columns
            .iter()
            .map(|c| fit_cell(&c.header, c.width, c.align))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR);
        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| c.cell(row))
                    .collect::<Vec<_>>()
                    .join(COLUMN_SEPARATOR)
            })
            .collect();

        Self { header, rows }
    }
}

impl ElementWidget for DataTableWidget {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        let x = area.x + 1;
        let max_width = (area.width - 1) as usize;

        buf.set_stringn(
            x,
            area.y,
            &self.header,
            max_width,
            Style::default().add_modifier(Modifier::BOLD),
        );

        if area.height > 1 {
            let rule = "─".repeat(self.header.chars().count());
            buf.set_stringn(x, area.y + 1, &rule, max_width, Style::default());
        }

        for (i, line) in self.rows.iter().enumerate() {
            let y = area.y + 2 + i as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_stringn(x, y, line, max_width, Style::default());
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
