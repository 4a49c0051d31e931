//! Column definitions for text tables
//!
//! - ColumnDef: header, width, alignment and a cell extraction function
//! - Alignment: text alignment for cells
//! - fit_cell: pad or truncate text to a column width

use std::fmt;
use std::sync::Arc;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::panel::LedgerRow;

/// Text alignment for table cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Column definition for a table
///
/// # Type Parameters
/// - `T`: The row data type
#[derive(Clone)]
pub struct ColumnDef<T> {
    /// Column header text
    pub header: String,

    /// Column width in terminal cells
    pub width: usize,

    pub align: Alignment,

    /// Function to extract the cell text from row data
    pub cell_fn: Arc<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T> ColumnDef<T> {
    pub fn new<F>(header: impl Into<String>, width: usize, align: Alignment, cell_fn: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            header: header.into(),
            width,
            align,
            cell_fn: Arc::new(cell_fn),
        }
    }

    /// Cell text for `row`, fitted to this column
    pub fn cell(&self, row: &T) -> String {
        fit_cell(&(self.cell_fn)(row), self.width, self.align)
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("header", &self.header)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("cell_fn", &"<closure>")
            .finish()
    }
}

/// Columns of the Analysis ledger table, in display order
pub fn ledger_columns() -> Vec<ColumnDef<LedgerRow>> {
    vec![
        ColumnDef::new("Amount", 10, Alignment::Right, |r: &LedgerRow| r.amount.clone()),
        ColumnDef::new("Debit", 10, Alignment::Left, |r: &LedgerRow| r.debit.clone()),
        ColumnDef::new("Offset Account", 15, Alignment::Left, |r: &LedgerRow| {
            r.offset_account.clone()
        }),
        ColumnDef::new("Date", 12, Alignment::Left, |r: &LedgerRow| r.date.clone()),
        ColumnDef::new("Description", 20, Alignment::Left, |r: &LedgerRow| {
            r.description.clone()
        }),
    ]
}

/// Pad or truncate `text` so it occupies exactly `width` terminal cells
pub fn fit_cell(text: &str, width: usize, align: Alignment) -> String {
    let mut fitted = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        fitted.push(c);
        used += w;
    }

    let padding = width - fitted.width();
    match align {
        Alignment::Left => format!("{}{}", fitted, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), fitted),
    }
}
