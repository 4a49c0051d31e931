//! Content panels and the state each one owns
//!
//! A panel is built from scratch every time its navigation entry is
//! selected, so nothing typed into one panel survives a switch to another.

use crate::config::{ConfigKey, ConfigStore};

use super::types::Function;

/// Text shown before any navigation entry has been selected
pub const PLACEHOLDER_TEXT: &str = "Select a function from the list on the left";

pub const ACCOUNT_NUMBER_PLACEHOLDER: &str = "Account number";

const MASK_CHAR: char = '•';

/// Single-line text input with placeholder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub placeholder: String,
    pub masked: bool,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            placeholder: placeholder.into(),
            masked: false,
        }
    }

    /// Input whose value is rendered as mask characters
    pub fn password(placeholder: impl Into<String>) -> Self {
        Self {
            masked: true,
            ..Self::new(placeholder)
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Value as it should appear on screen
    pub fn display_value(&self) -> String {
        self.mask(&self.value)
    }

    /// Masked inputs hide their placeholder too, since it holds the stored value
    pub fn display_placeholder(&self) -> String {
        self.mask(&self.placeholder)
    }

    fn mask(&self, text: &str) -> String {
        if self.masked {
            std::iter::repeat(MASK_CHAR).take(text.chars().count()).collect()
        } else {
            text.to_string()
        }
    }
}

/// One ledger line in the Analysis table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerRow {
    pub amount: String,
    pub debit: String,
    pub offset_account: String,
    pub date: String,
    pub description: String,
}

/// Rows shown under the Analysis table header
///
/// No data source feeds this table; it only ever carries the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerTable {
    rows: Vec<LedgerRow>,
}

impl LedgerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data rows (the header is not included)
    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPanel {
    pub account_number: TextInput,
    pub table: LedgerTable,
}

impl AnalysisPanel {
    pub fn new() -> Self {
        Self {
            account_number: TextInput::new(ACCOUNT_NUMBER_PLACEHOLDER),
            table: LedgerTable::new(),
        }
    }
}

impl Default for AnalysisPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: ConfigKey,
    pub input: TextInput,
}

/// Settings form: one input per configuration key
///
/// Inputs start empty and show the current value as placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub fields: Vec<FormField>,
    pub focused_field: usize,
}

impl SettingsForm {
    pub fn from_config(config: &ConfigStore) -> Self {
        let fields = ConfigKey::ALL
            .into_iter()
            .map(|key| {
                let current = config.get(key);
                let input = match key {
                    ConfigKey::Password => TextInput::password(current),
                    _ => TextInput::new(current),
                };
                FormField { key, input }
            })
            .collect();

        Self {
            fields,
            focused_field: 0,
        }
    }

    /// Text typed into the field for `key`
    pub fn value(&self, key: ConfigKey) -> &str {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.input.value.as_str())
            .unwrap_or_default()
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused_field = (self.focused_field + 1) % self.fields.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused_field = (self.focused_field + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        self.fields
            .get_mut(self.focused_field)
            .map(|field| &mut field.input)
    }
}

/// The content currently shown next to the navigation list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Panel {
    /// Nothing selected yet
    #[default]
    Placeholder,
    /// Static label (Overview, Capture, Report, Help)
    Label(Function),
    Analysis(AnalysisPanel),
    Settings(SettingsForm),
}

impl Panel {
    /// Build fresh content for a navigation entry
    pub fn for_function(function: Function, config: &ConfigStore) -> Self {
        match function {
            Function::Overview | Function::Capture | Function::Report | Function::Help => {
                Panel::Label(function)
            }
            Function::Analysis => Panel::Analysis(AnalysisPanel::new()),
            Function::Settings => Panel::Settings(SettingsForm::from_config(config)),
        }
    }

    /// Navigation entry this panel belongs to
    pub fn function(&self) -> Option<Function> {
        match self {
            Panel::Placeholder => None,
            Panel::Label(function) => Some(*function),
            Panel::Analysis(_) => Some(Function::Analysis),
            Panel::Settings(_) => Some(Function::Settings),
        }
    }

    /// Only panels with inputs can take keyboard focus
    pub fn accepts_focus(&self) -> bool {
        matches!(self, Panel::Analysis(_) | Panel::Settings(_))
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self {
            Panel::Analysis(analysis) => Some(&mut analysis.account_number),
            Panel::Settings(form) => form.focused_input_mut(),
            Panel::Placeholder | Panel::Label(_) => None,
        }
    }
}
