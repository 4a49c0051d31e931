//! Core type definitions used across the UI
//!
//! The navigation list is a fixed, ordered set of functions. List order is
//! display order and also drives the number-key shortcuts (1-6).

/// One entry of the navigation list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Overview,
    Capture,
    Analysis,
    Report,
    Settings,
    Help,
}

impl Function {
    /// All entries in display order
    pub const ALL: [Function; 6] = [
        Function::Overview,
        Function::Capture,
        Function::Analysis,
        Function::Report,
        Function::Settings,
        Function::Help,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Capture => "Capture",
            Self::Analysis => "Analysis",
            Self::Report => "Report",
            Self::Settings => "Settings",
            Self::Help => "Help",
        }
    }

    /// Position in the navigation list
    pub fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Capture => 1,
            Self::Analysis => 2,
            Self::Report => 3,
            Self::Settings => 4,
            Self::Help => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next entry, wrapping from the last back to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous entry, wrapping from the first to the last
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
