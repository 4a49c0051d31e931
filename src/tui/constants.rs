use ratatui::style::Color;

/// Window title shown on the navigation list border
pub const APP_TITLE: &str = "Bookholder";

/// Share of the width given to the navigation list (split offset 0.2)
pub const NAVIGATION_WIDTH_PERCENT: u16 = 20;

/// Status bar height: separator line + message line
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Height of a bordered single-line text input
pub const INPUT_HEIGHT: u16 = 3;

/// Foreground for the selected navigation entry
pub const SELECTION_FG: Color = Color::Rgb(255, 165, 0); // Orange

/// Selected entry while focus is in the panel (50% darker)
pub const UNFOCUSED_SELECTION_FG: Color = Color::Rgb(127, 82, 0);

pub const PLACEHOLDER_FG: Color = Color::DarkGray;

pub const ERROR_FG: Color = Color::Red;
