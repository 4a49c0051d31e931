// Component library exports

pub mod app;
pub mod content_panel;
pub mod nav_list;
pub mod status_bar;

pub use app::App;
pub use content_panel::{ContentPanel, ContentPanelProps};
pub use nav_list::{NavList, NavListProps};
pub use status_bar::{StatusBar, StatusBarProps};
