//! Leaf widgets rendered directly into a ratatui Buffer
//!
//! Each widget owns the data it needs to draw itself, so it can be boxed
//! into an `Element::Widget` and rendered without access to `AppState`.

pub mod data_table;
pub mod label;
pub mod nav_list;
pub mod status_bar;
pub mod text_input;

pub use data_table::DataTableWidget;
pub use label::LabelWidget;
pub use nav_list::NavListWidget;
pub use status_bar::StatusBarWidget;
pub use text_input::TextInputWidget;
