pub mod navigation;
pub mod panel;
pub mod settings;

pub use navigation::reduce_navigation;
pub use panel::reduce_panel;
pub use settings::submit_settings;
