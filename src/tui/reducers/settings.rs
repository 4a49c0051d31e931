use tracing::{debug, trace, warn};

use crate::config::{ConfigKey, ConfigStore};
use crate::tui::action::Action;
use crate::tui::component::Effect;
use crate::tui::panel::Panel;
use crate::tui::state::AppState;

/// Submit the settings form
///
/// Every field is read but only the server is stored: it is assigned even
/// when left empty, then the whole configuration is written to disk.
pub fn submit_settings(state: AppState) -> (AppState, Effect) {
    let mut new_state = state;

    let Panel::Settings(form) = &new_state.panel else {
        return (new_state, Effect::None);
    };

    let server = form.value(ConfigKey::Server).to_string();
    trace!(
        "SETTINGS: Form submitted (port={:?}, user={:?})",
        form.value(ConfigKey::Port),
        form.value(ConfigKey::User)
    );

    debug!("SETTINGS: Updating server to {:?}", server);
    new_state.system.config.set(ConfigKey::Server, server);

    let config = new_state.system.config.clone();
    (new_state, save_config_effect(config))
}

fn save_config_effect(config: ConfigStore) -> Effect {
    Effect::Async(Box::pin(async move {
        match config.save() {
            Ok(()) => {
                debug!("CONFIG: Successfully saved to disk");
                Action::SetStatusMessage {
                    message: format!(
                        "Configuration saved at {}",
                        chrono::Local::now().format("%H:%M:%S")
                    ),
                    is_error: false,
                }
            }
            Err(e) => {
                warn!("CONFIG: Failed to save: {}", e);
                Action::SetStatusMessage {
                    message: format!("Failed to save config: {}", e),
                    is_error: true,
                }
            }
        }
    }))
}
