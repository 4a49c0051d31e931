use crate::config::{ConfigKey, ConfigStore};

const MASKED_VALUE: &str = "********";

/// Format the config file location and every effective value with its source
pub fn format_config(store: &ConfigStore) -> String {
    let path = store.path();
    let exists = if path.exists() { "yes" } else { "no" };

    let mut output = String::new();
    output.push_str(&format!(
        "Configuration File: {} (Exists: {})\n",
        path.display(),
        exists
    ));
    output.push('\n');
    output.push_str("Current Configuration:\n");
    output.push_str("=====================\n");

    for key in ConfigKey::ALL {
        let value = match key {
            ConfigKey::Password => MASKED_VALUE.to_string(),
            _ => store.get(key),
        };
        output.push_str(&format!(
            "{:<9} {:<20} ({})\n",
            format!("{}:", key),
            value,
            store.source(key)
        ));
    }

    output
}

pub fn run(store: &ConfigStore) {
    print!("{}", format_config(store));
}
