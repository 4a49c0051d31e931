use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// File name of the configuration file, looked up in the home directory
pub const CONFIG_FILE_NAME: &str = "bookholder.yaml";

/// Prefix for environment variable overrides (`BOOKHOLDER_SERVER`, ...)
pub const ENV_PREFIX: &str = "BOOKHOLDER";

/// The four configuration keys understood by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Server,
    Port,
    User,
    Password,
}

impl ConfigKey {
    /// All keys, in the order they are shown and written
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::Server,
        ConfigKey::Port,
        ConfigKey::User,
        ConfigKey::Password,
    ];

    /// Canonical name as written to the config file
    pub fn name(self) -> &'static str {
        match self {
            Self::Server => "Server",
            Self::Port => "Port",
            Self::User => "User",
            Self::Password => "Password",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            Self::Server => "localhost",
            Self::Port => "8080",
            Self::User => "admin",
            Self::Password => "admin",
        }
    }

    /// Environment variable that overrides this key
    pub fn env_var(self) -> String {
        format!("{}_{}", ENV_PREFIX, self.name().to_uppercase())
    }

    fn matches(self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the effective value of a key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Default,
    File,
    Environment,
    Override,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Default => "default",
            Self::File => "file",
            Self::Environment => "env",
            Self::Override => "set",
        };
        f.write_str(label)
    }
}

/// Snapshot of the effective configuration values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub server: String,
    pub port: String,
    pub user: String,
    pub password: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ConfigKey::Server.default_value().to_string(),
            port: ConfigKey::Port.default_value().to_string(),
            user: ConfigKey::User.default_value().to_string(),
            password: ConfigKey::Password.default_value().to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    HomeDirUnavailable,

    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize configuration")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write config file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Path of the configuration file: `$HOME/bookholder.yaml`
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
    Ok(home.join(CONFIG_FILE_NAME))
}

/// Layered key-value configuration
///
/// Lookup order for each key, highest priority first:
/// 1. values assigned with [`ConfigStore::set`]
/// 2. `BOOKHOLDER_*` environment variables captured at load time
/// 3. the YAML config file
/// 4. built-in defaults
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    file: Mapping,
    env: HashMap<ConfigKey, String>,
    overrides: HashMap<ConfigKey, String>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        ConfigStore {
            path: PathBuf::from(CONFIG_FILE_NAME),
            file: Mapping::new(),
            env: HashMap::new(),
            overrides: HashMap::new(),
        }
    }
}

impl ConfigStore {
    /// Load from `$HOME/bookholder.yaml` and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;
        let env = std::env::vars_os().filter_map(|(name, value)| {
            Some((name.into_string().ok()?, value.into_string().ok()?))
        });
        Self::load_from(&path, env)
    }

    /// Load from an explicit path and set of environment variables
    ///
    /// A missing file is not an error: every key then falls back to the
    /// environment or its default. Empty environment values count as unset.
    pub fn load_from<I>(path: &Path, env: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let file = match fs::read_to_string(path) {
            Ok(content) => parse_mapping(path, &content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("CONFIG: No config file at {}, using defaults", path.display());
                Mapping::new()
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let env = env
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .filter_map(|(name, value)| {
                ConfigKey::ALL
                    .into_iter()
                    .find(|key| key.env_var() == name)
                    .map(|key| (key, value))
            })
            .collect::<HashMap<_, _>>();

        info!(
            "CONFIG: Loaded {} ({} file entries, {} env overrides)",
            path.display(),
            file.len(),
            env.len()
        );

        Ok(ConfigStore {
            path: path.to_path_buf(),
            file,
            env,
            overrides: HashMap::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Effective value of a key
    pub fn get(&self, key: ConfigKey) -> String {
        if let Some(value) = self.overrides.get(&key) {
            return value.clone();
        }
        if let Some(value) = self.env.get(&key) {
            return value.clone();
        }
        if let Some(value) = self.file_value(key) {
            return value;
        }
        key.default_value().to_string()
    }

    pub fn source(&self, key: ConfigKey) -> ConfigSource {
        if self.overrides.contains_key(&key) {
            ConfigSource::Override
        } else if self.env.contains_key(&key) {
            ConfigSource::Environment
        } else if self.file_value(key).is_some() {
            ConfigSource::File
        } else {
            ConfigSource::Default
        }
    }

    /// Assign a value in memory; call [`ConfigStore::save`] to persist it
    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        let value = value.into();
        debug!("CONFIG: Set {} = {:?}", key, value);
        self.overrides.insert(key, value);
    }

    pub fn snapshot(&self) -> Config {
        Config {
            server: self.get(ConfigKey::Server),
            port: self.get(ConfigKey::Port),
            user: self.get(ConfigKey::User),
            password: self.get(ConfigKey::Password),
        }
    }

    /// Write the effective values of all keys back to the config file
    ///
    /// Entries in the file that are not configuration keys are kept as-is.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(&self.to_mapping()).map_err(ConfigError::Serialize)?;
        fs::write(&self.path, content).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!("CONFIG: Saved to {}", self.path.display());
        Ok(())
    }

    fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        for key in ConfigKey::ALL {
            mapping.insert(Value::from(key.name()), Value::from(self.get(key)));
        }
        for (name, value) in &self.file {
            let is_known = name
                .as_str()
                .map(|name| ConfigKey::ALL.into_iter().any(|key| key.matches(name)))
                .unwrap_or(false);
            if !is_known {
                mapping.insert(name.clone(), value.clone());
            }
        }
        mapping
    }

    fn file_value(&self, key: ConfigKey) -> Option<String> {
        self.file
            .iter()
            .find(|(name, _)| name.as_str().map(|name| key.matches(name)).unwrap_or(false))
            .and_then(|(_, value)| scalar_to_string(value))
    }
}

fn parse_mapping(path: &Path, content: &str) -> Result<Mapping, ConfigError> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let parse_error = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    match serde_yaml::from_str::<Value>(content).map_err(parse_error)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(parse_error(<serde_yaml::Error as serde::de::Error>::custom(
            "expected a mapping of keys to values",
        ))),
    }
}

/// Scalars of any YAML type are read as their string form
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
