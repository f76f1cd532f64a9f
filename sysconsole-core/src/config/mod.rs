mod document;
mod loader;
pub mod typed;
pub mod value;

use std::ops::Deref;
use std::path::Path;

pub use document::ConfigDocument;
pub use typed::ConfigProperties;
pub use value::{ConfigValue, FromConfigValue};

use loader::FlatValues;

/// Prefix of environment variables that override application config keys.
pub const ENV_PREFIX: &str = "SYSCONSOLE_";
/// Environment variable that selects the active profile.
pub const PROFILE_ENV: &str = "SYSCONSOLE_PROFILE";

#[derive(Debug)]
pub enum ConfigError {
    /// No value at the requested key or path.
    NotFound(String),
    /// A value exists but cannot be read as the requested type.
    TypeMismatch { key: String, expected: &'static str },
    /// A file or document could not be read or parsed.
    Load(String),
    /// A subtree could not be deserialized into a typed section.
    Section { key: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(key) => write!(f, "Missing configuration value '{key}'"),
            ConfigError::TypeMismatch { key, expected } => {
                write!(f, "Configuration value '{key}' is not a valid {expected}")
            }
            ConfigError::Load(msg) => write!(f, "Failed to load configuration: {msg}"),
            ConfigError::Section { key, message } => {
                write!(f, "Configuration section '{key}' is malformed: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings of the console host itself.
///
/// Not to be confused with [`ConfigDocument`], the configuration the console
/// edits. `AppConfig` gives raw dot-key access; `AppConfig<T>` also derefs to
/// a typed section built with [`AppConfig::with_typed`].
///
/// Layers, later ones winning:
/// 1. `sysconsole.yaml`
/// 2. `sysconsole-{profile}.yaml`
/// 3. `.env` then `.env.{profile}`, which only fill variables not already set
/// 4. `SYSCONSOLE_*` variables: `SYSCONSOLE_CONFIG_PATH` sets `sysconsole.config.path`
///
/// The profile is `SYSCONSOLE_PROFILE` if set, else the caller's choice.
#[derive(Debug, Clone)]
pub struct AppConfig<T = ()> {
    values: FlatValues,
    profile: String,
    typed: T,
}

/// `SYSCONSOLE_LOG_FILTER` -> `sysconsole.log.filter`
fn env_key(var: &str) -> Option<String> {
    var.strip_prefix(ENV_PREFIX)
        .filter(|rest| !rest.is_empty())
        .map(|rest| format!("sysconsole.{}", rest.to_ascii_lowercase().replace('_', ".")))
}

impl AppConfig {
    fn untyped(values: FlatValues, profile: impl Into<String>) -> Self {
        AppConfig {
            values,
            profile: profile.into(),
            typed: (),
        }
    }

    /// Resolve every layer found in `dir` for `profile`.
    pub fn load_from(dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        let profile = std::env::var(PROFILE_ENV).unwrap_or_else(|_| profile.to_string());
        let mut values = FlatValues::new();

        for file in ["sysconsole.yaml".to_string(), format!("sysconsole-{profile}.yaml")] {
            loader::load_yaml_file(&dir.join(file), &mut values)?;
        }

        for file in [".env".to_string(), format!(".env.{profile}")] {
            if dotenvy::from_path(dir.join(&file)).is_ok() {
                tracing::debug!(file = %file, "Loaded environment file");
            }
        }

        let overrides: Vec<_> = std::env::vars()
            .filter_map(|(var, value)| env_key(&var).map(|key| (key, value)))
            .collect();
        let overridden = overrides.len();
        values.extend(
            overrides
                .into_iter()
                .map(|(key, value)| (key, ConfigValue::String(value))),
        );

        tracing::debug!(%profile, keys = values.len(), overridden, "Application config resolved");
        Ok(Self::untyped(values, profile))
    }

    /// [`load_from`](Self::load_from) the working directory.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), profile)
    }

    /// A single YAML layer, no files or environment.
    pub fn from_yaml_str(yaml: &str, profile: &str) -> Result<Self, ConfigError> {
        let mut values = FlatValues::new();
        loader::load_yaml_str(yaml, &mut values)?;
        Ok(Self::untyped(values, profile))
    }

    pub fn empty() -> Self {
        Self::untyped(FlatValues::new(), "test")
    }

    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Build the typed section `C` and attach it.
    pub fn with_typed<C: ConfigProperties>(self) -> Result<AppConfig<C>, ConfigError> {
        let typed = C::from_config(&self)?;
        tracing::debug!(section = C::prefix(), "Typed configuration bound");
        Ok(AppConfig {
            values: self.values,
            profile: self.profile,
            typed,
        })
    }
}

impl<T> AppConfig<T> {
    /// Read the value at a dot-separated key.
    pub fn get<V: FromConfigValue>(&self, key: &str) -> Result<V, ConfigError> {
        match self.values.get(key) {
            Some(value) => V::from_config_value(value, key),
            None => Err(ConfigError::NotFound(key.to_string())),
        }
    }

    /// Like [`get`](Self::get), but any error yields `default`.
    pub fn get_or<V: FromConfigValue>(&self, key: &str, default: V) -> V {
        self.get(key).unwrap_or(default)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn typed(&self) -> &T {
        &self.typed
    }
}

impl<T> Deref for AppConfig<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.typed
    }
}

#[cfg(test)]
mod tests {
    use super::env_key;

    #[test]
    fn env_keys_are_scoped_to_prefix() {
        assert_eq!(
            env_key("SYSCONSOLE_CONFIG_PATH").as_deref(),
            Some("sysconsole.config.path")
        );
        assert_eq!(env_key("SYSCONSOLE_").as_deref(), None);
        assert_eq!(env_key("PATH"), None);
    }
}
