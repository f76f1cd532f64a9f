use std::path::PathBuf;

use sysconsole::{AppConfig, ConfigError, ConfigProperties};

pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// The `sysconsole.*` section of the application config.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsoleSettings {
    /// Console configuration file to edit (default: `config/config.json`).
    pub config_path: PathBuf,
    /// Optional message catalog (JSON object of message id to text).
    pub locale_path: Option<PathBuf>,
    /// Fallback log filter when `RUST_LOG` is unset (default: `info`).
    pub log_filter: String,
}

impl ConfigProperties for ConsoleSettings {
    fn prefix() -> &'static str {
        "sysconsole"
    }

    fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let locale_path = match config.get::<String>("sysconsole.locale.path") {
            Ok(path) => Some(PathBuf::from(path)),
            Err(ConfigError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };
        Ok(Self {
            config_path: PathBuf::from(
                config.get_or("sysconsole.config.path", DEFAULT_CONFIG_PATH.to_string()),
            ),
            locale_path,
            log_filter: config.get_or("sysconsole.log.filter", DEFAULT_LOG_FILTER.to_string()),
        })
    }
}
