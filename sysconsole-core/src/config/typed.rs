use super::{AppConfig, ConfigError};

/// Trait for strongly-typed application configuration sections.
///
/// ```ignore
/// pub struct ConsoleSettings {
///     pub config_path: String,
///     pub log_filter: String,
/// }
///
/// impl ConfigProperties for ConsoleSettings {
///     fn prefix() -> &'static str {
///         "sysconsole"
///     }
///
///     fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
///         Ok(Self {
///             config_path: config.get("sysconsole.config.path")?,
///             log_filter: config.get_or("sysconsole.log.filter", "info".into()),
///         })
///     }
/// }
/// ```
pub trait ConfigProperties: Sized {
    /// The configuration key prefix (e.g., `"sysconsole"`).
    fn prefix() -> &'static str;

    /// Construct from an `AppConfig` instance.
    fn from_config(config: &AppConfig) -> Result<Self, ConfigError>;
}
