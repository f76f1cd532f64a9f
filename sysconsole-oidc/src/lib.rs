//! OpenID Connect settings panel for sysconsole.
//!
//! Binds the six `OidcSettings` keys of the console configuration to a form:
//! an enable toggle plus the application id, secret, and the user API, auth,
//! and token endpoints. The text settings are disabled while OpenID Connect
//! is turned off.
//!
//! # Example
//!
//! ```ignore
//! use sysconsole_core::prelude::*;
//! use sysconsole_oidc::{OidcPresenceValidator, OidcSettingsPanel};
//!
//! let mut store = FileConfigStore::new("config/config.json");
//! let mut settings = AdminSettings::new(OidcSettingsPanel, store.load()?)?
//!     .with_validator(OidcPresenceValidator);
//!
//! settings.handle_change("enable", true.into())?;
//! settings.handle_change("id", "jcuS8PuvcpGhpgHhlcpT1Mx42pnqMxQY".into())?;
//! settings.save(&mut store)?;
//! ```

pub mod config;
pub mod messages;
pub mod panel;
pub mod state;
pub mod validation;

pub use config::{OidcConfig, SECTION};
pub use panel::OidcSettingsPanel;
pub use state::{config_from_state, field, state_from_config, OidcFormState};
pub use validation::OidcPresenceValidator;

pub mod prelude {
    //! Re-exports of the most commonly used OIDC panel types.
    pub use crate::{OidcConfig, OidcFormState, OidcPresenceValidator, OidcSettingsPanel};
}
