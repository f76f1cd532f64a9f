//! sysconsole prelude: import everything a panel or host needs with a single `use`.
//!
//! ```ignore
//! use sysconsole_core::prelude::*;
//! ```

pub use crate::config::{ConfigDocument, ConfigError, ConfigValue};
pub use crate::form::{FieldKind, FieldValue, FormError, FormState};
pub use crate::i18n::{DefaultMessages, Localizer, MessageCatalog};
pub use crate::panel::{AdminSettings, RenderedPanel, SaveError, SettingsPanel};
pub use crate::store::{ConfigStore, FileConfigStore, InMemoryConfigStore};
pub use crate::ui::{BooleanSetting, Setting, SettingsGroup, Text, TextSetting};
pub use crate::validation::{ConfigValidator, FieldError};
