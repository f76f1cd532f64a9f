pub mod config;
pub mod form;
pub mod i18n;
pub mod logging;
pub mod panel;
pub mod prelude;
pub mod store;
pub mod ui;
pub mod validation;

pub use config::{
    AppConfig, ConfigDocument, ConfigError, ConfigProperties, ConfigValue, FromConfigValue,
};
pub use form::{FieldKind, FieldValue, FormError, FormState};
pub use i18n::{DefaultMessages, Localizer, MessageCatalog};
pub use logging::{init_tracing, TracingHandle};
pub use panel::{AdminSettings, RenderedPanel, SaveError, SettingsPanel};
pub use store::{ConfigStore, FileConfigStore, InMemoryConfigStore, StoreError};
pub use ui::{BooleanSetting, Message, Setting, SettingsGroup, Text, TextSetting};
pub use validation::{field_errors_from_report, ConfigValidator, FieldError};
