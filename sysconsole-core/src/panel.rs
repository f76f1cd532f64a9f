//! Settings panels and the generic controller that drives them.
//!
//! A panel is a field mapping plus a render callback: it knows how to read
//! its form state out of a configuration document, how to write it back, and
//! how to describe its controls. Everything else (edit routing, dirty
//! tracking, save and cancel, validation, persistence) lives in
//! [`AdminSettings`], which owns a panel rather than being extended by one.
//!
//! # Example
//!
//! ```ignore
//! let config = store.load()?;
//! let mut settings = AdminSettings::new(OidcSettingsPanel, config)?;
//!
//! settings.handle_change("enable", FieldValue::Bool(true))?;
//! settings.handle_change("id", "my-client".into())?;
//!
//! let rendered = settings.render(&DefaultMessages);
//! assert!(rendered.save_needed);
//!
//! settings.save(&mut store)?;
//! ```

use serde::Serialize;

use crate::config::{ConfigDocument, ConfigError};
use crate::form::{FieldValue, FormError, FormState};
use crate::i18n::Localizer;
use crate::store::{ConfigStore, StoreError};
use crate::ui::{SettingsGroup, Text};
use crate::validation::{ConfigValidator, FieldError};

/// A settings panel: two projections between a configuration document and a
/// form state, plus the description of its controls.
pub trait SettingsPanel {
    type State: FormState;

    /// Read the panel's form state out of the configuration.
    fn state_from_config(&self, config: &ConfigDocument) -> Result<Self::State, ConfigError>;

    /// Write the form state into `config`, leaving every other key untouched.
    fn config_from_state(&self, config: ConfigDocument, state: &Self::State) -> ConfigDocument;

    fn render_title(&self) -> Text;

    /// Describe the panel's controls for the given state.
    fn render_settings(&self, state: &Self::State, localizer: &dyn Localizer) -> SettingsGroup;
}

/// Error returned by [`AdminSettings::save`].
#[derive(Debug)]
pub enum SaveError {
    /// One or more validators rejected the candidate configuration.
    Validation(Vec<FieldError>),
    /// The store failed to persist the configuration.
    Store(StoreError),
    /// The stored configuration could not be read back into form state.
    Reload(ConfigError),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Validation(errors) => {
                write!(f, "Settings validation failed:")?;
                for error in errors {
                    write!(f, "\n  - {error}")?;
                }
                Ok(())
            }
            SaveError::Store(err) => write!(f, "{err}"),
            SaveError::Reload(err) => write!(f, "Saved settings could not be reloaded: {err}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Validation(_) => None,
            SaveError::Store(err) => Some(err),
            SaveError::Reload(err) => Some(err),
        }
    }
}

impl From<StoreError> for SaveError {
    fn from(err: StoreError) -> Self {
        SaveError::Store(err)
    }
}

/// Snapshot of a panel ready for the host to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPanel {
    pub title: Text,
    pub settings: SettingsGroup,
    /// The form holds edits that have not been saved.
    pub save_needed: bool,
    /// Message from the last failed save, if any.
    pub server_error: Option<String>,
}

/// Generic settings-form controller.
///
/// Owns the configuration the form was seeded from, the live form state,
/// and the last-saved form state used for dirty tracking.
pub struct AdminSettings<P: SettingsPanel> {
    panel: P,
    config: ConfigDocument,
    saved: P::State,
    state: P::State,
    server_error: Option<String>,
    validators: Vec<Box<dyn ConfigValidator>>,
}

impl<P: SettingsPanel> AdminSettings<P> {
    /// Mount `panel` on `config`, seeding the form state from it.
    pub fn new(panel: P, config: ConfigDocument) -> Result<Self, ConfigError> {
        let state = panel.state_from_config(&config)?;
        Ok(Self {
            panel,
            config,
            saved: state.clone(),
            state,
            server_error: None,
            validators: Vec::new(),
        })
    }

    /// Register a validator run on every save.
    pub fn with_validator(mut self, validator: impl ConfigValidator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn state(&self) -> &P::State {
        &self.state
    }

    /// The configuration as last loaded or saved.
    pub fn config(&self) -> &ConfigDocument {
        &self.config
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    /// Apply a single field edit.
    pub fn handle_change(&mut self, field: &str, value: FieldValue) -> Result<(), FormError> {
        self.state.set_field(field, value)?;
        tracing::debug!(field, dirty = self.is_dirty(), "Settings field changed");
        Ok(())
    }

    /// Whether the live state differs from the last-saved state.
    pub fn is_dirty(&self) -> bool {
        self.state != self.saved
    }

    /// Drop unsaved edits.
    pub fn cancel(&mut self) {
        self.state = self.saved.clone();
        self.server_error = None;
    }

    /// The configuration that saving right now would persist.
    pub fn pending_config(&self) -> ConfigDocument {
        self.panel.config_from_state(self.config.clone(), &self.state)
    }

    /// Validate and persist the live state.
    ///
    /// On success the stored document becomes the new baseline and the form
    /// is re-seeded from it. On failure the edits are kept and the error is
    /// recorded for the next render.
    pub fn save(&mut self, store: &mut dyn ConfigStore) -> Result<&ConfigDocument, SaveError> {
        match self.try_save(store) {
            Ok(()) => {
                self.server_error = None;
                Ok(&self.config)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Settings save failed");
                self.server_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn try_save(&mut self, store: &mut dyn ConfigStore) -> Result<(), SaveError> {
        let candidate = self.pending_config();

        let errors: Vec<FieldError> = self
            .validators
            .iter()
            .filter_map(|validator| match validator.validate(&candidate) {
                Ok(()) => None,
                Err(errors) => {
                    tracing::debug!(validator = validator.name(), count = errors.len(), "Validator rejected settings");
                    Some(errors)
                }
            })
            .flatten()
            .collect();
        if !errors.is_empty() {
            return Err(SaveError::Validation(errors));
        }

        let stored = store.save(&candidate)?;
        let state = self
            .panel
            .state_from_config(&stored)
            .map_err(SaveError::Reload)?;

        self.config = stored;
        self.saved = state.clone();
        self.state = state;
        tracing::info!("Settings saved");
        Ok(())
    }

    /// Render the panel from the current state.
    pub fn render(&self, localizer: &dyn Localizer) -> RenderedPanel {
        RenderedPanel {
            title: self.panel.render_title(),
            settings: self.panel.render_settings(&self.state, localizer),
            save_needed: self.is_dirty(),
            server_error: self.server_error.clone(),
        }
    }
}
