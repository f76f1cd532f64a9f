//! Message lookup for labels, placeholders, and help text.

use std::collections::HashMap;
use std::path::Path;

use crate::config::ConfigError;

/// Resolves a message id to display text, falling back to a default.
pub trait Localizer {
    fn localize(&self, key: &str, default: &str) -> String;
}

/// Localizer that always answers with the default message.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl Localizer for DefaultMessages {
    fn localize(&self, _key: &str, default: &str) -> String {
        default.to_string()
    }
}

/// Flat `id -> text` catalog, as stored in the console's locale JSON files.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single message.
    pub fn with_message(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(key.into(), text.into());
        self
    }

    /// Parse a JSON object of string values. Non-string entries are ignored.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let json: HashMap<String, serde_json::Value> =
            serde_json::from_str(content).map_err(|e| ConfigError::Load(e.to_string()))?;
        let messages = json
            .into_iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::String(s) => Some((k, s)),
                _ => None,
            })
            .collect();
        Ok(Self { messages })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), messages = catalog.len(), "Loaded message catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Localizer for MessageCatalog {
    fn localize(&self, key: &str, default: &str) -> String {
        match self.messages.get(key) {
            Some(text) => text.clone(),
            None => default.to_string(),
        }
    }
}
