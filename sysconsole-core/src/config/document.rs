use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use super::value::{ConfigValue, FromConfigValue};
use super::ConfigError;

/// The console configuration as a tree of sections.
///
/// Values are addressed by dot-separated paths (`OidcSettings.Enable`).
/// Writes only ever replace the addressed leaf: sibling keys, other sections,
/// and keys this crate knows nothing about are carried through untouched, so
/// a panel that edits one section can never clobber another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    root: BTreeMap<String, ConfigValue>,
}

impl ConfigDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from a value; the value must be a map.
    pub fn from_value(value: ConfigValue) -> Result<Self, ConfigError> {
        match value {
            ConfigValue::Map(root) => Ok(Self { root }),
            other => Err(ConfigError::Load(format!(
                "configuration root must be a map, found {}",
                other.kind()
            ))),
        }
    }

    /// Parse a JSON document (the console's `config.json` format).
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let json: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ConfigError::Load(e.to_string()))?;
        Self::from_value(ConfigValue::from_json(&json))
    }

    /// Parse a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_value(super::loader::parse_yaml(content)?)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.root
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(&self.to_json()).map_err(|e| ConfigError::Load(e.to_string()))
    }

    /// Names of the top-level sections.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    /// Look up the raw value at `path`.
    ///
    /// Numeric segments index into lists (`Plugins.0`).
    pub fn lookup(&self, path: &str) -> Option<&ConfigValue> {
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                ConfigValue::Map(map) => map.get(segment)?,
                ConfigValue::List(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Get a typed value at the given path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the path does not exist, or
    /// `ConfigError::TypeMismatch` if the value cannot be converted.
    pub fn get<V: FromConfigValue>(&self, path: &str) -> Result<V, ConfigError> {
        let value = self
            .lookup(path)
            .ok_or_else(|| ConfigError::NotFound(path.to_string()))?;
        V::from_config_value(value, path)
    }

    /// Get a typed value, returning a default if the path is missing or mistyped.
    pub fn get_or<V: FromConfigValue>(&self, path: &str, default: V) -> V {
        self.get(path).unwrap_or(default)
    }

    pub fn contains_key(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Deserialize the subtree at `path` into a typed section.
    pub fn section<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConfigError> {
        let value = self
            .lookup(path)
            .ok_or_else(|| ConfigError::NotFound(path.to_string()))?;
        serde_json::from_value(value.to_json()).map_err(|e| ConfigError::Section {
            key: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Set the value at `path`, creating intermediate maps as needed.
    ///
    /// An intermediate segment that currently holds a non-map value is
    /// replaced by a map.
    pub fn set(&mut self, path: &str, value: impl Into<ConfigValue>) {
        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(leaf) = segments.pop() else {
            return;
        };
        let mut map = &mut self.root;
        for segment in segments {
            let entry = map
                .entry(segment.to_string())
                .or_insert_with(|| ConfigValue::Map(BTreeMap::new()));
            map = ensure_map(entry);
        }
        map.insert(leaf.to_string(), value.into());
    }

    /// Remove and return the value at `path`.
    pub fn remove(&mut self, path: &str) -> Option<ConfigValue> {
        let mut segments: Vec<&str> = path.split('.').collect();
        let leaf = segments.pop()?;
        let mut map = &mut self.root;
        for segment in segments {
            map = match map.get_mut(segment)? {
                ConfigValue::Map(inner) => inner,
                _ => return None,
            };
        }
        map.remove(leaf)
    }
}

fn ensure_map(value: &mut ConfigValue) -> &mut BTreeMap<String, ConfigValue> {
    if !matches!(value, ConfigValue::Map(_)) {
        *value = ConfigValue::Map(BTreeMap::new());
    }
    let ConfigValue::Map(map) = value else {
        unreachable!("value was just replaced by a map")
    };
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_scalar_intermediate() {
        let mut doc = ConfigDocument::from_json_str(r#"{"A": 1}"#).unwrap();
        doc.set("A.B", true);
        assert!(doc.get::<bool>("A.B").unwrap());
    }

    #[test]
    fn lookup_indexes_lists() {
        let doc = ConfigDocument::from_json_str(r#"{"A": {"B": ["x", "y"]}}"#).unwrap();
        assert_eq!(doc.get::<String>("A.B.1").unwrap(), "y");
        assert!(doc.lookup("A.B.2").is_none());
        assert!(doc.lookup("A.B.first").is_none());
    }

    #[test]
    fn remove_missing_path_is_none() {
        let mut doc = ConfigDocument::new();
        assert!(doc.remove("Nope.Key").is_none());
    }
}
