use std::collections::HashMap;
use std::path::Path;

use super::value::ConfigValue;
use super::ConfigError;

pub(crate) type FlatValues = HashMap<String, ConfigValue>;

/// Parse YAML into a value tree. YAML keys must be strings.
pub(crate) fn parse_yaml(content: &str) -> Result<ConfigValue, ConfigError> {
    serde_yaml::from_str::<serde_json::Value>(content)
        .map(|json| ConfigValue::from_json(&json))
        .map_err(|e| ConfigError::Load(e.to_string()))
}

/// Merge `path` into `values`. Profile overlays are optional, so a missing
/// file leaves `values` as it was.
pub(crate) fn load_yaml_file(path: &Path, values: &mut FlatValues) -> Result<(), ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No configuration file, skipping");
            return Ok(());
        }
        Err(e) => return Err(ConfigError::Load(format!("{}: {e}", path.display()))),
    };
    load_yaml_str(&content, values)?;
    tracing::debug!(path = %path.display(), "Loaded configuration file");
    Ok(())
}

pub(crate) fn load_yaml_str(content: &str, values: &mut FlatValues) -> Result<(), ConfigError> {
    flatten("", &parse_yaml(content)?, values);
    Ok(())
}

/// Record every leaf of `value` under its dotted path.
///
/// Lists are kept whole under their own key and each element is also
/// reachable as `key.<index>`, which is how env overrides address them.
pub(crate) fn flatten(prefix: &str, value: &ConfigValue, out: &mut FlatValues) {
    let child = |key: &str| match prefix {
        "" => key.to_string(),
        _ => format!("{prefix}.{key}"),
    };
    match value {
        ConfigValue::Map(entries) => {
            for (key, nested) in entries {
                flatten(&child(key), nested, out);
            }
        }
        _ if prefix.is_empty() => {}
        ConfigValue::List(items) => {
            out.insert(prefix.to_string(), value.clone());
            for (index, item) in items.iter().enumerate() {
                flatten(&child(&index.to_string()), item, out);
            }
        }
        leaf => {
            out.insert(prefix.to_string(), leaf.clone());
        }
    }
}
