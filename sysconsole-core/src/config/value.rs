use std::collections::BTreeMap;

use super::ConfigError;

/// A node of a configuration tree, from YAML application config or the
/// console's JSON document.
///
/// Maps keep their keys sorted so that a document written back to disk is
/// stable across saves.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    /// Integers above `i64::MAX`, kept exact so they are written back unchanged.
    Unsigned(u64),
    Float(f64),
    Bool(bool),
    Null,
    List(Vec<ConfigValue>),
    Map(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Convert a parsed JSON value into a config value.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Bool(b) => ConfigValue::Bool(*b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => ConfigValue::Integer(i),
                (None, Some(u), _) => ConfigValue::Unsigned(u),
                (None, None, Some(f)) => ConfigValue::Float(f),
                (None, None, None) => ConfigValue::String(n.to_string()),
            },
            serde_json::Value::String(s) => ConfigValue::String(s.clone()),
            serde_json::Value::Null => ConfigValue::Null,
            serde_json::Value::Array(items) => {
                ConfigValue::List(items.iter().map(ConfigValue::from_json).collect())
            }
            serde_json::Value::Object(map) => ConfigValue::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), ConfigValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Convert back into a JSON value.
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ConfigValue::String(s) => serde_json::Value::String(s.clone()),
            ConfigValue::Integer(i) => serde_json::Value::from(*i),
            ConfigValue::Unsigned(u) => serde_json::Value::from(*u),
            ConfigValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            ConfigValue::Bool(b) => serde_json::Value::Bool(*b),
            ConfigValue::Null => serde_json::Value::Null,
            ConfigValue::List(items) => {
                serde_json::Value::Array(items.iter().map(ConfigValue::to_json).collect())
            }
            ConfigValue::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }

    /// Name of the variant, used in type-mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Integer(_) | ConfigValue::Unsigned(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Null => "null",
            ConfigValue::List(_) => "list",
            ConfigValue::Map(_) => "map",
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(ConfigValue::Integer)
            .unwrap_or(ConfigValue::Unsigned(value))
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

/// Typed extraction from a [`ConfigValue`].
///
/// Scalars are lenient: strings parse into numbers and booleans, and
/// numbers and booleans read back as strings, since env overrides always
/// arrive as text.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be read from a sysconsole config value",
    label = "no `FromConfigValue` impl",
    note = "supported: String, i64, f64, bool, Option<T>, Vec<T>, ConfigValue"
)]
pub trait FromConfigValue: Sized {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError>;
}

fn mismatch(key: &str, expected: &'static str) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.to_string(),
        expected,
    }
}

fn parse_text<T: std::str::FromStr>(
    value: &ConfigValue,
    key: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match value {
        ConfigValue::String(s) => s.trim().parse().map_err(|_| mismatch(key, expected)),
        _ => Err(mismatch(key, expected)),
    }
}

impl FromConfigValue for String {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        Ok(match value {
            ConfigValue::String(s) => s.clone(),
            ConfigValue::Integer(i) => i.to_string(),
            ConfigValue::Unsigned(u) => u.to_string(),
            ConfigValue::Float(f) => f.to_string(),
            ConfigValue::Bool(b) => b.to_string(),
            _ => return Err(mismatch(key, "string")),
        })
    }
}

impl FromConfigValue for i64 {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        match value {
            ConfigValue::Integer(i) => Ok(*i),
            ConfigValue::Unsigned(_) => Err(mismatch(key, "integer")),
            other => parse_text(other, key, "integer"),
        }
    }
}

impl FromConfigValue for f64 {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        match value {
            ConfigValue::Float(f) => Ok(*f),
            ConfigValue::Integer(i) => Ok(*i as f64),
            ConfigValue::Unsigned(u) => Ok(*u as f64),
            other => parse_text(other, key, "float"),
        }
    }
}

impl FromConfigValue for bool {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        let ConfigValue::String(text) = value else {
            return match value {
                ConfigValue::Bool(b) => Ok(*b),
                _ => Err(mismatch(key, "bool")),
            };
        };
        match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(mismatch(key, "bool")),
        }
    }
}

impl<T: FromConfigValue> FromConfigValue for Option<T> {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        if let ConfigValue::Null = value {
            return Ok(None);
        }
        T::from_config_value(value, key).map(Some)
    }
}

/// A scalar reads as a one-element list.
impl<T: FromConfigValue> FromConfigValue for Vec<T> {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        let ConfigValue::List(items) = value else {
            return T::from_config_value(value, key).map(|single| vec![single]);
        };
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            out.push(T::from_config_value(item, &format!("{key}.{index}"))?);
        }
        Ok(out)
    }
}

impl FromConfigValue for ConfigValue {
    fn from_config_value(value: &ConfigValue, _key: &str) -> Result<Self, ConfigError> {
        Ok(value.clone())
    }
}
