//! Form state: the editable mirror of a configuration section.
//!
//! A settings panel owns a plain struct implementing [`FormState`]. The
//! controller routes every edit through [`FormState::set_field`] by field id,
//! so a panel only has to describe its fields once.

use serde::{Deserialize, Serialize};

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Text,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Text => "text",
        }
    }

    /// Parse a raw string (e.g. from a command line) into a value of this kind.
    pub fn parse(self, field: &str, raw: &str) -> Result<FieldValue, FormError> {
        match self {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Bool => match raw.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(FieldValue::Bool(true)),
                "false" | "0" | "no" | "off" => Ok(FieldValue::Bool(false)),
                _ => Err(FormError::TypeMismatch {
                    field: field.to_string(),
                    expected: FieldKind::Bool,
                }),
            },
        }
    }
}

/// A value carried by a single field edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Text(_) => FieldKind::Text,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Error raised when an edit cannot be applied to a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No field with this id exists on the form.
    UnknownField(String),
    /// The value's kind does not match the field's kind.
    TypeMismatch { field: String, expected: FieldKind },
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::UnknownField(field) => write!(f, "Unknown field: {field}"),
            FormError::TypeMismatch { field, expected } => {
                write!(f, "Field '{field}' expects a {} value", expected.name())
            }
        }
    }
}

impl std::error::Error for FormError {}

/// The ephemeral, editable mirror of a configuration section.
pub trait FormState: Clone + PartialEq + std::fmt::Debug {
    /// Field ids in declaration order, with their kinds.
    const FIELDS: &'static [(&'static str, FieldKind)];

    /// Current value of a field, or `None` for an unknown id.
    fn field(&self, id: &str) -> Option<FieldValue>;

    /// Overwrite exactly one field.
    fn set_field(&mut self, id: &str, value: FieldValue) -> Result<(), FormError>;

    /// Kind of the field with the given id.
    fn kind_of(id: &str) -> Option<FieldKind> {
        Self::FIELDS
            .iter()
            .find(|(field, _)| *field == id)
            .map(|(_, kind)| *kind)
    }
}
