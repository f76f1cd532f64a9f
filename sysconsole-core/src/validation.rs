use serde::Serialize;

use crate::config::ConfigDocument;

// ── Error types ────────────────────────────────────────────

/// A field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// ── Save pipeline hook ─────────────────────────────────────

/// A check run against a candidate configuration before it is persisted.
///
/// Panels never validate their own fields; validators belong to the save
/// pipeline and see the whole document.
pub trait ConfigValidator {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn validate(&self, config: &ConfigDocument) -> Result<(), Vec<FieldError>>;
}

/// Convert a garde report into field errors.
///
/// `field_name` maps garde's path (the Rust field name) to the id the
/// console shows to users.
pub fn field_errors_from_report(
    report: &garde::Report,
    field_name: impl Fn(&str) -> String,
) -> Vec<FieldError> {
    report
        .iter()
        .map(|(path, error)| {
            let path = path.to_string();
            let field = if path.is_empty() {
                "value".to_string()
            } else {
                field_name(&path)
            };
            FieldError {
                field,
                message: error.message().to_string(),
                code: "validation".to_string(),
            }
        })
        .collect()
}

// Re-export garde::Validate for convenience.
pub use garde::Validate;
