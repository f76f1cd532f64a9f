use serde::{Deserialize, Serialize};
use sysconsole_core::form::{FieldKind, FieldValue, FormError, FormState};

use crate::config::OidcConfig;

/// Field ids, as used by `handle_change` and the rendered settings.
pub mod field {
    pub const ENABLE: &str = "enable";
    pub const ID: &str = "id";
    pub const SECRET: &str = "secret";
    pub const USER_API_ENDPOINT: &str = "userApiEndpoint";
    pub const AUTH_ENDPOINT: &str = "authEndpoint";
    pub const TOKEN_ENDPOINT: &str = "tokenEndpoint";
}

/// Editable mirror of [`OidcConfig`], one field per setting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcFormState {
    pub enable: bool,
    pub id: String,
    pub secret: String,
    pub user_api_endpoint: String,
    pub auth_endpoint: String,
    pub token_endpoint: String,
}

/// Copy the six settings out of the section.
pub fn state_from_config(config: &OidcConfig) -> OidcFormState {
    OidcFormState {
        enable: config.enable,
        id: config.id.clone(),
        secret: config.secret.clone(),
        user_api_endpoint: config.user_api_endpoint.clone(),
        auth_endpoint: config.auth_endpoint.clone(),
        token_endpoint: config.token_endpoint.clone(),
    }
}

/// Overwrite the six settings of `config` from `state`; `extra` passes through.
pub fn config_from_state(mut config: OidcConfig, state: &OidcFormState) -> OidcConfig {
    config.enable = state.enable;
    config.id = state.id.clone();
    config.secret = state.secret.clone();
    config.user_api_endpoint = state.user_api_endpoint.clone();
    config.auth_endpoint = state.auth_endpoint.clone();
    config.token_endpoint = state.token_endpoint.clone();
    config
}

impl OidcFormState {
    fn text_mut(&mut self, id: &str) -> Option<&mut String> {
        match id {
            field::ID => Some(&mut self.id),
            field::SECRET => Some(&mut self.secret),
            field::USER_API_ENDPOINT => Some(&mut self.user_api_endpoint),
            field::AUTH_ENDPOINT => Some(&mut self.auth_endpoint),
            field::TOKEN_ENDPOINT => Some(&mut self.token_endpoint),
            _ => None,
        }
    }
}

impl FormState for OidcFormState {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        (field::ENABLE, FieldKind::Bool),
        (field::ID, FieldKind::Text),
        (field::SECRET, FieldKind::Text),
        (field::USER_API_ENDPOINT, FieldKind::Text),
        (field::AUTH_ENDPOINT, FieldKind::Text),
        (field::TOKEN_ENDPOINT, FieldKind::Text),
    ];

    fn field(&self, id: &str) -> Option<FieldValue> {
        let text = match id {
            field::ENABLE => return Some(FieldValue::Bool(self.enable)),
            field::ID => &self.id,
            field::SECRET => &self.secret,
            field::USER_API_ENDPOINT => &self.user_api_endpoint,
            field::AUTH_ENDPOINT => &self.auth_endpoint,
            field::TOKEN_ENDPOINT => &self.token_endpoint,
            _ => return None,
        };
        Some(FieldValue::Text(text.clone()))
    }

    fn set_field(&mut self, id: &str, value: FieldValue) -> Result<(), FormError> {
        let expected = Self::kind_of(id).ok_or_else(|| FormError::UnknownField(id.to_string()))?;
        match value {
            FieldValue::Bool(enable) if id == field::ENABLE => self.enable = enable,
            FieldValue::Text(text) => match self.text_mut(id) {
                Some(slot) => *slot = text,
                None => {
                    return Err(FormError::TypeMismatch {
                        field: id.to_string(),
                        expected,
                    })
                }
            },
            FieldValue::Bool(_) => {
                return Err(FormError::TypeMismatch {
                    field: id.to_string(),
                    expected,
                })
            }
        }
        Ok(())
    }
}

/// Map a Rust field name (as reported by validators) to its field id.
pub(crate) fn field_id(rust_name: &str) -> String {
    match rust_name {
        "user_api_endpoint" => field::USER_API_ENDPOINT,
        "auth_endpoint" => field::AUTH_ENDPOINT,
        "token_endpoint" => field::TOKEN_ENDPOINT,
        other => other,
    }
    .to_string()
}
