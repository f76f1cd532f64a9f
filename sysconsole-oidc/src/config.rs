use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name of the configuration section holding the OpenID Connect settings.
pub const SECTION: &str = "OidcSettings";

/// The `OidcSettings` section of the console configuration.
///
/// Keys are PascalCase on disk. Keys this struct does not model are kept in
/// `extra` so that reading and writing the section never drops them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OidcConfig {
    /// Allow team creation and account signup through OpenID Connect.
    pub enable: bool,
    /// Application (client) identifier.
    pub id: String,
    /// Application secret.
    pub secret: String,
    /// URL of the user info endpoint.
    pub user_api_endpoint: String,
    /// URL of the authorization endpoint.
    pub auth_endpoint: String,
    /// URL of the token endpoint.
    pub token_endpoint: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Full configuration path of a key inside the section (`OidcSettings.Id`).
pub(crate) fn key(name: &str) -> String {
    format!("{SECTION}.{name}")
}
