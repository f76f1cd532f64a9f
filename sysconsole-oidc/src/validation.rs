use garde::Validate;
use sysconsole_core::config::ConfigDocument;
use sysconsole_core::validation::{field_errors_from_report, ConfigValidator, FieldError};

use crate::config::{OidcConfig, SECTION};
use crate::state::field_id;

/// Requires the client settings and endpoints to be filled in whenever
/// OpenID Connect is enabled.
///
/// Only presence is checked; URL shape is left to the identity provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct OidcPresenceValidator;

#[derive(Validate)]
struct EnabledOidc {
    #[garde(length(min = 1))]
    id: String,
    #[garde(length(min = 1))]
    secret: String,
    #[garde(length(min = 1))]
    user_api_endpoint: String,
    #[garde(length(min = 1))]
    auth_endpoint: String,
    #[garde(length(min = 1))]
    token_endpoint: String,
}

impl From<OidcConfig> for EnabledOidc {
    fn from(config: OidcConfig) -> Self {
        Self {
            id: config.id,
            secret: config.secret,
            user_api_endpoint: config.user_api_endpoint,
            auth_endpoint: config.auth_endpoint,
            token_endpoint: config.token_endpoint,
        }
    }
}

impl ConfigValidator for OidcPresenceValidator {
    fn name(&self) -> &str {
        "oidc-presence"
    }

    fn validate(&self, config: &ConfigDocument) -> Result<(), Vec<FieldError>> {
        let section: OidcConfig = config.section(SECTION).map_err(|e| {
            vec![FieldError {
                field: SECTION.to_string(),
                message: e.to_string(),
                code: "config".to_string(),
            }]
        })?;
        if !section.enable {
            tracing::debug!("OpenID Connect disabled, skipping presence checks");
            return Ok(());
        }

        EnabledOidc::from(section)
            .validate()
            .map_err(|report| field_errors_from_report(&report, field_id))
    }
}
