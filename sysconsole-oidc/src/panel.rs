use sysconsole_core::config::{ConfigDocument, ConfigError};
use sysconsole_core::i18n::Localizer;
use sysconsole_core::panel::SettingsPanel;
use sysconsole_core::ui::{BooleanSetting, Message, Setting, SettingsGroup, Text, TextSetting};

use crate::config::{key, OidcConfig, SECTION};
use crate::messages as msg;
use crate::state::{field, state_from_config, OidcFormState};

/// The "OpenID Connect" page of the authentication settings.
///
/// Renders an enable toggle followed by five text settings; the text
/// settings are disabled while the toggle is off.
#[derive(Clone, Copy, Debug, Default)]
pub struct OidcSettingsPanel;

impl OidcSettingsPanel {
    pub fn new() -> Self {
        Self
    }
}

struct TextField {
    id: &'static str,
    title: Message,
    example: Message,
    description: Message,
}

const CLIENT_ID: TextField = TextField {
    id: field::ID,
    title: msg::CLIENT_ID_TITLE,
    example: msg::CLIENT_ID_EXAMPLE,
    description: msg::CLIENT_ID_DESCRIPTION,
};

const CLIENT_SECRET: TextField = TextField {
    id: field::SECRET,
    title: msg::CLIENT_SECRET_TITLE,
    example: msg::CLIENT_SECRET_EXAMPLE,
    description: msg::CLIENT_SECRET_DESCRIPTION,
};

const USER_API_ENDPOINT: TextField = TextField {
    id: field::USER_API_ENDPOINT,
    title: msg::USER_TITLE,
    example: msg::USER_EXAMPLE,
    description: msg::USER_DESCRIPTION,
};

const AUTH_ENDPOINT: TextField = TextField {
    id: field::AUTH_ENDPOINT,
    title: msg::AUTH_TITLE,
    example: msg::AUTH_EXAMPLE,
    description: msg::AUTH_DESCRIPTION,
};

const TOKEN_ENDPOINT: TextField = TextField {
    id: field::TOKEN_ENDPOINT,
    title: msg::TOKEN_TITLE,
    example: msg::TOKEN_EXAMPLE,
    description: msg::TOKEN_DESCRIPTION,
};

impl TextField {
    fn render(&self, value: &str, disabled: bool, localizer: &dyn Localizer) -> Setting {
        Setting::Text(TextSetting {
            id: self.id,
            label: Text::Message(self.title),
            placeholder: self.example.localize(localizer),
            help_text: Some(Text::Message(self.description)),
            value: value.to_string(),
            disabled,
        })
    }
}

impl SettingsPanel for OidcSettingsPanel {
    type State = OidcFormState;

    fn state_from_config(&self, config: &ConfigDocument) -> Result<OidcFormState, ConfigError> {
        let section: OidcConfig = config.section(SECTION)?;
        Ok(state_from_config(&section))
    }

    fn config_from_state(&self, mut config: ConfigDocument, state: &OidcFormState) -> ConfigDocument {
        config.set(&key("Enable"), state.enable);
        config.set(&key("Id"), state.id.as_str());
        config.set(&key("Secret"), state.secret.as_str());
        config.set(&key("UserApiEndpoint"), state.user_api_endpoint.as_str());
        config.set(&key("AuthEndpoint"), state.auth_endpoint.as_str());
        config.set(&key("TokenEndpoint"), state.token_endpoint.as_str());
        config
    }

    fn render_title(&self) -> Text {
        Text::Message(msg::TITLE)
    }

    fn render_settings(&self, state: &OidcFormState, localizer: &dyn Localizer) -> SettingsGroup {
        let disabled = !state.enable;

        SettingsGroup::new()
            .push(Setting::Boolean(BooleanSetting {
                id: field::ENABLE,
                label: Text::Message(msg::ENABLE_TITLE),
                help_text: Some(Text::Lines {
                    lines: vec![
                        Text::Message(msg::ENABLE_DESCRIPTION),
                        Text::Html(msg::ENABLE_HTML_DESC),
                    ],
                }),
                value: state.enable,
                disabled: false,
            }))
            .push(CLIENT_ID.render(&state.id, disabled, localizer))
            .push(CLIENT_SECRET.render(&state.secret, disabled, localizer))
            .push(USER_API_ENDPOINT.render(&state.user_api_endpoint, disabled, localizer))
            .push(AUTH_ENDPOINT.render(&state.auth_endpoint, disabled, localizer))
            .push(TOKEN_ENDPOINT.render(&state.token_endpoint, disabled, localizer))
    }
}
