//! Declarative description of a rendered settings panel.
//!
//! Panels produce these trees; drawing them is the host's job. Every node
//! serializes to JSON so a front end can consume it as-is.

use serde::Serialize;

use crate::i18n::Localizer;

/// A message id paired with its default text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: &'static str,
    pub default_message: &'static str,
}

impl Message {
    pub const fn new(id: &'static str, default_message: &'static str) -> Self {
        Self {
            id,
            default_message,
        }
    }

    pub fn localize(&self, localizer: &dyn Localizer) -> String {
        localizer.localize(self.id, self.default_message)
    }
}

/// Display text attached to a setting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Text {
    /// Localized plain text.
    Message(Message),
    /// Localized text carrying inline HTML markup.
    Html(Message),
    /// Literal text, already resolved.
    Plain { text: String },
    /// Several blocks rendered one per line.
    Lines { lines: Vec<Text> },
}

impl Text {
    pub const fn message(id: &'static str, default_message: &'static str) -> Self {
        Text::Message(Message::new(id, default_message))
    }

    pub const fn html(id: &'static str, default_message: &'static str) -> Self {
        Text::Html(Message::new(id, default_message))
    }

    /// Resolve to a string; `Lines` are joined with newlines and HTML is kept verbatim.
    pub fn resolve(&self, localizer: &dyn Localizer) -> String {
        match self {
            Text::Message(message) | Text::Html(message) => message.localize(localizer),
            Text::Plain { text } => text.clone(),
            Text::Lines { lines } => lines
                .iter()
                .map(|line| line.resolve(localizer))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// A boolean toggle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BooleanSetting {
    pub id: &'static str,
    pub label: Text,
    pub help_text: Option<Text>,
    pub value: bool,
    pub disabled: bool,
}

/// A single-line text input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSetting {
    pub id: &'static str,
    pub label: Text,
    /// Already localized by the panel.
    pub placeholder: String,
    pub help_text: Option<Text>,
    pub value: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Setting {
    Boolean(BooleanSetting),
    Text(TextSetting),
}

impl Setting {
    pub fn id(&self) -> &'static str {
        match self {
            Setting::Boolean(s) => s.id,
            Setting::Text(s) => s.id,
        }
    }

    pub fn label(&self) -> &Text {
        match self {
            Setting::Boolean(s) => &s.label,
            Setting::Text(s) => &s.label,
        }
    }

    pub fn is_disabled(&self) -> bool {
        match self {
            Setting::Boolean(s) => s.disabled,
            Setting::Text(s) => s.disabled,
        }
    }
}

/// An ordered group of settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettingsGroup {
    pub header: Option<Text>,
    pub settings: Vec<Setting>,
}

impl SettingsGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, header: Text) -> Self {
        self.header = Some(header);
        self
    }

    pub fn push(mut self, setting: Setting) -> Self {
        self.settings.push(setting);
        self
    }

    pub fn setting(&self, id: &str) -> Option<&Setting> {
        self.settings.iter().find(|s| s.id() == id)
    }

    pub fn text_settings(&self) -> impl Iterator<Item = &TextSetting> {
        self.settings.iter().filter_map(|s| match s {
            Setting::Text(text) => Some(text),
            Setting::Boolean(_) => None,
        })
    }
}
