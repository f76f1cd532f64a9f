use sysconsole_core::prelude::*;
use sysconsole_core::StoreError;

// A two-field panel over `AnnouncementSettings`, enough to drive the controller.

#[derive(Debug, Clone, PartialEq)]
struct AnnouncementState {
    enable: bool,
    text: String,
}

impl FormState for AnnouncementState {
    const FIELDS: &'static [(&'static str, FieldKind)] =
        &[("enable", FieldKind::Bool), ("text", FieldKind::Text)];

    fn field(&self, id: &str) -> Option<FieldValue> {
        match id {
            "enable" => Some(FieldValue::Bool(self.enable)),
            "text" => Some(FieldValue::Text(self.text.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, id: &str, value: FieldValue) -> Result<(), FormError> {
        match (id, value) {
            ("enable", FieldValue::Bool(v)) => self.enable = v,
            ("text", FieldValue::Text(v)) => self.text = v,
            (id, _) => {
                return Err(match Self::kind_of(id) {
                    Some(expected) => FormError::TypeMismatch {
                        field: id.to_string(),
                        expected,
                    },
                    None => FormError::UnknownField(id.to_string()),
                })
            }
        }
        Ok(())
    }
}

struct AnnouncementPanel;

impl SettingsPanel for AnnouncementPanel {
    type State = AnnouncementState;

    fn state_from_config(&self, config: &ConfigDocument) -> Result<AnnouncementState, ConfigError> {
        Ok(AnnouncementState {
            enable: config.get("AnnouncementSettings.Enable")?,
            text: config.get("AnnouncementSettings.Text")?,
        })
    }

    fn config_from_state(&self, mut config: ConfigDocument, state: &AnnouncementState) -> ConfigDocument {
        config.set("AnnouncementSettings.Enable", state.enable);
        config.set("AnnouncementSettings.Text", state.text.as_str());
        config
    }

    fn render_title(&self) -> Text {
        Text::message("admin.announcement.title", "Announcement Banner")
    }

    fn render_settings(&self, state: &AnnouncementState, localizer: &dyn Localizer) -> SettingsGroup {
        SettingsGroup::new()
            .push(Setting::Boolean(BooleanSetting {
                id: "enable",
                label: Text::message("admin.announcement.enable", "Enable banner"),
                help_text: None,
                value: state.enable,
                disabled: false,
            }))
            .push(Setting::Text(TextSetting {
                id: "text",
                label: Text::message("admin.announcement.text", "Banner text"),
                placeholder: localizer.localize("admin.announcement.placeholder", "Ex \"Maintenance tonight\""),
                help_text: None,
                value: state.text.clone(),
                disabled: !state.enable,
            }))
    }
}

struct NonEmptyText;

impl ConfigValidator for NonEmptyText {
    fn name(&self) -> &str {
        "non-empty-text"
    }

    fn validate(&self, config: &ConfigDocument) -> Result<(), Vec<FieldError>> {
        let text: String = config.get_or("AnnouncementSettings.Text", String::new());
        if text.is_empty() {
            return Err(vec![FieldError {
                field: "text".into(),
                message: "required".into(),
                code: "validation".into(),
            }]);
        }
        Ok(())
    }
}

fn config() -> ConfigDocument {
    ConfigDocument::from_json_str(
        r##"{
            "AnnouncementSettings": { "Enable": false, "Text": "hello", "Color": "#ff0000" },
            "ServiceSettings": { "SiteURL": "https://chat.example.com" }
        }"##,
    )
    .unwrap()
}

#[test]
fn seeds_state_from_config() {
    let settings = AdminSettings::new(AnnouncementPanel, config()).unwrap();
    assert_eq!(
        settings.state(),
        &AnnouncementState {
            enable: false,
            text: "hello".into()
        }
    );
    assert!(!settings.is_dirty());
}

#[test]
fn missing_section_fails_to_mount() {
    let result = AdminSettings::new(AnnouncementPanel, ConfigDocument::new());
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
fn handle_change_updates_one_field_and_marks_dirty() {
    let mut settings = AdminSettings::new(AnnouncementPanel, config()).unwrap();
    settings.handle_change("text", "bye".into()).unwrap();

    assert_eq!(settings.state().text, "bye");
    assert!(!settings.state().enable);
    assert!(settings.is_dirty());
    assert!(settings.render(&DefaultMessages).save_needed);
}

#[test]
fn editing_back_to_saved_value_is_clean() {
    let mut settings = AdminSettings::new(AnnouncementPanel, config()).unwrap();
    settings.handle_change("enable", true.into()).unwrap();
    settings.handle_change("enable", false.into()).unwrap();
    assert!(!settings.is_dirty());
}

#[test]
fn handle_change_rejects_unknown_and_mistyped_fields() {
    let mut settings = AdminSettings::new(AnnouncementPanel, config()).unwrap();
    assert_eq!(
        settings.handle_change("color", "blue".into()),
        Err(FormError::UnknownField("color".into()))
    );
    assert_eq!(
        settings.handle_change("enable", "yes".into()),
        Err(FormError::TypeMismatch {
            field: "enable".into(),
            expected: FieldKind::Bool
        })
    );
    assert!(!settings.is_dirty());
}

#[test]
fn cancel_restores_saved_state() {
    let mut settings = AdminSettings::new(AnnouncementPanel, config()).unwrap();
    settings.handle_change("text", "bye".into()).unwrap();
    settings.cancel();
    assert_eq!(settings.state().text, "hello");
    assert!(!settings.is_dirty());
}

#[test]
fn save_persists_and_resets_dirty_state() {
    let mut store = InMemoryConfigStore::new(config());
    let mut settings = AdminSettings::new(AnnouncementPanel, store.load().unwrap()).unwrap();

    settings.handle_change("enable", true.into()).unwrap();
    settings.handle_change("text", "maintenance".into()).unwrap();
    settings.save(&mut store).unwrap();

    assert_eq!(store.save_count(), 1);
    assert!(!settings.is_dirty());
    let saved = store.current();
    assert!(saved.get::<bool>("AnnouncementSettings.Enable").unwrap());
    assert_eq!(saved.get::<String>("AnnouncementSettings.Text").unwrap(), "maintenance");
    // untouched keys pass through
    assert_eq!(saved.get::<String>("AnnouncementSettings.Color").unwrap(), "#ff0000");
    assert_eq!(
        saved.get::<String>("ServiceSettings.SiteURL").unwrap(),
        "https://chat.example.com"
    );
    assert_eq!(settings.config(), saved);
}

#[test]
fn failed_save_keeps_edits_and_reports_error() {
    let mut store = InMemoryConfigStore::new(config()).reject_saves("read-only configuration");
    let mut settings = AdminSettings::new(AnnouncementPanel, config()).unwrap();

    settings.handle_change("text", "bye".into()).unwrap();
    let err = settings.save(&mut store).unwrap_err();

    assert!(matches!(err, SaveError::Store(StoreError::Rejected(_))));
    assert!(settings.is_dirty());
    assert_eq!(settings.state().text, "bye");

    let rendered = settings.render(&DefaultMessages);
    assert!(rendered.save_needed);
    assert!(rendered
        .server_error
        .as_deref()
        .unwrap()
        .contains("read-only configuration"));

    settings.cancel();
    assert!(settings.server_error().is_none());
}

#[test]
fn validators_block_save() {
    let mut store = InMemoryConfigStore::new(config());
    let mut settings =
        AdminSettings::new(AnnouncementPanel, config()).unwrap().with_validator(NonEmptyText);

    settings.handle_change("text", "".into()).unwrap();
    match settings.save(&mut store) {
        Err(SaveError::Validation(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "text");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(store.save_count(), 0);

    settings.handle_change("text", "ok".into()).unwrap();
    settings.save(&mut store).unwrap();
    assert_eq!(store.save_count(), 1);
    assert!(settings.server_error().is_none());
}

#[test]
fn pending_config_reflects_live_state() {
    let mut settings = AdminSettings::new(AnnouncementPanel, config()).unwrap();
    settings.handle_change("text", "draft".into()).unwrap();
    assert_eq!(
        settings.pending_config().get::<String>("AnnouncementSettings.Text").unwrap(),
        "draft"
    );
    // the baseline is unchanged until a save
    assert_eq!(
        settings.config().get::<String>("AnnouncementSettings.Text").unwrap(),
        "hello"
    );
}

#[test]
fn render_reevaluates_disabled_from_current_state() {
    let mut settings = AdminSettings::new(AnnouncementPanel, config()).unwrap();
    assert!(settings.render(&DefaultMessages).settings.setting("text").unwrap().is_disabled());

    settings.handle_change("enable", true.into()).unwrap();
    let rendered = settings.render(&DefaultMessages);
    assert!(!rendered.settings.setting("text").unwrap().is_disabled());
    assert_eq!(rendered.title.resolve(&DefaultMessages), "Announcement Banner");
}
