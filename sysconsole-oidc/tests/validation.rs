use sysconsole_core::prelude::*;
use sysconsole_oidc::{field, OidcPresenceValidator, OidcSettingsPanel};

fn document() -> ConfigDocument {
    ConfigDocument::from_json_str(
        r#"{
            "OidcSettings": {
                "Enable": false,
                "Id": "",
                "Secret": "",
                "UserApiEndpoint": "",
                "AuthEndpoint": "",
                "TokenEndpoint": ""
            },
            "TeamSettings": { "SiteName": "Example" }
        }"#,
    )
    .unwrap()
}

#[test]
fn disabled_section_needs_nothing() {
    assert!(OidcPresenceValidator.validate(&document()).is_ok());
}

#[test]
fn enabled_section_requires_every_text_setting() {
    let mut doc = document();
    doc.set("OidcSettings.Enable", true);
    doc.set("OidcSettings.Id", "client");

    let errors = OidcPresenceValidator.validate(&doc).unwrap_err();
    let mut fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    fields.sort();
    assert_eq!(
        fields,
        vec!["authEndpoint", "secret", "tokenEndpoint", "userApiEndpoint"]
    );
}

#[test]
fn presence_only_no_url_checks() {
    let mut doc = document();
    doc.set("OidcSettings.Enable", true);
    for (key, value) in [
        ("Id", "client"),
        ("Secret", "secret"),
        ("UserApiEndpoint", "not a url"),
        ("AuthEndpoint", "also not"),
        ("TokenEndpoint", "nope"),
    ] {
        doc.set(&format!("OidcSettings.{key}"), value);
    }
    assert!(OidcPresenceValidator.validate(&doc).is_ok());
}

#[test]
fn missing_section_is_reported() {
    let errors = OidcPresenceValidator
        .validate(&ConfigDocument::new())
        .unwrap_err();
    assert_eq!(errors[0].field, "OidcSettings");
    assert_eq!(errors[0].code, "config");
}

#[test]
fn save_pipeline_blocks_incomplete_settings() {
    let mut store = InMemoryConfigStore::new(document());
    let mut settings = AdminSettings::new(OidcSettingsPanel, store.load().unwrap())
        .unwrap()
        .with_validator(OidcPresenceValidator);

    settings.handle_change(field::ENABLE, true.into()).unwrap();
    assert!(matches!(
        settings.save(&mut store),
        Err(SaveError::Validation(errors)) if errors.len() == 5
    ));
    assert_eq!(store.save_count(), 0);
    assert!(settings.render(&DefaultMessages).server_error.is_some());

    for (id, value) in [
        (field::ID, "client"),
        (field::SECRET, "secret"),
        (field::USER_API_ENDPOINT, "https://id.example.com/oauth/user"),
        (field::AUTH_ENDPOINT, "https://id.example.com/oauth/authorize"),
        (field::TOKEN_ENDPOINT, "https://id.example.com/oauth/token"),
    ] {
        settings.handle_change(id, value.into()).unwrap();
    }
    settings.save(&mut store).unwrap();

    assert_eq!(store.save_count(), 1);
    let saved = store.current();
    assert!(saved.get::<bool>("OidcSettings.Enable").unwrap());
    assert_eq!(saved.get::<String>("TeamSettings.SiteName").unwrap(), "Example");
    assert!(settings.render(&DefaultMessages).server_error.is_none());
}
