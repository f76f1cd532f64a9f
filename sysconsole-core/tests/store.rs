use sysconsole_core::{ConfigDocument, ConfigStore, FileConfigStore, InMemoryConfigStore, StoreError};

#[test]
fn file_store_load_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"OidcSettings": {"Enable": false, "Id": ""}, "TeamSettings": {"MaxUsersPerTeam": 50}}"#,
    )
    .unwrap();

    let mut store = FileConfigStore::new(&path);
    let mut config = store.load().unwrap();
    assert_eq!(config.get::<i64>("TeamSettings.MaxUsersPerTeam").unwrap(), 50);

    config.set("OidcSettings.Id", "client-id");
    store.save(&config).unwrap();

    let reloaded = FileConfigStore::new(&path).load().unwrap();
    assert_eq!(reloaded, config);
    assert_eq!(entries(dir.path()), vec!["config.json"]);
}

fn entries(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[cfg(unix)]
#[test]
fn file_store_save_keeps_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"OidcSettings": {"Secret": "xyz"}}"#).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).unwrap();

    let mut store = FileConfigStore::new(&path);
    let mut config = store.load().unwrap();
    config.set("OidcSettings.Secret", "rotated");
    store.save(&config).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
    assert_eq!(
        store.load().unwrap().get::<String>("OidcSettings.Secret").unwrap(),
        "rotated"
    );
}

#[cfg(unix)]
#[test]
fn file_store_first_save_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut config = ConfigDocument::new();
    config.set("OidcSettings.Secret", "xyz");
    FileConfigStore::new(&path).save(&config).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}

#[cfg(unix)]
#[test]
fn file_store_failed_replace_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    // A directory in the way makes the final rename fail.
    let path = dir.path().join("config.json");
    std::fs::create_dir(&path).unwrap();

    let err = FileConfigStore::new(&path).save(&ConfigDocument::new()).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
    assert_eq!(entries(dir.path()), vec!["config.json"]);
}

#[test]
fn file_store_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileConfigStore::new(dir.path().join("absent.json"));
    assert!(matches!(store.load(), Err(StoreError::Io(_))));
}

#[test]
fn file_store_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        FileConfigStore::new(&path).load(),
        Err(StoreError::Parse(_))
    ));
}

#[test]
fn in_memory_store_counts_saves() {
    let mut store = InMemoryConfigStore::default();
    let mut config = ConfigDocument::new();
    config.set("OidcSettings.Enable", true);

    let stored = store.save(&config).unwrap();
    assert_eq!(stored, config);
    assert_eq!(store.save_count(), 1);
    assert_eq!(store.load().unwrap(), config);
}

#[test]
fn in_memory_store_rejects() {
    let mut store = InMemoryConfigStore::default().reject_saves("locked");
    let err = store.save(&ConfigDocument::new()).unwrap_err();
    assert_eq!(err.to_string(), "Config store rejected the update: locked");
    assert_eq!(store.save_count(), 0);
}
