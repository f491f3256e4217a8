#![allow(clippy::unwrap_used)]

use crate::{
    Binding, CoreError, RateLimit, Settings, SettingsStore, Target, TomlSettingsStore,
};

use std::fs;

use tempfile::TempDir;

fn store_in(dir: &TempDir) -> TomlSettingsStore {
    TomlSettingsStore::new(dir.path().join("store.toml"))
}

/// WHAT: A missing store yields the documented defaults
/// WHY: First launch must work without any file
#[test]
fn given_no_store_file_when_loading_then_defaults() {
    // Given: Empty directory
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    // When: Loading
    let settings = store.load().unwrap();

    // Then: CapsLock / NarakaBladepoint.exe / 20
    assert_eq!(settings.binding, Some("CapsLock".parse::<Binding>().unwrap()));
    assert_eq!(
        settings.target,
        Some(Target::Application("NarakaBladepoint.exe".to_string()))
    );
    assert_eq!(settings.rate, Some(RateLimit::new(20)));
}

/// WHAT: Missing keys default individually
/// WHY: Absence of a key is a valid state
#[test]
fn given_partial_store_when_loading_then_missing_keys_defaulted() {
    // Given: Only appName stored
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("store.toml"), "appName = \"Global\"\n").unwrap();

    // When: Loading
    let settings = store_in(&dir).load().unwrap();

    // Then: Target from file, the rest defaulted
    assert_eq!(settings.target, Some(Target::Global));
    assert_eq!(settings.binding, Some(Binding::default()));
    assert_eq!(settings.rate, Some(RateLimit::new(20)));
}

/// WHAT: Empty stored values load as unset
/// WHY: A cleared field must stay cleared across restarts
#[test]
fn given_empty_values_when_loading_then_unset() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("store.toml"),
        "hotkey = \"\"\nappName = \"\"\nframeRate = \"\"\n",
    )
    .unwrap();

    let settings = store_in(&dir).load().unwrap();

    assert_eq!(
        settings,
        Settings {
            binding: None,
            target: None,
            rate: None,
        }
    );
}

/// WHAT: Saved settings use the three string keys
/// WHY: The store format is shared with earlier releases
#[test]
fn given_settings_when_saved_then_string_keys_written_and_reloaded() {
    // Given: Custom settings
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    let settings = Settings {
        binding: Some("Ctrl+Shift+F1".parse().unwrap()),
        target: Some(Target::Application("game.exe".to_string())),
        rate: Some(RateLimit::new(45)),
    };

    // When: Saving
    store.save(&settings).unwrap();

    // Then: File holds strings, no temp file left, reload matches
    let contents = fs::read_to_string(store.path()).unwrap();
    assert!(contents.contains("hotkey = \"Ctrl+Shift+F1\""));
    assert!(contents.contains("appName = \"game.exe\""));
    assert!(contents.contains("frameRate = \"45\""));
    assert!(!dir.path().join("store.toml.tmp").exists());
    assert_eq!(store.load().unwrap(), settings);
}

/// WHAT: Saving creates the config directory if needed
/// WHY: The store lives in a per-user directory that may not exist yet
#[test]
fn given_missing_directory_when_saving_then_created() {
    let dir = TempDir::new().unwrap();
    let mut store = TomlSettingsStore::new(dir.path().join("nested").join("store.toml"));

    store.save(&Settings::reset_defaults()).unwrap();

    assert_eq!(store.load().unwrap(), Settings::reset_defaults());
}

/// WHAT: Unparseable data is reported, not silently defaulted
/// WHY: The monitor decides on the fallback and logs it
#[test]
fn given_corrupt_store_when_loading_then_errors() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("store.toml"), "hotkey = [").unwrap();
    assert!(matches!(
        store_in(&dir).load(),
        Err(CoreError::ConfigIo { .. })
    ));

    fs::write(dir.path().join("store.toml"), "frameRate = \"fast\"\n").unwrap();
    assert!(matches!(
        store_in(&dir).load(),
        Err(CoreError::InvalidRateLimit { .. })
    ));
}
