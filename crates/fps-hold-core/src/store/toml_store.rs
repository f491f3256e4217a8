//! TOML-file settings store.
//!
//! Keeps the three settings as string keys (`hotkey`, `appName`,
//! `frameRate`) and commits them with a temp-file-then-rename write so a
//! crash never leaves a half-updated store behind.

use crate::{
    CoreError, CoreResult,
    settings::{Binding, RateLimit, Settings, Target},
    store::SettingsStore,
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// On-disk shape. Every key is optional; absence means "use the default".
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hotkey: Option<String>,
    #[serde(rename = "appName", default, skip_serializing_if = "Option::is_none")]
    app_name: Option<String>,
    #[serde(rename = "frameRate", default, skip_serializing_if = "Option::is_none")]
    frame_rate: Option<String>,
}

/// Settings store backed by a single TOML file.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    /// Store reading and writing `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[track_caller]
    fn read_stored(&self) -> CoreResult<StoredSettings> {
        if !self.path.exists() {
            debug!(store_path = ?self.path, "No settings store yet, using defaults");
            return Ok(StoredSettings::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| CoreError::ConfigIo {
            reason: format!("Failed to read settings store: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        toml::from_str(&contents).map_err(|e| CoreError::ConfigIo {
            reason: format!("Failed to parse settings store: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl SettingsStore for TomlSettingsStore {
    #[track_caller]
    #[instrument(skip(self), fields(store_path = ?self.path))]
    fn load(&self) -> CoreResult<Settings> {
        let stored = self.read_stored()?;
        let defaults = Settings::default();

        let binding = match stored.hotkey {
            Some(text) => Binding::parse_optional(&text)?,
            None => defaults.binding,
        };
        let target = match stored.app_name {
            Some(text) => Target::parse_optional(&text),
            None => defaults.target,
        };
        let rate = match stored.frame_rate {
            Some(text) => RateLimit::parse_optional(&text)?,
            None => defaults.rate,
        };

        let settings = Settings {
            binding,
            target,
            rate,
        };

        info!(%settings, "Settings loaded");

        Ok(settings)
    }

    #[track_caller]
    #[instrument(skip(self), fields(store_path = ?self.path))]
    fn save(&mut self, settings: &Settings) -> CoreResult<()> {
        fn text<T: ToString>(value: &Option<T>) -> Option<String> {
            Some(value.as_ref().map(ToString::to_string).unwrap_or_default())
        }

        // Stage all three fields, then commit once.
        let stored = StoredSettings {
            hotkey: text(&settings.binding),
            app_name: text(&settings.target),
            frame_rate: text(&settings.rate),
        };

        let contents = toml::to_string_pretty(&stored).map_err(|e| CoreError::ConfigIo {
            reason: format!("Failed to serialize settings: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| CoreError::ConfigIo {
                reason: format!("Failed to create settings directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        let temp_path = self.path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| CoreError::ConfigIo {
            reason: format!("Failed to create temp settings file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| CoreError::ConfigIo {
                reason: format!("Failed to write temp settings file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| CoreError::ConfigIo {
            reason: format!("Failed to sync temp settings file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| CoreError::ConfigIo {
            reason: format!("Failed to rename temp settings file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(%settings, "Settings saved (atomic write)");

        Ok(())
    }
}
