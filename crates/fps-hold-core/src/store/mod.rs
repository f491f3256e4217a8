//! Durable persistence for the hotkey / target / frame rate triple.

mod toml_store;

pub use toml_store::TomlSettingsStore;

use crate::{CoreResult, settings::Settings};

/// File name of the settings store inside the config directory.
pub const STORE_FILE_NAME: &str = "store.toml";

/// Get/set/save contract for [`Settings`].
pub trait SettingsStore {
    /// Read persisted settings.
    ///
    /// A missing store or missing key yields that key's default
    /// ([`Settings::default`]); an empty value yields "unset". Errors are
    /// only returned for unreadable or unparseable data.
    fn load(&self) -> CoreResult<Settings>;

    /// Persist all three fields in one commit.
    fn save(&mut self, settings: &Settings) -> CoreResult<()>;
}
