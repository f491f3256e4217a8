//! Global key chord model.
//!
//! A binding is a set of modifiers plus exactly one non-modifier key token,
//! written as a `+`-joined string such as `Ctrl+Shift+F1`.

use crate::{CoreError, CoreResult};

use std::{fmt, panic::Location, str::FromStr};

use error_location::ErrorLocation;

/// Modifier flags that may accompany the key token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ModifierSet {
    /// Control key.
    pub ctrl: bool,
    /// Alt / Option key.
    pub alt: bool,
    /// Shift key.
    pub shift: bool,
    /// Meta / Super / Command key.
    pub meta: bool,
}

impl ModifierSet {
    /// True when no modifier is set.
    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift || self.meta)
    }

    /// Set the flag named by `token`, returning false if it is not a modifier.
    fn insert(&mut self, token: &str) -> bool {
        match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => self.ctrl = true,
            "alt" | "option" => self.alt = true,
            "shift" => self.shift = true,
            "meta" | "super" | "cmd" | "command" => self.meta = true,
            _ => return false,
        }
        true
    }

    /// Modifier names in canonical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.shift, "Shift"),
            (self.meta, "Meta"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
    }
}

/// A single global key combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    modifiers: ModifierSet,
    key: String,
}

impl Binding {
    /// Build a binding from parts, rejecting a modifier used as the key token.
    #[track_caller]
    pub fn new(modifiers: ModifierSet, key: impl Into<String>) -> CoreResult<Self> {
        let key = key.into();
        let trimmed = key.trim();

        if trimmed.is_empty() {
            return Err(invalid(&key, "missing key"));
        }
        if ModifierSet::default().insert(trimmed) {
            return Err(invalid(&key, "a modifier cannot be the key"));
        }

        Ok(Self {
            modifiers,
            key: trimmed.to_string(),
        })
    }

    /// Modifier flags of this chord.
    pub fn modifiers(&self) -> ModifierSet {
        self.modifiers
    }

    /// The non-modifier key token, as typed (e.g. `F1`, `CapsLock`, `A`).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Parse an optional chord where the empty string means "unset".
    #[track_caller]
    pub fn parse_optional(text: &str) -> CoreResult<Option<Self>> {
        if text.trim().is_empty() {
            Ok(None)
        } else {
            text.parse().map(Some)
        }
    }
}

impl Default for Binding {
    fn default() -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key: "CapsLock".to_string(),
        }
    }
}

impl FromStr for Binding {
    type Err = CoreError;

    #[track_caller]
    fn from_str(text: &str) -> CoreResult<Self> {
        if text.trim().is_empty() {
            return Err(invalid(text, "empty hotkey"));
        }

        let mut modifiers = ModifierSet::default();
        let mut key: Option<&str> = None;

        for token in text.split('+').map(str::trim) {
            if token.is_empty() {
                return Err(invalid(text, "empty segment"));
            }
            if modifiers.insert(token) {
                continue;
            }
            if key.replace(token).is_some() {
                return Err(invalid(text, "more than one non-modifier key"));
            }
        }

        match key {
            Some(key) => Ok(Self {
                modifiers,
                key: key.to_string(),
            }),
            None => Err(invalid(text, "missing key")),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.modifiers.names() {
            write!(f, "{name}+")?;
        }
        f.write_str(&self.key)
    }
}

#[track_caller]
fn invalid(text: &str, reason: &str) -> CoreError {
    CoreError::InvalidBinding {
        binding: text.to_string(),
        reason: reason.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
