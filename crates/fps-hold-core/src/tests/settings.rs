#![allow(clippy::unwrap_used)]

use crate::{Binding, CoreError, ModifierSet, RateLimit, Settings, Target};

/// WHAT: Chords are parsed case-insensitively and printed canonically
/// WHY: The stored chord must round-trip to the same registration
#[test]
fn given_mixed_case_chord_when_parsed_then_canonical_order() {
    // Given: Modifiers in arbitrary order and case
    let text = "shift+CTRL+F1";

    // When: Parsing
    let binding: Binding = text.parse().unwrap();

    // Then: Canonical rendering, key token preserved
    assert_eq!(binding.to_string(), "Ctrl+Shift+F1");
    assert_eq!(binding.key(), "F1");
    assert!(binding.modifiers().ctrl && binding.modifiers().shift);
    assert!(!binding.modifiers().alt && !binding.modifiers().meta);
}

/// WHAT: Platform modifier aliases map onto the four flags
/// WHY: Users type Cmd, Super or Option depending on their keyboard
#[test]
fn given_modifier_aliases_when_parsed_then_mapped() {
    // Given/When: Aliased chord
    let binding: Binding = "Control+Option+Super+Space".parse().unwrap();

    // Then: Rendered with canonical names
    assert_eq!(binding.to_string(), "Ctrl+Alt+Meta+Space");
}

/// WHAT: A bare key is a valid chord
/// WHY: The default chord is CapsLock with no modifiers
#[test]
fn given_bare_key_when_parsed_then_no_modifiers() {
    let binding: Binding = "CapsLock".parse().unwrap();

    assert!(binding.modifiers().is_empty());
    assert_eq!(binding, Binding::default());
}

/// WHAT: Chords without exactly one non-modifier key are rejected
/// WHY: A modifier is never the key token
#[test]
fn given_malformed_chords_when_parsed_then_invalid_binding() {
    for text in ["Ctrl+Shift", "Ctrl+A+B", "Ctrl++A", "  ", "Shift+"] {
        let result = text.parse::<Binding>();
        assert!(
            matches!(result, Err(CoreError::InvalidBinding { .. })),
            "{text:?} should be rejected"
        );
    }
}

/// WHAT: Building a binding with a modifier as key fails
/// WHY: Same invariant as parsing, for programmatic construction
#[test]
fn given_modifier_key_when_constructed_then_invalid_binding() {
    let result = Binding::new(ModifierSet::default(), "Shift");

    assert!(matches!(result, Err(CoreError::InvalidBinding { .. })));
}

/// WHAT: Empty chord text means unset
/// WHY: Clearing the hotkey field must not be an error
#[test]
fn given_empty_text_when_parsed_optional_then_none() {
    assert_eq!(Binding::parse_optional("").unwrap(), None);
    assert_eq!(RateLimit::parse_optional(" ").unwrap(), None);
    assert_eq!(Target::parse_optional(""), None);
}

/// WHAT: Only the exact "Global" sentinel is the global scope
/// WHY: Anything else is an application name
#[test]
fn given_target_texts_when_parsed_then_sentinel_exact() {
    assert_eq!("Global".parse::<Target>().unwrap(), Target::Global);
    assert_eq!(
        "global".parse::<Target>().unwrap(),
        Target::Application("global".to_string())
    );
    assert_eq!(
        " game.exe ".parse::<Target>().unwrap(),
        Target::Application("game.exe".to_string())
    );
}

/// WHAT: Rates must be non-negative integers
/// WHY: The limiter only understands whole frames per second
#[test]
fn given_rate_texts_when_parsed_then_validated() {
    assert_eq!(" 30 ".parse::<RateLimit>().unwrap(), RateLimit::new(30));
    assert_eq!("0".parse::<RateLimit>().unwrap(), RateLimit::UNLIMITED);

    for text in ["-1", "abc", "29.97"] {
        assert!(matches!(
            text.parse::<RateLimit>(),
            Err(CoreError::InvalidRateLimit { .. })
        ));
    }
}

/// WHAT: Load-time defaults and restore defaults differ
/// WHY: Restore targets the global scope, first launch targets the game
#[test]
fn given_defaults_when_compared_then_documented_values() {
    let loaded = Settings::default();
    let reset = Settings::reset_defaults();

    assert_eq!(loaded.binding.unwrap().to_string(), "CapsLock");
    assert_eq!(
        loaded.target,
        Some(Target::Application("NarakaBladepoint.exe".to_string()))
    );
    assert_eq!(loaded.rate, Some(RateLimit::new(20)));

    assert_eq!(reset.binding.unwrap().to_string(), "CapsLock");
    assert_eq!(reset.target, Some(Target::Global));
    assert_eq!(reset.rate, Some(RateLimit::new(10)));
}

/// WHAT: Settings are complete only with all three fields
/// WHY: Start is guarded on completeness
#[test]
fn given_partial_settings_when_checked_then_incomplete() {
    let mut settings = Settings::default();
    assert!(settings.is_complete());

    settings.rate = None;
    assert!(!settings.is_complete());
}
