use crate::hotkey_registry::to_hotkey;

use fps_hold_core::{Binding, CoreError};
use global_hotkey::hotkey::{Code, HotKey, Modifiers};

/// WHAT: The default binding maps to a bare CapsLock hotkey
/// WHY: CapsLock must be registrable without any modifier
#[test]
#[allow(clippy::unwrap_used)]
fn given_default_binding_when_converted_then_bare_caps_lock() {
    // Given: The default binding
    let binding = Binding::default();

    // When: Converting to a global-hotkey HotKey
    let hotkey = to_hotkey(&binding).unwrap();

    // Then: No modifiers, CapsLock key
    assert_eq!(hotkey, HotKey::new(None, Code::CapsLock));
}

/// WHAT: Modifiers are carried over to the OS hotkey
/// WHY: Ctrl+Shift+F1 must not fire on a bare F1
#[test]
#[allow(clippy::unwrap_used)]
fn given_chord_with_modifiers_when_converted_then_modifiers_preserved() {
    // Given: A chord with two modifiers
    let binding: Binding = "Ctrl+Shift+F1".parse().unwrap();

    // When: Converting
    let hotkey = to_hotkey(&binding).unwrap();

    // Then: Same modifiers and key
    assert_eq!(
        hotkey,
        HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::F1)
    );
}

/// WHAT: Meta maps to the SUPER modifier
/// WHY: global-hotkey names the Windows/Command key SUPER
#[test]
#[allow(clippy::unwrap_used)]
fn given_meta_chord_when_converted_then_super_modifier() {
    // Given: A chord using the meta alias
    let binding: Binding = "Cmd+Alt+Space".parse().unwrap();

    // When: Converting
    let hotkey = to_hotkey(&binding).unwrap();

    // Then: SUPER | ALT with Space
    assert_eq!(
        hotkey,
        HotKey::new(Some(Modifiers::SUPER | Modifiers::ALT), Code::Space)
    );
}

/// WHAT: Same chord written differently yields the same hotkey id
/// WHY: is_registered compares bindings, the OS compares ids
#[test]
#[allow(clippy::unwrap_used)]
fn given_equivalent_spellings_when_converted_then_same_id() {
    // Given: Two spellings of one chord
    let a: Binding = "control+shift+f1".parse().unwrap();
    let b: Binding = "Shift+Ctrl+F1".parse().unwrap();

    // When: Converting both
    let (a, b) = (to_hotkey(&a).unwrap(), to_hotkey(&b).unwrap());

    // Then: Identical ids
    assert_eq!(a.id(), b.id());
}

/// WHAT: Unknown key names are rejected as invalid bindings
/// WHY: Registration must fail loudly, not register a different key
#[test]
#[allow(clippy::unwrap_used, clippy::panic)]
fn given_unknown_key_when_converted_then_invalid_binding() {
    // Given: A syntactically valid chord with an unknown key
    let binding: Binding = "Ctrl+NotAKey".parse().unwrap();

    // When: Converting
    let result = to_hotkey(&binding);

    // Then: InvalidBinding naming the chord
    match result {
        Err(CoreError::InvalidBinding { binding, .. }) => assert_eq!(binding, "Ctrl+NotAKey"),
        other => panic!("expected InvalidBinding, got {:?}", other),
    }
}
