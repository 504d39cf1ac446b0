use dioxus::prelude::*;
use keyboard_types::{Key, Modifiers};

use quiz_core::keyboard::{KeyModifiers, KeyPress, NavKey};

/// Translate a DOM key event into the engine's key model.
pub(super) fn key_press(evt: &KeyboardEvent) -> KeyPress {
    let key = match evt.data.key() {
        Key::Enter => NavKey::Enter,
        Key::ArrowUp => NavKey::ArrowUp,
        Key::ArrowDown => NavKey::ArrowDown,
        Key::Character(value) => NavKey::from_character(&value),
        _ => NavKey::Other,
    };
    let modifiers = evt.data.modifiers();
    KeyPress {
        key,
        modifiers: KeyModifiers {
            ctrl: modifiers.contains(Modifiers::CONTROL),
            alt: modifiers.contains(Modifiers::ALT),
            meta: modifiers.contains(Modifiers::META),
            shift: modifiers.contains(Modifiers::SHIFT),
        },
    }
}
