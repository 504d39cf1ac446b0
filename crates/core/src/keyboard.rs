//! Maps key presses on the question view to selection and submit commands.
//!
//! The mapping is UI-agnostic: the view translates its native keyboard event into a
//! [`KeyPress`] and performs whatever [`KeyOutcome`] asks for.

use crate::model::AnswerMode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyModifiers {
    #[must_use]
    pub fn any(self) -> bool {
        self.ctrl || self.alt || self.meta || self.shift
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    ArrowUp,
    ArrowDown,
    /// `1` through `9`.
    Digit(u8),
    Other,
}

impl NavKey {
    /// Interpret a printable key value such as `"3"`.
    #[must_use]
    pub fn from_character(value: &str) -> Self {
        match value.as_bytes() {
            [digit @ b'1'..=b'9'] => NavKey::Digit(digit - b'0'),
            _ => NavKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: NavKey,
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    #[must_use]
    pub fn plain(key: NavKey) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Same as clicking the submit control.
    Submit,
    /// Same as clicking the option at this index.
    ClickOption(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    pub command: Option<KeyCommand>,
    pub prevent_default: bool,
}

impl KeyOutcome {
    const IGNORED: Self = Self {
        command: None,
        prevent_default: false,
    };
}

/// Decide what a key press does given the current selection.
///
/// `selected` is the position of the selected option, if any.
#[must_use]
pub fn resolve_key(
    press: KeyPress,
    selected: Option<usize>,
    option_count: usize,
    mode: AnswerMode,
) -> KeyOutcome {
    match press.key {
        NavKey::Enter if !press.modifiers.any() => KeyOutcome {
            command: Some(KeyCommand::Submit),
            prevent_default: true,
        },
        NavKey::ArrowUp | NavKey::ArrowDown => {
            let target = if option_count == 0 || !mode.is_single() {
                None
            } else if press.key == NavKey::ArrowUp {
                Some(selected.map_or(option_count - 1, |pos| {
                    (pos + option_count - 1) % option_count
                }))
            } else {
                Some(selected.map_or(0, |pos| (pos + 1) % option_count))
            };
            KeyOutcome {
                command: target.map(KeyCommand::ClickOption),
                prevent_default: true,
            }
        }
        NavKey::Digit(digit) if (1..=9).contains(&digit) && usize::from(digit) <= option_count => {
            KeyOutcome {
                command: Some(KeyCommand::ClickOption(usize::from(digit) - 1)),
                prevent_default: false,
            }
        }
        _ => KeyOutcome::IGNORED,
    }
}
