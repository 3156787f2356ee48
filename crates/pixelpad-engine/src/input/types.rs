use std::fmt;

use crate::coords::Vec2;

/// Keyboard key, by physical position on a US layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,
    Delete,
    Shift,
    Control,
    Alt,
    Meta,
    /// Lowercase ASCII letter `a..=z`.
    Letter(char),
    /// Top-row or numpad digit `0..=9`.
    Digit(u8),
    /// Anything else; carries the platform key code.
    Unknown(u32),
}

impl Key {
    /// Letter key from any-case ASCII. Non-letters give `None`.
    pub fn letter(c: char) -> Option<Key> {
        c.is_ascii_alphabetic().then(|| Key::Letter(c.to_ascii_lowercase()))
    }

    pub fn digit(self) -> Option<u8> {
        match self {
            Key::Digit(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Letter(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::Digit(d) => write!(f, "{d}"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Lifecycle stage of a touch contact.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// Window input in logical pixels, top-left origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// True for auto-repeat presses.
        repeat: bool,
    },

    PointerMoved {
        position: Vec2,
    },

    /// Carries the last known pointer position.
    PointerButton {
        button: MouseButton,
        pressed: bool,
        position: Vec2,
    },

    /// `id` is unique while the contact lives; platforms may reuse it later.
    Touch {
        id: u64,
        phase: TouchPhase,
        position: Vec2,
    },

    ModifiersChanged(Modifiers),
    PointerLeft,
    Focused(bool),
}
