//=========================================================================
// Keyboard Events
//
// Pressed / released carry a physical key code; typed carries the code of
// the first character of committed text input.
//
//=========================================================================

use std::fmt;

use super::EventType;
use crate::input::KeyCode;

//=== KeyEvent ============================================================

/// Shared accessor for every keyboard event.
pub trait KeyEvent: EventType {
    fn key_code(&self) -> KeyCode;
}

//=== KeyPressedEvent =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressedEvent {
    key_code: KeyCode,
    is_repeat: bool,
}

impl KeyPressedEvent {
    pub fn new(key_code: KeyCode, is_repeat: bool) -> Self {
        Self { key_code, is_repeat }
    }

    /// True when generated by the OS key-repeat while the key is held.
    pub fn is_repeat(&self) -> bool {
        self.is_repeat
    }
}

impl fmt::Display for KeyPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPressedEvent: {} (repeat = {})", self.key_code, self.is_repeat)
    }
}

//=== KeyReleasedEvent ====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyReleasedEvent {
    key_code: KeyCode,
}

impl KeyReleasedEvent {
    pub fn new(key_code: KeyCode) -> Self {
        Self { key_code }
    }
}

impl fmt::Display for KeyReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyReleasedEvent: {}", self.key_code)
    }
}

//=== KeyTypedEvent =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTypedEvent {
    key_code: KeyCode,
}

impl KeyTypedEvent {
    pub fn new(key_code: KeyCode) -> Self {
        Self { key_code }
    }
}

impl fmt::Display for KeyTypedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyTypedEvent: {}", self.key_code)
    }
}

//--- Registration --------------------------------------------------------

event_type!(KeyPressedEvent => KeyPressed);
event_type!(KeyReleasedEvent => KeyReleased);
event_type!(KeyTypedEvent => KeyTyped);

impl KeyEvent for KeyPressedEvent {
    fn key_code(&self) -> KeyCode {
        self.key_code
    }
}

impl KeyEvent for KeyReleasedEvent {
    fn key_code(&self) -> KeyCode {
        self.key_code
    }
}

impl KeyEvent for KeyTypedEvent {
    fn key_code(&self) -> KeyCode {
        self.key_code
    }
}
