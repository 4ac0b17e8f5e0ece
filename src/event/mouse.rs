//=========================================================================
// Mouse Events
//=========================================================================

use std::fmt;

use super::EventType;
use crate::input::MouseCode;

//=== MouseMovedEvent =====================================================

/// Cursor position in window coordinates (pixels, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMovedEvent {
    x: f32,
    y: f32,
}

impl MouseMovedEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

impl fmt::Display for MouseMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseMovedEvent: {}, {}", self.x, self.y)
    }
}

//=== MouseScrolledEvent ==================================================

/// Wheel movement. Positive `y_offset` scrolls away from the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseScrolledEvent {
    x_offset: f32,
    y_offset: f32,
}

impl MouseScrolledEvent {
    pub fn new(x_offset: f32, y_offset: f32) -> Self {
        Self { x_offset, y_offset }
    }

    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }
}

impl fmt::Display for MouseScrolledEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseScrolledEvent: {}, {}", self.x_offset, self.y_offset)
    }
}

//=== Mouse Button Events =================================================

/// Shared accessor for pressed / released button events.
pub trait MouseButtonEvent: EventType {
    fn button(&self) -> MouseCode;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonPressedEvent {
    button: MouseCode,
}

impl MouseButtonPressedEvent {
    pub fn new(button: MouseCode) -> Self {
        Self { button }
    }
}

impl fmt::Display for MouseButtonPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonPressedEvent: {}", self.button)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonReleasedEvent {
    button: MouseCode,
}

impl MouseButtonReleasedEvent {
    pub fn new(button: MouseCode) -> Self {
        Self { button }
    }
}

impl fmt::Display for MouseButtonReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonReleasedEvent: {}", self.button)
    }
}

impl MouseButtonEvent for MouseButtonPressedEvent {
    fn button(&self) -> MouseCode {
        self.button
    }
}

impl MouseButtonEvent for MouseButtonReleasedEvent {
    fn button(&self) -> MouseCode {
        self.button
    }
}

//--- Registration --------------------------------------------------------

event_type!(MouseMovedEvent => MouseMoved);
event_type!(MouseScrolledEvent => MouseScrolled);
event_type!(MouseButtonPressedEvent => MouseButtonPressed);
event_type!(MouseButtonReleasedEvent => MouseButtonReleased);
