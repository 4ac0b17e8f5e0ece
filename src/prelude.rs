//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use hearth::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Application
pub use crate::application::{Application, ApplicationBuilder, EventHandler, RunState};
pub use crate::entry::launch;

// Event model
pub use crate::event::{
    Event, EventCategory, EventDispatcher, EventKind, EventPayload, EventType, KeyEvent,
    MouseButtonEvent,
};

// Concrete events
pub use crate::event::{
    AppRenderEvent, AppTickEvent, AppUpdateEvent, KeyPressedEvent, KeyReleasedEvent,
    KeyTypedEvent, MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent,
    MouseScrolledEvent, WindowCloseEvent, WindowFocusEvent, WindowLostFocusEvent,
    WindowMovedEvent, WindowResizeEvent,
};

// Input codes
pub use crate::input::{KeyCode, MouseCode};

// Window
pub use crate::window::{Window, WindowError, WindowProps};
