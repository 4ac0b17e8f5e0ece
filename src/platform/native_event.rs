//=========================================================================
// Native Events
//
// Platform-neutral form of what a windowing backend reports, before it is
// translated into engine `Event`s.
//
// Backends (winit, the channel-backed test queue) produce `NativeEvent`s;
// `NativeWindow` drains them through a `NativeEventSource`.
//
//=========================================================================

use crate::input::{KeyCode, MouseCode};

//=== NativeEvent =========================================================

/// One entry of a native event queue.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeEvent {
    /// Application quit / window close requested.
    Quit,

    /// Client area resized (physical pixels).
    Resized { width: u32, height: u32 },

    KeyDown { key_code: KeyCode, repeat: bool },

    KeyUp { key_code: KeyCode },

    /// Committed text. Only the first character becomes an event.
    TextInput(String),

    MouseMotion { x: f32, y: f32 },

    MouseWheel { x: f32, y: f32 },

    MouseButtonDown(MouseCode),

    MouseButtonUp(MouseCode),

    FocusGained,

    FocusLost,

    /// Window moved on the desktop (outer position).
    Moved { x: i32, y: i32 },

    /// Anything the backend reports that the engine does not model.
    ///
    /// Dropped during translation; kept so backends can forward unknown
    /// native kinds without failing.
    Unidentified,
}

//=== NativeEventSource ===================================================

/// Non-blocking supplier of native events for one window.
pub trait NativeEventSource {
    /// Lets the backend collect pending OS events. Called once at the start
    /// of every `on_update()`; must return without waiting.
    fn pump(&mut self) {}

    /// Next queued event, or `None` when the queue is currently empty.
    fn poll_event(&mut self) -> Option<NativeEvent>;
}
