//=========================================================================
// Window Contract
//
// Capability interface every platform window implements, plus the
// configuration it is created from.
//
// Responsibilities:
// - Describe what a window must offer the application (update, size,
//   callback registration)
// - Carry creation-time configuration (`WindowProps`)
// - Report creation failures as values, never as half-built windows
//
// Notes:
// The callback slot is an owned field of each window value. Replacing it
// only affects later `on_update()` calls.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Modules ====================================================

use crate::event::Event;

//=== EventCallback =======================================================

/// Callback a window invokes once per translated event.
pub type EventCallback = Box<dyn FnMut(&mut Event)>;

//=== WindowProps =========================================================

/// Window creation settings. Read once by [`create`] and not retained.
///
/// # Default Values
///
/// - **Title**: `"Hearth Engine"`
/// - **Size**: 1280x720
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowProps {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl WindowProps {
    pub const DEFAULT_TITLE: &'static str = "Hearth Engine";
    pub const DEFAULT_WIDTH: u32 = 1280;
    pub const DEFAULT_HEIGHT: u32 = 720;

    /// Default-sized window with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for WindowProps {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

//=== Window ==============================================================

/// Platform window as seen by the application.
///
/// # Contract
///
/// - `on_update()` drains every pending native event without blocking,
///   invoking the callback once per translated event, in queue order.
/// - `width()`/`height()` return the last size reported by a resize
///   event (or the creation size), never a fresh OS query.
/// - `set_event_callback()` replaces the single callback slot.
pub trait Window {
    fn on_update(&mut self);

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn title(&self) -> &str;

    fn set_event_callback(&mut self, callback: EventCallback);
}

//=== WindowError =========================================================

/// Window initialization errors.
///
/// Both are fatal for the window being created; no handle is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The native windowing subsystem could not be initialized.
    SubsystemUnavailable(String),

    /// The subsystem is up but the native window could not be created.
    CreationFailed(String),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubsystemUnavailable(e) => {
                write!(f, "Windowing subsystem failed to initialize: {}", e)
            }
            Self::CreationFailed(e) => write!(f, "Window creation failed: {}", e),
        }
    }
}

impl std::error::Error for WindowError {}

//=== Construction ========================================================

/// Creates the native platform window described by `props`.
///
/// # Errors
///
/// Returns [`WindowError`] if the windowing subsystem is unavailable or
/// the native window cannot be created.
pub fn create(props: &WindowProps) -> Result<Box<dyn Window>, WindowError> {
    crate::platform::create_native_window(props)
}

//=========================================================================
// Unit Tests
//=========================================================================
