//=========================================================================
// Platform Subsystem
//
// Bridges native windowing (Winit) with the engine's event model.
//
// Architecture:
// ```text
//  OS / Winit                          Engine
//  ┌──────────────────────────┐    ┌──────────────────────────┐
//  │  Winit Event Loop        │    │  Application             │
//  │   ↓ (pumped, timeout 0)  │    │   ↑                      │
//  │  EventCollector          │    │  EventCallback           │
//  │   ↓                      │    │   ↑                      │
//  │  InputProcessor          │    │  NativeWindow            │
//  │   └─ WindowEvent →       │    │   ├─ event_mapper:       │
//  │      NativeEvent         │    │   │  NativeEvent → Event │
//  │   ↓                      │    │   └─ tracks width/height │
//  │  Native Event Queue ─────┼───►│                          │
//  └──────────────────────────┘    └──────────────────────────┘
// ```
//
// Responsibilities:
// - Create and manage the OS window
// - Poll Winit events without blocking, once per frame
// - Convert Winit types → NativeEvent → engine Events
// - Offer a channel-backed queue for headless windows and tests
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
mod event_queue;
mod input_processor;
mod native_event;
mod native_window;

#[cfg(not(any(target_arch = "wasm32", target_os = "ios")))]
mod winit_source;

//=== Public API ==========================================================

pub use event_queue::{NativeEventSender, QueuedEventSource};
pub use native_event::{NativeEvent, NativeEventSource};
pub use native_window::NativeWindow;

#[cfg(not(any(target_arch = "wasm32", target_os = "ios")))]
pub use winit_source::WinitEventSource;

//=== Internal Imports ====================================================

use crate::window::{Window, WindowError, WindowProps};

//=== Construction ========================================================

/// Headless window fed from a channel, plus the sender that feeds it.
pub fn headless_window(props: &WindowProps) -> (NativeEventSender, NativeWindow<QueuedEventSource>) {
    let (sender, source) = QueuedEventSource::channel();
    (sender, NativeWindow::new(props, source))
}

/// Creates the OS window through Winit.
#[cfg(not(any(target_arch = "wasm32", target_os = "ios")))]
pub(crate) fn create_native_window(props: &WindowProps) -> Result<Box<dyn Window>, WindowError> {
    let source = WinitEventSource::new(props)?;
    Ok(Box::new(NativeWindow::new(props, source)))
}

/// Platforms without a pumpable event loop cannot host the window.
#[cfg(any(target_arch = "wasm32", target_os = "ios"))]
pub(crate) fn create_native_window(_props: &WindowProps) -> Result<Box<dyn Window>, WindowError> {
    Err(WindowError::SubsystemUnavailable(
        "non-blocking event polling is not supported on this platform".to_string(),
    ))
}
