//=========================================================================
// Native Window
//
// The one `Window` implementation, generic over where its native events
// come from.
//
// Per `on_update()`:
// ```text
//   source.pump()                       (non-blocking)
//   while let Some(native) = source.poll_event()
//       translate(native) ─None─> dropped
//            │ Some(event)
//            ├─ resize? → update cached width/height
//            └─ callback(&mut event)    (synchronous, in queue order)
// ```
//
//=========================================================================

use log::*;

use super::event_mapper::translate;
use super::native_event::NativeEventSource;
use crate::event::{Event, WindowResizeEvent};
use crate::window::{EventCallback, Window, WindowProps};

//=== WindowData ==========================================================

/// Cached window state, owned by the window value.
struct WindowData {
    title: String,
    width: u32,
    height: u32,
    event_callback: Option<EventCallback>,
}

//=== NativeWindow ========================================================

/// Window driven by a [`NativeEventSource`].
///
/// With a [`QueuedEventSource`](super::QueuedEventSource) this is a fully
/// headless window; with the winit source it is the OS window.
pub struct NativeWindow<S: NativeEventSource> {
    source: S,
    data: WindowData,
}

impl<S: NativeEventSource> NativeWindow<S> {
    pub fn new(props: &WindowProps, source: S) -> Self {
        debug!(
            target: "platform",
            "Window data initialized: {} ({}, {})",
            props.title,
            props.width,
            props.height
        );
        Self {
            source,
            data: WindowData {
                title: props.title.clone(),
                width: props.width,
                height: props.height,
                event_callback: None,
            },
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn has_event_callback(&self) -> bool {
        self.data.event_callback.is_some()
    }

    //--- Internal Helpers -------------------------------------------------

    fn deliver(&mut self, mut event: Event) {
        if let Some(resize) = event.get::<WindowResizeEvent>() {
            self.data.width = resize.width();
            self.data.height = resize.height();
        }

        match self.data.event_callback.as_mut() {
            Some(callback) => callback(&mut event),
            None => trace!(target: "platform", "No event callback, dropping {}", event),
        }
    }
}

//=== Window Integration ==================================================

impl<S: NativeEventSource> Window for NativeWindow<S> {
    fn on_update(&mut self) {
        self.source.pump();

        while let Some(native) = self.source.poll_event() {
            if let Some(event) = translate(native) {
                self.deliver(event);
            }
        }
    }

    fn width(&self) -> u32 {
        self.data.width
    }

    fn height(&self) -> u32 {
        self.data.height
    }

    fn title(&self) -> &str {
        &self.data.title
    }

    fn set_event_callback(&mut self, callback: EventCallback) {
        if self.data.event_callback.is_some() {
            debug!(target: "platform", "Replacing window event callback");
        }
        self.data.event_callback = Some(callback);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
