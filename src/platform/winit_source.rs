//=========================================================================
// Winit Event Source
//
// Drives the OS window through Winit's pump-events extension so the
// application keeps ownership of its own loop.
//
// Architecture:
// ```text
//  NativeWindow::on_update()
//     ↓
//  WinitEventSource::pump()
//     ↓ pump_app_events(timeout = 0)      (never waits)
//  EventCollector (ApplicationHandler)
//     ├─ resumed(): creates the OS window once
//     └─ window_event(): input_processor → NativeEventSender
//     ↓
//  QueuedEventSource ──poll_event()──> NativeWindow
// ```
//
// Key Design Decisions:
// - **Creation during the first pump**: Winit only hands out an
//   `ActiveEventLoop` inside handler callbacks, so `new()` pumps once and
//   reports a missing window as `WindowError::CreationFailed`
// - **Physical pixels**: the window is sized in physical pixels so the
//   cached dimensions and resize events use the same unit
// - **Loop exit = Quit**: if Winit reports the loop exited, a single
//   `NativeEvent::Quit` is queued so the application stops cleanly
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window as OsWindow, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use super::event_queue::{NativeEventSender, QueuedEventSource};
use super::input_processor::map_window_event;
use super::native_event::{NativeEvent, NativeEventSource};
use crate::window::{WindowError, WindowProps};

//=== EventCollector ======================================================

/// Winit handler that owns the OS window and forwards its events.
struct EventCollector {
    /// Attributes for the window still to be created (taken on success).
    pending_attributes: Option<WindowAttributes>,

    /// OS window handle (None until `resumed()` called).
    window: Option<OsWindow>,

    /// Creation failure reported by Winit, if any.
    creation_error: Option<String>,

    /// Producer side of the native queue.
    sender: NativeEventSender,
}

impl ApplicationHandler for EventCollector {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let Some(attributes) = self.pending_attributes.take() else {
            return;
        };

        match event_loop.create_window(attributes) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.creation_error = Some(e.to_string());
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let sender = &self.sender;
        map_window_event(event, |native| sender.send(native));
    }
}

//=== WinitEventSource ====================================================

/// [`NativeEventSource`] backed by a real Winit window.
///
/// # Thread Safety
///
/// Not Send/Sync: the event loop must stay on the thread that created it.
pub struct WinitEventSource {
    event_loop: EventLoop<()>,
    collector: EventCollector,
    queue: QueuedEventSource,
    exited: bool,
}

impl WinitEventSource {
    /// Starts the Winit event loop and creates the OS window.
    ///
    /// # Errors
    ///
    /// - [`WindowError::SubsystemUnavailable`] if the event loop cannot be
    ///   created (no display server, second event loop, wrong thread)
    /// - [`WindowError::CreationFailed`] if the OS refuses the window
    pub fn new(props: &WindowProps) -> Result<Self, WindowError> {
        info!(
            target: "platform",
            "Creating window {} ({}, {})",
            props.title,
            props.width,
            props.height
        );

        let mut event_loop = EventLoop::new()
            .map_err(|e| WindowError::SubsystemUnavailable(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let attributes = OsWindow::default_attributes()
            .with_title(props.title.clone())
            .with_inner_size(PhysicalSize::new(props.width, props.height))
            .with_resizable(true);

        let (sender, queue) = QueuedEventSource::channel();
        let mut collector = EventCollector {
            pending_attributes: Some(attributes),
            window: None,
            creation_error: None,
            sender,
        };

        // Window creation happens inside `resumed()`
        let status = event_loop.pump_app_events(Some(Duration::ZERO), &mut collector);

        if collector.window.is_none() {
            let reason = collector
                .creation_error
                .take()
                .unwrap_or_else(|| "native window was not created during startup".to_string());
            return Err(WindowError::CreationFailed(reason));
        }

        let exited = matches!(status, PumpStatus::Exit(_));
        if exited {
            collector.sender.send(NativeEvent::Quit);
        }

        Ok(Self {
            event_loop,
            collector,
            queue,
            exited,
        })
    }
}

impl NativeEventSource for WinitEventSource {
    fn pump(&mut self) {
        if self.exited {
            return;
        }

        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.collector);

        if let PumpStatus::Exit(code) = status {
            info!(target: "platform", "Native event loop exited (code {})", code);
            self.exited = true;
            self.collector.sender.send(NativeEvent::Quit);
        }
    }

    fn poll_event(&mut self) -> Option<NativeEvent> {
        self.queue.poll_event()
    }
}
