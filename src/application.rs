//=========================================================================
// Application
//
// Owns the window, installs the event callback and runs the main loop.
//
// Architecture:
// ```text
//     ApplicationBuilder  ──build()──>  Application  ──run()──>  [Loop]
//         │                               │
//         ├─ with_props()                 ├─ installs callback on window
//         ├─ with_window()                └─ while Running:
//         ├─ with_handler()                      window.on_update()
//         └─ with_target_fps()                   (optional pacing)
// ```
//
// Event Flow:
// ```text
//   Window callback
//     ↓
//   client EventHandler::on_event(&mut event)      (feature routing)
//     ↓
//   EventDispatcher::dispatch::<WindowCloseEvent>  → RunState::Stopped
// ```
//
// State is shared between the application and the callback it installs
// through `Rc`, so an `Application` is `!Send`: the loop,
// the window and every callback run on one thread.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use log::*;

//=== Internal Modules ====================================================

use crate::event::{Event, EventDispatcher, WindowCloseEvent};
use crate::logging::CORE_TARGET;
use crate::window::{self, Window, WindowError, WindowProps};

//=== RunState ============================================================

/// Main loop state. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

//=== EventHandler ========================================================

/// Client hook receiving every event the window produces.
///
/// This is where feature code routes events, typically through an
/// [`EventDispatcher`]. Closures taking `&mut Event` implement it.
pub trait EventHandler {
    fn on_event(&mut self, event: &mut Event);
}

impl<F> EventHandler for F
where
    F: FnMut(&mut Event),
{
    fn on_event(&mut self, event: &mut Event) {
        self(event)
    }
}

//=== Shared State ========================================================

/// State reachable from both the application and its window callback.
struct AppShared {
    state: Cell<RunState>,
    handler: RefCell<Option<Box<dyn EventHandler>>>,
}

impl AppShared {
    fn on_event(&self, event: &mut Event) {
        trace!(target: CORE_TARGET, "{}", event);

        if let Some(handler) = self.handler.borrow_mut().as_mut() {
            handler.on_event(event);
        }

        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch::<WindowCloseEvent, _>(|_| {
            if self.state.get() == RunState::Running {
                info!(target: CORE_TARGET, "Window close received, stopping");
            }
            self.state.set(RunState::Stopped);
            true
        });
    }
}

//=== ApplicationBuilder ==================================================

/// Builder for configuring and constructing an [`Application`].
///
/// # Default Values
///
/// - **Window**: native window created from `WindowProps::default()`
/// - **Handler**: none (events are only logged)
/// - **Target FPS**: unpaced (the loop polls as fast as it can)
///
/// # Examples
///
/// ```no_run
/// use hearth::application::ApplicationBuilder;
/// use hearth::window::WindowProps;
///
/// let mut app = ApplicationBuilder::new()
///     .with_props(WindowProps::new("Sandbox"))
///     .with_target_fps(60.0)
///     .with_handler(|event: &mut hearth::event::Event| println!("{event}"))
///     .build()
///     .expect("window");
/// app.run();
/// ```
pub struct ApplicationBuilder {
    props: WindowProps,
    window: Option<Box<dyn Window>>,
    handler: Option<Box<dyn EventHandler>>,
    frame_duration: Option<Duration>,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            props: WindowProps::default(),
            window: None,
            handler: None,
            frame_duration: None,
        }
    }

    /// Properties of the native window created by [`build`](Self::build).
    pub fn with_props(mut self, props: WindowProps) -> Self {
        self.props = props;
        self
    }

    /// Uses an already created window instead of opening a native one.
    ///
    /// Window props are ignored when a window is supplied.
    pub fn with_window(mut self, window: Box<dyn Window>) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_handler(mut self, handler: impl EventHandler + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Caps the loop at `fps` iterations per second by sleeping out the
    /// rest of each frame.
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0` or if `1 / fps` seconds does not fit in a
    /// [`Duration`].
    pub fn with_target_fps(mut self, fps: f64) -> Self {
        assert!(fps > 0.0, "Target FPS must be positive, got {}", fps);
        let frame_duration = Duration::try_from_secs_f64(1.0 / fps);
        assert!(
            frame_duration.is_ok(),
            "Target FPS must give a representable frame time, got {}",
            fps
        );
        self.frame_duration = frame_duration.ok();
        self
    }

    /// Creates the window (unless one was supplied) and wires the callback.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError`] if the native window cannot be created. No
    /// loop is started in that case.
    pub fn build(self) -> Result<Application, WindowError> {
        let mut window = match self.window {
            Some(window) => window,
            None => window::create(&self.props)?,
        };

        let shared = Rc::new(AppShared {
            state: Cell::new(RunState::Running),
            handler: RefCell::new(self.handler),
        });

        let callback_state = Rc::clone(&shared);
        window.set_event_callback(Box::new(move |event: &mut Event| {
            callback_state.on_event(event)
        }));

        info!(
            target: CORE_TARGET,
            "Application created: \"{}\" {}x{}",
            window.title(),
            window.width(),
            window.height()
        );

        Ok(Application {
            window,
            shared,
            frame_duration: self.frame_duration,
        })
    }
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Application =========================================================

/// Application runtime: one window and the loop that drives it.
///
/// Starts `Running`; a `WindowCloseEvent` from the window moves it to
/// `Stopped`, after which [`run`](Self::run) returns.
pub struct Application {
    window: Box<dyn Window>,
    shared: Rc<AppShared>,
    frame_duration: Option<Duration>,
}

impl Application {
    /// Opens a native window with default properties.
    pub fn new() -> Result<Self, WindowError> {
        ApplicationBuilder::new().build()
    }

    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    pub fn state(&self) -> RunState {
        self.shared.state.get()
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    pub fn window(&self) -> &dyn Window {
        &*self.window
    }

    /// Moves to `Stopped` without a close event; `run()` returns after
    /// the current frame.
    pub fn request_stop(&self) {
        self.shared.state.set(RunState::Stopped);
    }

    //--- Execution --------------------------------------------------------

    /// Runs one loop iteration: drains the window's events if still
    /// running. Returns the state afterwards.
    pub fn run_frame(&mut self) -> RunState {
        if self.is_running() {
            self.window.on_update();
        }
        self.state()
    }

    /// Drives the window until it delivers a `WindowCloseEvent`.
    pub fn run(&mut self) {
        debug!(target: CORE_TARGET, "Entering main loop");

        while self.is_running() {
            let frame_start = Instant::now();

            if self.run_frame() == RunState::Stopped {
                break;
            }

            if let Some(frame_duration) = self.frame_duration {
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        }

        info!(target: CORE_TARGET, "Application stopped");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
