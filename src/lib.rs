//=========================================================================
// Hearth: Library Root
//
// Event-handling core of a minimal windowing shell.
//
// Responsibilities:
// - Define the engine event model (`event`) and input codes (`input`)
// - Abstract the window behind the `Window` trait (`window`)
// - Translate native windowing events into engine events (`platform`)
// - Drive the frame loop until the window is closed (`application`)
//
// Typical usage:
// ```no_run
// use hearth::{entry, Application};
//
// fn main() -> std::process::ExitCode {
//     entry::launch(Application::new)
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `platform` is public so hosts and tests can build headless windows fed
// from a native event queue. Normal client code only needs `Application`,
// the event types and the prelude.
//
pub mod application;
pub mod entry;
pub mod event;
pub mod input;
pub mod logging;
pub mod platform;
pub mod prelude;
pub mod window;

//--- Public Exports ------------------------------------------------------

pub use application::{Application, ApplicationBuilder, EventHandler, RunState};
pub use event::{Event, EventCategory, EventDispatcher, EventKind};
pub use window::{Window, WindowError, WindowProps};
