//=========================================================================
// Sandbox
//
// Opens a native window and logs every event it produces.
//
// Close the window to exit. Set `RUST_LOG=app=info` to hide the core's
// per-event trace output.
//
//=========================================================================

use std::process::ExitCode;

use hearth::logging::CLIENT_TARGET;
use hearth::prelude::*;
use log::*;

/// Client layer routing events by type.
struct Sandbox {
    input_events: u64,
}

impl Sandbox {
    fn new() -> Self {
        Self { input_events: 0 }
    }
}

impl EventHandler for Sandbox {
    fn on_event(&mut self, event: &mut Event) {
        if event.is_in_category(EventCategory::INPUT) {
            self.input_events += 1;
        }

        let mut dispatcher = EventDispatcher::new(event);

        dispatcher.dispatch::<WindowResizeEvent, _>(|e| {
            info!(target: CLIENT_TARGET, "Resized to {}x{}", e.width(), e.height());
            false
        });

        dispatcher.dispatch::<KeyPressedEvent, _>(|e| {
            if e.key_code() == KeyCode::ESCAPE {
                info!(target: CLIENT_TARGET, "Escape pressed, close the window to exit");
            }
            false
        });

        dispatcher.dispatch::<WindowCloseEvent, _>(|_| {
            info!(target: CLIENT_TARGET, "Closing after {} input events", self.input_events);
            false
        });
    }
}

fn main() -> ExitCode {
    launch(|| {
        Application::builder()
            .with_props(WindowProps::new("Hearth Sandbox").with_size(1280, 720))
            .with_target_fps(60.0)
            .with_handler(Sandbox::new())
            .build()
    })
}
