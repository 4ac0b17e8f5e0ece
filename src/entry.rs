//=========================================================================
// Entry Point
//
// Process-level wrapper: install logging, build the client application,
// run it and turn the outcome into an exit code.
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

use std::process::ExitCode;

use log::*;

use crate::application::Application;
use crate::logging::{self, CORE_TARGET};
use crate::window::WindowError;

//=== Execution ===========================================================

/// Builds the application with `create` and runs it to completion.
///
/// # Errors
///
/// Returns the [`WindowError`] from `create`; the loop never starts in
/// that case. Once running, the loop itself cannot fail.
pub fn run_application<F>(create: F) -> Result<(), WindowError>
where
    F: FnOnce() -> Result<Application, WindowError>,
{
    let mut app = create()?;
    app.run();
    Ok(())
}

/// Full process entry: [`logging::init`], then [`run_application`].
///
/// Returns `ExitCode::SUCCESS` when `run()` returns normally and
/// `ExitCode::FAILURE` if the application could not be created.
pub fn launch<F>(create: F) -> ExitCode
where
    F: FnOnce() -> Result<Application, WindowError>,
{
    logging::init();
    info!(target: CORE_TARGET, "Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match run_application(create) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: CORE_TARGET, "Application failed to start: {}", e);
            ExitCode::FAILURE
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{headless_window, NativeEvent};
    use crate::window::WindowProps;

    #[test]
    fn run_application_returns_after_close() {
        let result = run_application(|| {
            let (tx, window) = headless_window(&WindowProps::default());
            tx.send(NativeEvent::Quit);
            Application::builder().with_window(Box::new(window)).build()
        });

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn run_application_surfaces_creation_errors() {
        let result = run_application(|| Err(WindowError::CreationFailed("no display".into())));

        assert_eq!(result, Err(WindowError::CreationFailed("no display".into())));
    }

    #[test]
    fn launch_reports_failure_before_any_loop() {
        let code = launch(|| Err(WindowError::SubsystemUnavailable("headless CI".into())));

        assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::FAILURE));
    }
}
