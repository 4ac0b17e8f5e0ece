//=========================================================================
// Logging
//
// Installs the process logger used by the binary entry point.
//
// The library itself only talks to the `log` facade. Without a logger
// installed every record is discarded, so the core runs (and is tested)
// without any logging setup.
//
// Targets:
// - `CORE_TARGET` ("hearth"): application loop and lifecycle
// - `CLIENT_TARGET` ("app"): client code built on the engine
// - "platform", "platform::input", "platform::queue": window backend
//
//=========================================================================

use std::io::Write;

use env_logger::{Builder, Env};
use log::debug;

//=== Targets =============================================================

pub const CORE_TARGET: &str = "hearth";
pub const CLIENT_TARGET: &str = "app";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "trace";

//=== Initialization ======================================================

/// Installs an `env_logger` writing `[time] LEVEL target: message`.
///
/// The filter comes from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
/// Calling it more than once is harmless; later calls keep the first
/// logger.
pub fn init() {
    let result = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:<5} {}: {}",
                buf.timestamp_seconds(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    if let Err(e) = result {
        debug!(target: CORE_TARGET, "Logger already installed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        log::info!(target: CLIENT_TARGET, "logging still works after double init");
    }
}
