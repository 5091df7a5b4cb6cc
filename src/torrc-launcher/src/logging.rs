//! Logging setup.
//!
//! The filter is fixed at build time. `RUST_LOG` is not consulted: the
//! invoking user must not be able to change what a privileged process
//! prints.

use tracing_subscriber::EnvFilter;

/// Filter directive baked in by `build.rs` (`TORRC_LAUNCHER_LOG`).
pub const LOG_FILTER: &str = env!("TORRC_LAUNCHER_LOG");

/// Install a stderr `fmt` subscriber. Does nothing if one is already set.
pub fn init_logging() {
    let filter = EnvFilter::try_new(LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
