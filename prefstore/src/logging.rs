//! Logging initialization.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the host's job. These helpers cover the two common setups: stderr
//! output for interactive use, and a rolling file for long-lived hosts.
//! Either should be called once, early in startup, before the preference
//! bootstrap runs.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset (e.g. `"warn"` or
/// `"prefstore=debug"`).
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Install a subscriber writing to a daily-rolling file in `dir`.
///
/// Returns the worker guard; dropping it flushes and stops the background
/// writer, so hold it for the life of the process.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_with_file(dir: &Path, default_filter: &str) -> WorkerGuard {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let appender = tracing_appender::rolling::daily(dir, "prefstore.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}
