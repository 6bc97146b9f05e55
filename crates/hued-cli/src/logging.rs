//! Log output setup.
//!
//! Logs go to stderr so command output on stdout stays clean. The level
//! comes from the `-v` count unless `HUED_LOG` holds an explicit filter.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `hued=debug`.
pub const LOG_ENV: &str = "HUED_LOG";

/// Maps a `-v` count to a default filter level.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// The filter from `HUED_LOG`, or the `-v` level when it is unset or invalid.
pub fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
