//! Stderr logging for the `aoc25` binary.
//!
//! The core library only emits `tracing` events; this module installs the
//! subscriber. `RUST_LOG` wins when set, otherwise the level follows
//! `--quiet` / `--verbose`.
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Filter directive used when `RUST_LOG` is unset or invalid.
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    // Tests may install more than once; the first subscriber stays.
    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
