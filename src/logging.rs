//! Diagnostic logging setup.
//!
//! User-facing results are printed through [crate::ui]; this module only
//! configures `tracing` output, which goes to stderr and is quiet unless
//! asked for with `-v` or `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
