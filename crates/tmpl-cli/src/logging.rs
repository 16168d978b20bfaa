//! Tracing subscriber setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber writing to stderr.
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` decides, defaulting
/// to warnings only so stdout stays clean for rendered configuration.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    // Already initialized (e.g. in tests) is fine
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();

    announce(verbose);
}

fn announce(verbose: bool) {
    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
}
