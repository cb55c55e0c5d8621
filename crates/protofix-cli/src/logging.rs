//! Logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the log filter for the given verbosity
///
/// Quiet runs only report warnings so a successful rewrite prints nothing.
#[must_use]
pub fn filter_for(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Install the global subscriber, writing to stderr
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter_for(verbose))
        .init();
}
