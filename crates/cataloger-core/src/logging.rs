//! Logging setup on top of `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the cataloger crates log at `info`,
/// or `debug` when `verbose` is set. Output goes to stderr so that command
/// output on stdout stays machine-readable.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,cataloger_core={level},cataloger_analysis={level},api_cataloger={level}"
        ))
    });

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
