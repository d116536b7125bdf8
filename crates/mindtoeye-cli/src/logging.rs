//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` when set, otherwise `level` for everything.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global fmt subscriber. Logs go to stderr so `generate`
/// output on stdout stays machine-readable.
pub fn init(level: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = result {
        eprintln!("logging already initialized: {e}");
    }
}
