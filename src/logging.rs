//! Diagnostic logging setup.
//!
//! User-facing messages go through [`crate::output::Reporter`]; `tracing` is
//! for diagnostics only and stays at `warn` unless `--verbose` or `RUST_LOG`
//! asks for more.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    // RUST_LOG overrides the flag
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dot_tracker={level},dtrack={level}")));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .compact()
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
