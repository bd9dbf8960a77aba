use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Diagnostics go to stderr so they never interleave with menu output on
/// stdout. `RUST_LOG` overrides the default `info` filter.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
