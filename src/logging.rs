use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Log level defaults to `info`; override
/// with `RUST_LOG`. Logs go to stderr so report output on stdout stays clean.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
