use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// Honors `RUST_LOG`, defaulting to `warn`. Stdout carries the generated
/// document, so nothing is ever logged there.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
