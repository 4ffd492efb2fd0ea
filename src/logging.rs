use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. stdout is reserved for frames.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. A second call
/// is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
