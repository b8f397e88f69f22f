use tracing_subscriber::{fmt, EnvFilter};

/// Diagnostics go to stderr so stdout stays pipeable. Quiet unless
/// `RUST_LOG` asks for more.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
