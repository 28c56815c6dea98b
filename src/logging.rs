use tracing_subscriber::{fmt, EnvFilter};

/// Console logging on stderr, `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
