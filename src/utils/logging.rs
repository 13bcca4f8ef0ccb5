use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr so stdout carries only the report output. `--debug` wins
/// over `RUST_LOG`; without either, info and above from this crate.
pub(crate) fn init_logging(debug: bool) {
    let env_filter = if debug {
        EnvFilter::new("attendance_report=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("attendance_report=info"))
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
