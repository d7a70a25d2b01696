use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Sends log output to stderr so stdout only carries the changelog.
///
/// `RUST_LOG` takes precedence over the default level.
pub(crate) fn init(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
