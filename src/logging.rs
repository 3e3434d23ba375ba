use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `ten_shades=trace`.
pub const LOG_ENV: &str = "TEN_SHADES_LOG";

/// Install a stderr subscriber. Stdout is reserved for the palette.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "ten_shades=debug"
    } else {
        "ten_shades=warn"
    };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return;
    }

    tracing::debug!(filter_env = LOG_ENV, "tracing initialized");
}
