use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the global stderr subscriber.
///
/// Filter precedence: `RUST_LOG`, then `--verbose` (debug), then the config
/// `log_level`, then "warn".
pub fn init(log_level: Option<&str>, verbose: bool) -> anyhow::Result<()> {
    let fallback = if verbose {
        "debug"
    } else {
        log_level.unwrap_or(DEFAULT_LOG_LEVEL)
    };

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback)
            .map_err(|e| anyhow::anyhow!("invalid log level/filter '{}': {}", fallback, e))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}
