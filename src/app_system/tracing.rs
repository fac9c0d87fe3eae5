use super::CartConfig;

/// Installs the global subscriber. Filter comes from `RUST_LOG`, defaulting
/// to `info`.
pub fn setup_tracing(config: &CartConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime());

    if config.log_json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}
