use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize basic console logging when observability is disabled.
///
/// # Configuration
///
/// - **Log Level**: Controlled by `LOG_LEVEL` environment variable (default: "info")
/// - **Filtering**: `RUST_LOG` overrides the computed filter entirely
/// - **Format**: Compact format with ANSI colors
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "ecclesia={level},ecclesia_core={level},ecclesia_models={level},tower_http=warn,hyper=warn",
            level = log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(env_filter);

    // try_init: a second initialization (tests, CLI re-entry) is not an error
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
