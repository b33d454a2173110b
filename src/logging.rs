use std::path::Path;

use tracing::Subscriber;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
    EnvFilter, Layer,
};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
}

fn level_file_layer<S>(log_dir: &str, file_name: &str, level: LevelFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_writer(tracing_appender::rolling::daily(log_dir, file_name))
        .with_ansi(false)
        .with_filter(level)
}

/// Initialize file-based logging with daily rotation and level separation,
/// plus console output.
///
/// Log files are created as: logs/info.log.2026-10-19, logs/error.log.2026-10-19, etc.
pub fn init(log_dir: &str) -> std::io::Result<()> {
    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(Path::new(log_dir))?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(console_layer)
        // Daily rotating file per level
        .with(level_file_layer(log_dir, "info.log", LevelFilter::INFO))
        .with(level_file_layer(log_dir, "warn.log", LevelFilter::WARN))
        .with(level_file_layer(log_dir, "error.log", LevelFilter::ERROR))
        .with(level_file_layer(log_dir, "debug.log", LevelFilter::DEBUG))
        .init();

    Ok(())
}

/// Console-only logging for one-shot commands. Writes to stderr so stdout
/// stays machine-readable.
pub fn init_console() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .init();
}
