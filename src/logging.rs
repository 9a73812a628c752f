//! Tracing subscriber setup shared by the binaries

use anyhow::anyhow;
use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Lenient level parsing: unknown or blank values fall back to `info`
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` directives are layered on top of `level`.
pub fn init(level: Level, format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
