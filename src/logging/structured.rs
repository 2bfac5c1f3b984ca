//! Structured logging setup using tracing
//!
//! JSON output is the default so each line lands in CloudWatch as one
//! queryable event; the text format is meant for local runs.

use crate::config::{LogFormat, LoggingConfig};
use crate::domain::{ReportError, Result};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Initialize the logging system based on configuration
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
///
/// # Errors
///
/// Returns a configuration error for an unknown level or when a global
/// subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// use vscene_report::config::LoggingConfig;
/// use vscene_report::logging::init_logging;
///
/// init_logging(&LoggingConfig::default()).expect("Failed to initialize logging");
/// tracing::info!("Application started");
/// ```
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let log_level = parse_log_level(&config.level)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vscene_report={log_level},warn")));

    let layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| ReportError::Configuration(format!("Failed to initialize logging: {e}")))?;

    tracing::debug!(
        level = %log_level,
        format = ?config.format,
        "Logging initialized"
    );

    Ok(())
}

/// Parse log level from string
pub(crate) fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ReportError::Configuration(format!(
            "Invalid log level: {level_str}. Must be one of: trace, debug, info, warn, error"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("Info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
        assert!(parse_log_level("loud").is_err());
    }

    #[test]
    fn test_init_logging_rejects_invalid_level() {
        let config = LoggingConfig {
            level: "chatty".to_string(),
            format: LogFormat::Text,
        };
        assert!(init_logging(&config).is_err());
    }
}
