//! Configuration loader reading the process environment
//!
//! All values come from environment variables. [`load_config_from`] accepts
//! any lookup function so resolution can be exercised without touching the
//! real environment.

use super::schema::{split_recipients, LogFormat, LoggingConfig, ReportConfig, DEFAULT_TEMPLATE_PATH};
use crate::domain::errors::ReportError;
use crate::domain::result::Result;
use std::path::PathBuf;

/// Organisation identifier
pub const ENV_ORG_ID: &str = "ORG_ID";
/// DynamoDB table name
pub const ENV_TABLE: &str = "DYNAMODB_TABLE";
/// Comma-separated recipient list
pub const ENV_RECIPIENTS: &str = "RECIPIENTS";
/// Sender address
pub const ENV_SENDER: &str = "SENDER";
/// Template artifact path (optional)
pub const ENV_TEMPLATE_PATH: &str = "TEMPLATE_PATH";
/// Log level (optional)
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Log format (optional)
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Loads the report configuration from the process environment
///
/// # Errors
///
/// Returns a configuration error if `ORG_ID` is not an integer or if a
/// required value is missing or empty.
///
/// # Examples
///
/// ```no_run
/// use vscene_report::config::load_config;
///
/// let config = load_config().expect("invalid environment");
/// println!("Reporting for organisation {}", config.organisation_id);
/// ```
pub fn load_config() -> Result<ReportConfig> {
    load_config_from(|name| std::env::var(name).ok())
}

/// Loads the report configuration through an arbitrary variable lookup
pub fn load_config_from<F>(lookup: F) -> Result<ReportConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let raw_org = lookup(ENV_ORG_ID).unwrap_or_default();
    let organisation_id: i64 = raw_org.parse().map_err(|e| {
        ReportError::Configuration(format!(
            "{ENV_ORG_ID} must be an integer, got '{raw_org}': {e}"
        ))
    })?;

    let recipients = lookup(ENV_RECIPIENTS)
        .map(|raw| split_recipients(&raw))
        .unwrap_or_default();

    let template_path = lookup(ENV_TEMPLATE_PATH)
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_TEMPLATE_PATH.to_string());

    let config = ReportConfig {
        organisation_id,
        table_name: lookup(ENV_TABLE).unwrap_or_default(),
        sender: lookup(ENV_SENDER).unwrap_or_default(),
        recipients,
        template_path: PathBuf::from(template_path),
        logging: load_logging_config_from(&lookup)?,
    };

    config.validate().map_err(|e| {
        ReportError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads only the logging section from the process environment
///
/// Logging is initialised before the full configuration is resolved so that
/// configuration failures are logged too.
pub fn load_logging_config() -> Result<LoggingConfig> {
    load_logging_config_from(&|name: &str| std::env::var(name).ok())
}

fn load_logging_config_from<F>(lookup: &F) -> Result<LoggingConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut logging = LoggingConfig::default();

    if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
        logging.level = level.to_lowercase();
    }
    if let Some(format) = lookup(ENV_LOG_FORMAT).filter(|v| !v.is_empty()) {
        logging.format = format
            .parse::<LogFormat>()
            .map_err(ReportError::Configuration)?;
    }

    logging.validate().map_err(ReportError::Configuration)?;
    Ok(logging)
}
