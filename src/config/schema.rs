//! Configuration schema types
//!
//! This module defines the configuration structure for the report job.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Separator between recipient addresses in `RECIPIENTS`
pub const RECIPIENT_SEPARATOR: char = ',';

/// Default location of the HTML template artifact
pub const DEFAULT_TEMPLATE_PATH: &str = "email.html";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human-readable lines
    Text,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            other => Err(format!(
                "Invalid log format '{other}'. Must be one of: json, text"
            )),
        }
    }
}

/// Main report configuration
///
/// Resolved once at process start and shared read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Organisation whose daily report is sent
    pub organisation_id: i64,

    /// DynamoDB table holding the daily aggregates
    pub table_name: String,

    /// Sender address
    pub sender: String,

    /// Recipients, in configured order
    pub recipients: Vec<String>,

    /// Path of the HTML template artifact
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ReportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns every violated rule, joined, if any value is invalid
    pub fn validate(&self) -> Result<(), String> {
        let mut problems = Vec::new();

        if self.table_name.is_empty() {
            problems.push("DYNAMODB_TABLE must not be empty".to_string());
        }
        if self.sender.is_empty() {
            problems.push("SENDER must not be empty".to_string());
        }
        if self.recipients.is_empty() || self.recipients.iter().all(|r| r.is_empty()) {
            problems.push("RECIPIENTS must contain at least one address".to_string());
        }
        if self.template_path.as_os_str().is_empty() {
            problems.push("TEMPLATE_PATH must not be empty".to_string());
        }
        if let Err(e) = self.logging.validate() {
            problems.push(e);
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }
}

/// Splits the raw recipient list
///
/// Addresses are kept verbatim: no trimming, deduplication or validation.
pub fn split_recipients(raw: &str) -> Vec<String> {
    raw.split(RECIPIENT_SEPARATOR).map(str::to_string).collect()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid LOG_LEVEL '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_template_path() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ReportConfig {
        ReportConfig {
            organisation_id: 42,
            table_name: "vscene-daily".to_string(),
            sender: "reports@example.com".to_string(),
            recipients: vec!["a@x.com".to_string(), "b@y.com".to_string()],
            template_path: default_template_path(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_empty_fields_are_all_reported() {
        let mut config = valid_config();
        config.table_name.clear();
        config.sender.clear();
        config.recipients = vec![String::new()];

        let err = config.validate().unwrap_err();
        assert!(err.contains("DYNAMODB_TABLE"));
        assert!(err.contains("SENDER"));
        assert!(err.contains("RECIPIENTS"));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = valid_config();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().unwrap_err().contains("LOG_LEVEL"));
    }

    #[test]
    fn test_split_recipients_keeps_order_and_duplicates() {
        assert_eq!(
            split_recipients("a@x.com,b@y.com,a@x.com"),
            vec!["a@x.com", "b@y.com", "a@x.com"]
        );
    }

    #[test]
    fn test_split_recipients_does_not_trim() {
        assert_eq!(split_recipients("a@x.com, b@y.com"), vec!["a@x.com", " b@y.com"]);
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
