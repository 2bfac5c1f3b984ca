//! Configuration management for the report job.
//!
//! Configuration is read from environment variables once, at process start,
//! validated, and then shared read-only (typically as `Arc<ReportConfig>`).
//!
//! # Environment Variables
//!
//! | Variable | Required | Meaning |
//! |---|---|---|
//! | `ORG_ID` | yes | Organisation identifier (integer) |
//! | `DYNAMODB_TABLE` | yes | Table holding the daily aggregates |
//! | `RECIPIENTS` | yes | Comma-separated recipient list |
//! | `SENDER` | yes | Sender address |
//! | `TEMPLATE_PATH` | no | HTML template artifact, default `email.html` |
//! | `LOG_LEVEL` | no | trace, debug, info (default), warn, error |
//! | `LOG_FORMAT` | no | json (default) or text |
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vscene_report::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! println!("Table: {}", config.table_name);
//! println!("Recipients: {:?}", config.recipients);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_from, load_logging_config};
pub use schema::{split_recipients, LogFormat, LoggingConfig, ReportConfig};
