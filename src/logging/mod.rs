//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted logs (default)
//! - Configurable log levels, overridable through `RUST_LOG`
//! - Stage event macros used by the report pipeline
//!
//! # Example
//!
//! ```no_run
//! use vscene_report::config::LoggingConfig;
//! use vscene_report::logging::init_logging;
//!
//! init_logging(&LoggingConfig::default()).expect("Failed to initialize logging");
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::init_logging;

/// Log the start of a pipeline stage
///
/// # Example
///
/// ```no_run
/// use vscene_report::log_stage_start;
///
/// log_stage_start!("fetch", 42, "2024-03-14");
/// ```
#[macro_export]
macro_rules! log_stage_start {
    ($stage:expr, $organisation:expr, $date:expr) => {
        tracing::debug!(
            stage = %$stage,
            organisation = $organisation,
            date = %$date,
            "Starting stage"
        );
    };
}

/// Log a failed pipeline stage
///
/// # Example
///
/// ```no_run
/// use vscene_report::log_stage_failed;
/// use vscene_report::domain::ReportError;
///
/// let error = ReportError::Configuration("Invalid config".to_string());
/// log_stage_failed!("render", 42, &error);
/// ```
#[macro_export]
macro_rules! log_stage_failed {
    ($stage:expr, $organisation:expr, $error:expr) => {
        tracing::error!(
            stage = %$stage,
            organisation = $organisation,
            error = %$error,
            "Stage failed, aborting run"
        );
    };
}
