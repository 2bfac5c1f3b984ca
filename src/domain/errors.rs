//! Domain error types
//!
//! This module defines the error hierarchy for the report job.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main report error type
///
/// This is the primary error type used throughout the job. Every variant is
/// fatal for the current invocation: nothing is retried or recovered locally.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors (dates, keys)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Metrics store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Template rendering errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Email dispatch errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Metrics store errors
///
/// Raised when the point read cannot be completed. A missing item is not an
/// error; it decodes to an all-zero record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configured table does not exist
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Transport, permission or service failure
    #[error("Lookup request failed: {0}")]
    RequestFailed(String),

    /// The composite key could not be built
    #[error("Invalid lookup key: {0}")]
    InvalidKey(String),
}

/// Template rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template artifact missing or unreadable
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Template failed to parse
    #[error("Template syntax error: {0}")]
    TemplateSyntax(String),

    /// Template execution failed (e.g. an unknown value name)
    #[error("Template execution failed: {0}")]
    Execution(String),
}

/// Email dispatch errors
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The message could not be assembled
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// Sending rate exceeded
    #[error("Throttled by mail service: {0}")]
    Throttled(String),

    /// The mail service refused the message
    #[error("Message rejected: {0}")]
    Rejected(String),

    /// Any other send failure
    #[error("Send failed: {0}")]
    SendFailed(String),
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Io(format!("JSON error: {err}"))
    }
}
