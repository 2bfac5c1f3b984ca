//! Result type alias for the report job

use super::errors::ReportError;

/// Result type alias using `ReportError` as the error type.
///
/// # Examples
///
/// ```
/// use vscene_report::domain::result::Result;
/// use vscene_report::domain::errors::ReportError;
///
/// fn failing_function() -> Result<()> {
///     Err(ReportError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ReportError>;
