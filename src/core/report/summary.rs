//! Run summary and failure reporting

use crate::domain::ReportError;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// States a run moves through, strictly in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunState {
    ConfigResolved,
    RecordFetched,
    Rendered,
    Dispatched,
}

/// The stage that was executing when a run aborted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Fetch,
    Render,
    Dispatch,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetch => "fetch",
            Stage::Render => "render",
            Stage::Dispatch => "dispatch",
        };
        f.write_str(name)
    }
}

/// Terminal failure of a run: the stage that failed and why
///
/// No email has been sent when this is returned.
#[derive(Debug, Error)]
#[error("Report run aborted during {stage} (reached {reached:?}): {error}")]
pub struct PipelineFailure {
    pub stage: Stage,
    pub reached: RunState,
    #[source]
    pub error: ReportError,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub organisation_id: i64,
    pub lookup_date: String,
    pub display_date: String,
    pub state: RunState,
    pub recipients: usize,
    pub rendered_bytes: usize,
    pub no_activity: bool,
    pub duration_ms: u64,
}

impl RunSummary {
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreError;

    #[test]
    fn test_failure_display_names_stage() {
        let failure = PipelineFailure {
            stage: Stage::Fetch,
            reached: RunState::ConfigResolved,
            error: StoreError::RequestFailed("timeout".to_string()).into(),
        };
        let text = failure.to_string();
        assert!(text.contains("fetch"));
        assert!(text.contains("ConfigResolved"));
        assert!(text.contains("timeout"));
    }

    #[test]
    fn test_failure_exposes_source() {
        use std::error::Error;
        let failure = PipelineFailure {
            stage: Stage::Render,
            reached: RunState::RecordFetched,
            error: ReportError::Io("gone".to_string()),
        };
        assert!(failure.source().is_some());
    }
}
