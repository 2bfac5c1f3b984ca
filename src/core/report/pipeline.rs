//! Report pipeline - orchestrates one daily run
//!
//! `ConfigResolved -> RecordFetched -> Rendered -> Dispatched`, strictly in
//! sequence. Any stage error aborts the run with a [`PipelineFailure`]; since
//! dispatch is the last stage, a failed run never sends an email.

use super::dispatch::EmailDispatcher;
use super::render::ReportRenderer;
use super::summary::{PipelineFailure, RunState, RunSummary, Stage};
use crate::adapters::mail::{Mailer, SesMailer};
use crate::adapters::store::{fetch_report, DynamoDbMetricsStore, MetricsStore};
use crate::config::ReportConfig;
use crate::domain::{ReportDay, ReportError};
use crate::{log_stage_failed, log_stage_start};
use aws_config::SdkConfig;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

/// Report pipeline
pub struct ReportPipeline {
    config: Arc<ReportConfig>,
    store: Arc<dyn MetricsStore>,
    renderer: ReportRenderer,
    dispatcher: EmailDispatcher,
}

impl ReportPipeline {
    /// Create a pipeline over explicit store and mailer implementations
    pub fn new(
        config: Arc<ReportConfig>,
        store: Arc<dyn MetricsStore>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        let renderer = ReportRenderer::new(config.template_path.clone());
        Self {
            config,
            store,
            renderer,
            dispatcher: EmailDispatcher::new(mailer),
        }
    }

    /// Create a pipeline backed by DynamoDB and SES
    pub fn from_aws(config: Arc<ReportConfig>, aws_config: &SdkConfig) -> Self {
        let store = Arc::new(DynamoDbMetricsStore::new(aws_config, &config.table_name));
        let mailer = Arc::new(SesMailer::new(aws_config));
        Self::new(config, store, mailer)
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Execute one run for the day before `now`
    ///
    /// # Errors
    ///
    /// Returns the failed stage and its error. Nothing is retried.
    #[tracing::instrument(
        name = "report_run",
        skip(self),
        fields(organisation = self.config.organisation_id)
    )]
    pub async fn run(&self, now: DateTime<Utc>) -> Result<RunSummary, PipelineFailure> {
        let start_time = Instant::now();
        let organisation_id = self.config.organisation_id;
        let mut state = RunState::ConfigResolved;

        let abort = |stage: Stage, reached: RunState, error: ReportError| {
            log_stage_failed!(stage, organisation_id, &error);
            PipelineFailure {
                stage,
                reached,
                error,
            }
        };

        let day = ReportDay::previous_to(now).map_err(|e| abort(Stage::Fetch, state, e))?;
        let display_date = day.display_date();

        log_stage_start!(Stage::Fetch, organisation_id, day);
        let record = fetch_report(self.store.as_ref(), organisation_id, &day)
            .await
            .map_err(|e| abort(Stage::Fetch, state, e))?;
        state = RunState::RecordFetched;

        log_stage_start!(Stage::Render, organisation_id, day);
        let html = self
            .renderer
            .render(&record, &display_date)
            .map_err(|e| abort(Stage::Render, state, e))?;
        state = RunState::Rendered;

        log_stage_start!(Stage::Dispatch, organisation_id, day);
        self.dispatcher
            .send(&html, &display_date, &self.config)
            .await
            .map_err(|e| abort(Stage::Dispatch, state, e))?;
        state = RunState::Dispatched;

        let summary = RunSummary {
            organisation_id,
            lookup_date: day.lookup_date(),
            display_date,
            state,
            recipients: self.config.recipients.len(),
            rendered_bytes: html.len(),
            no_activity: record.is_empty(),
            duration_ms: 0,
        }
        .with_duration(start_time.elapsed());

        tracing::info!(
            date = %summary.lookup_date,
            recipients = summary.recipients,
            no_activity = summary.no_activity,
            duration_ms = summary.duration_ms,
            "Report dispatched"
        );

        Ok(summary)
    }
}
