// Vscene Report - daily usage report mailer
// Copyright (c) 2025 Vscene Report Contributors
// Licensed under the MIT License

use chrono::Utc;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use vscene_report::config::{load_config, load_logging_config};
use vscene_report::core::report::{ReportPipeline, RunSummary};
use vscene_report::logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let logging_config = load_logging_config()?;
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {e}");
        return Err(e.into());
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Vscene Report - daily usage report mailer"
    );

    let config = match load_config() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!(error = %e, "Configuration could not be resolved");
            return Err(e.into());
        }
    };

    tracing::info!(
        organisation = config.organisation_id,
        table = %config.table_name,
        recipients = config.recipients.len(),
        template = %config.template_path.display(),
        "Configuration resolved"
    );

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let pipeline = Arc::new(ReportPipeline::from_aws(config, &aws_config));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let pipeline = Arc::clone(&pipeline);
        async move { handle(&pipeline, event).await }
    }))
    .await
}

/// Runs the report once per scheduled invocation; the payload is ignored
async fn handle(pipeline: &ReportPipeline, event: LambdaEvent<Value>) -> Result<RunSummary, Error> {
    tracing::info!(request_id = %event.context.request_id, "Invocation received");

    pipeline.run(Utc::now()).await.map_err(Error::from)
}
