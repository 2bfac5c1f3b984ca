//! Core business logic for the report job.
//!
//! # Workflow
//!
//! 1. **Resolve**: configuration is loaded once at process start
//! 2. **Fetch**: point read of yesterday's aggregate (zero-filled if absent)
//! 3. **Render**: bind the record and display date into the HTML template
//! 4. **Dispatch**: send one email to the configured recipients
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vscene_report::config::load_config;
//! use vscene_report::core::report::ReportPipeline;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Arc::new(load_config()?);
//! let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//! let pipeline = ReportPipeline::from_aws(config, &aws_config);
//!
//! let summary = pipeline.run(chrono::Utc::now()).await?;
//! println!("Sent report for {}", summary.display_date);
//! # Ok(())
//! # }
//! ```

pub mod report;
