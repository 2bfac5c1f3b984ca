//! External system integrations.
//!
//! - [`store`] - DynamoDB point read of the daily aggregate
//! - [`mail`] - Amazon SES email delivery
//!
//! # Design Pattern
//!
//! Each external system sits behind a trait ([`store::MetricsStore`],
//! [`mail::Mailer`]) so the pipeline can run against in-memory doubles in
//! tests. Adapters translate SDK failures into domain errors; no SDK type
//! leaks past this module.
//!
//! ```rust,no_run
//! use vscene_report::adapters::mail::SesMailer;
//! use vscene_report::adapters::store::DynamoDbMetricsStore;
//!
//! # async fn example() {
//! let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//! let store = DynamoDbMetricsStore::new(&aws_config, "vscene-daily");
//! let mailer = SesMailer::new(&aws_config);
//! # }
//! ```

pub mod mail;
pub mod store;
