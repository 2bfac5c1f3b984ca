//! Metrics store client
//!
//! - [`traits`] - the [`MetricsStore`] seam and [`fetch_report`]
//! - [`dynamodb`] - DynamoDB implementation
//! - [`decode`] - zero-filling item decoding

pub mod decode;
pub mod dynamodb;
pub mod traits;

pub use decode::decode_report;
pub use dynamodb::DynamoDbMetricsStore;
pub use traits::{fetch_report, MetricsStore};
