//! Metrics store abstraction
//!
//! The pipeline only needs a single point read. Implementations decode the
//! stored item themselves and never fail on missing data.

use crate::domain::{LookupKey, ReportDay, ReportRecord, Result};
use async_trait::async_trait;

/// Point-read access to the daily aggregates
#[async_trait]
pub trait MetricsStore: Send + Sync {
    /// Fetch the aggregate addressed by `key`
    ///
    /// A missing item, or missing attributes, yield zero-valued counters.
    ///
    /// # Errors
    ///
    /// Returns a store error only when the request itself fails.
    async fn get_report(&self, key: &LookupKey) -> Result<ReportRecord>;
}

/// Builds the lookup key for `organisation_id` and `day` and issues exactly one read
pub async fn fetch_report(
    store: &dyn MetricsStore,
    organisation_id: i64,
    day: &ReportDay,
) -> Result<ReportRecord> {
    let key = LookupKey::new(organisation_id, day);
    tracing::debug!(key = %key, "Fetching daily aggregate");
    store.get_report(&key).await
}
