//! DynamoDB metrics store
//!
//! One `GetItem` per invocation against the configured table, keyed by
//! `Organisation` (N) and `Date` (S). No caching, no retries beyond what the
//! SDK's own transport does, no pagination.

use super::decode::decode_report;
use super::traits::MetricsStore;
use crate::domain::key::{DATE_ATTRIBUTE, ORGANISATION_ATTRIBUTE};
use crate::domain::{LookupKey, ReportRecord, Result, StoreError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;

/// DynamoDB-backed [`MetricsStore`]
pub struct DynamoDbMetricsStore {
    client: Client,
    table_name: String,
}

impl std::fmt::Debug for DynamoDbMetricsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamoDbMetricsStore")
            .field("table_name", &self.table_name)
            .finish()
    }
}

impl DynamoDbMetricsStore {
    /// Create from a loaded AWS SDK config
    pub fn new(aws_config: &SdkConfig, table_name: impl Into<String>) -> Self {
        Self {
            client: Client::new(aws_config),
            table_name: table_name.into(),
        }
    }

    /// Table this store reads from
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Builds the key attribute map for a lookup
pub fn key_attributes(key: &LookupKey) -> Result<HashMap<String, AttributeValue>> {
    if key.date.is_empty() {
        return Err(StoreError::InvalidKey(format!(
            "empty date for organisation {}",
            key.organisation
        ))
        .into());
    }

    Ok(HashMap::from([
        (
            ORGANISATION_ATTRIBUTE.to_string(),
            AttributeValue::N(key.organisation.to_string()),
        ),
        (
            DATE_ATTRIBUTE.to_string(),
            AttributeValue::S(key.date.clone()),
        ),
    ]))
}

fn map_get_item_error<R>(table: &str, err: SdkError<GetItemError, R>) -> StoreError
where
    R: std::fmt::Debug,
{
    match err.as_service_error() {
        Some(GetItemError::ResourceNotFoundException(_)) => {
            StoreError::TableNotFound(table.to_string())
        }
        _ => StoreError::RequestFailed(DisplayErrorContext(&err).to_string()),
    }
}

#[async_trait]
impl MetricsStore for DynamoDbMetricsStore {
    async fn get_report(&self, key: &LookupKey) -> Result<ReportRecord> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_attributes(key)?))
            .send()
            .await
            .map_err(|e| map_get_item_error(&self.table_name, e))?;

        tracing::debug!(
            table = %self.table_name,
            key = %key,
            found = output.item().is_some(),
            "GetItem completed"
        );

        Ok(decode_report(key, output.item()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_attributes() {
        let key = LookupKey {
            organisation: 42,
            date: "2024-03-14".to_string(),
        };
        let attrs = key_attributes(&key).unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(
            attrs[ORGANISATION_ATTRIBUTE],
            AttributeValue::N("42".to_string())
        );
        assert_eq!(
            attrs[DATE_ATTRIBUTE],
            AttributeValue::S("2024-03-14".to_string())
        );
    }

    #[test]
    fn test_key_attributes_rejects_empty_date() {
        let key = LookupKey {
            organisation: 42,
            date: String::new(),
        };
        assert!(key_attributes(&key).is_err());
    }
}
