//! Item decoding
//!
//! Maps a DynamoDB item onto [`ReportRecord`] by attribute name. Decoding is
//! total: an absent item, an absent attribute, a non-numeric attribute or a
//! number that is not a non-negative integer all produce zero. Unknown
//! attributes are ignored.

use crate::domain::{LookupKey, ReportRecord, COUNTER_NAMES};
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// Decodes an optional item into a record for `key`
pub fn decode_report(
    key: &LookupKey,
    item: Option<&HashMap<String, AttributeValue>>,
) -> ReportRecord {
    let mut record = ReportRecord::empty(key.organisation, key.date.clone());

    let Some(item) = item else {
        tracing::info!(key = %key, "No aggregate stored, reporting zero activity");
        return record;
    };

    for name in COUNTER_NAMES {
        let value = item.get(name).map_or(0, |attr| counter_value(name, attr));
        if let Some(slot) = record.counter_mut(name) {
            *slot = value;
        }
    }

    record
}

fn counter_value(name: &str, attr: &AttributeValue) -> u64 {
    match attr.as_n() {
        Ok(n) => n.parse().unwrap_or_else(|_| {
            tracing::warn!(attribute = name, value = %n, "Counter is not a non-negative integer, using 0");
            0
        }),
        Err(_) => {
            tracing::warn!(attribute = name, "Counter is not a number attribute, using 0");
            0
        }
    }
}
