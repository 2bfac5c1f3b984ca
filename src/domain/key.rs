//! Composite lookup key

use super::dates::ReportDay;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key attribute holding the organisation identifier
pub const ORGANISATION_ATTRIBUTE: &str = "Organisation";

/// Key attribute holding the lookup date
pub const DATE_ATTRIBUTE: &str = "Date";

/// Composite key addressing one daily aggregate: organisation plus `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupKey {
    #[serde(rename = "Organisation")]
    pub organisation: i64,

    #[serde(rename = "Date")]
    pub date: String,
}

impl LookupKey {
    /// Builds the key for an organisation and report day
    pub fn new(organisation: i64, day: &ReportDay) -> Self {
        Self {
            organisation,
            date: day.lookup_date(),
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organisation, self.date)
    }
}
