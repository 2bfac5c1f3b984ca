//! Report day derivation
//!
//! The job always reports on the UTC calendar day before the invocation
//! instant. That day is rendered two ways: the store's lookup format
//! (`YYYY-MM-DD`) and the human-readable display format (`DD/MM/YYYY`).

use super::errors::ReportError;
use super::result::Result;
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used in the store key
pub const LOOKUP_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format used in the email body and subject
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// The calendar day a report covers
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use vscene_report::domain::ReportDay;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
/// let day = ReportDay::previous_to(now).unwrap();
/// assert_eq!(day.lookup_date(), "2024-03-14");
/// assert_eq!(day.display_date(), "14/03/2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportDay(NaiveDate);

impl ReportDay {
    /// Wraps an explicit calendar day
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the day before `now`, using the UTC day boundary
    ///
    /// # Errors
    ///
    /// Returns a validation error only when `now` is the first representable day.
    pub fn previous_to(now: DateTime<Utc>) -> Result<Self> {
        now.date_naive()
            .checked_sub_days(Days::new(1))
            .map(Self)
            .ok_or_else(|| ReportError::Validation(format!("No calendar day precedes {now}")))
    }

    /// Store key format, `YYYY-MM-DD`
    pub fn lookup_date(&self) -> String {
        self.0.format(LOOKUP_DATE_FORMAT).to_string()
    }

    /// Display format, `DD/MM/YYYY`
    pub fn display_date(&self) -> String {
        self.0.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// Returns the underlying date
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for ReportDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lookup_date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test_case(2024, 3, 15, 0, 0, 0, "2024-03-14", "14/03/2024"; "midnight")]
    #[test_case(2024, 3, 15, 23, 59, 59, "2024-03-14", "14/03/2024"; "end of day")]
    #[test_case(2024, 3, 1, 6, 0, 0, "2024-02-29", "29/02/2024"; "leap day")]
    #[test_case(2025, 1, 1, 12, 0, 0, "2024-12-31", "31/12/2024"; "year boundary")]
    #[allow(clippy::too_many_arguments)]
    fn test_previous_day_formats(
        y: i32,
        mo: u32,
        d: u32,
        h: u32,
        mi: u32,
        s: u32,
        lookup: &str,
        display: &str,
    ) {
        let now = Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap();
        let day = ReportDay::previous_to(now).unwrap();
        assert_eq!(day.lookup_date(), lookup);
        assert_eq!(day.display_date(), display);
    }

    #[test]
    fn test_display_uses_lookup_format() {
        let day = ReportDay::new(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap());
        assert_eq!(day.to_string(), "2024-07-04");
    }

    #[test]
    fn test_previous_to_min_date_fails() {
        let now = NaiveDate::MIN.and_hms_opt(0, 0, 0).unwrap().and_utc();
        assert!(ReportDay::previous_to(now).is_err());
    }
}
