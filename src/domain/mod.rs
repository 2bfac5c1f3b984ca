//! Domain models and types for the report job.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Report day** ([`ReportDay`]) with the lookup and display date formats
//! - **Composite key** ([`LookupKey`]) addressing one daily aggregate
//! - **Daily aggregate** ([`ReportRecord`]) with its fixed counter set
//! - **Error types** ([`ReportError`], [`StoreError`], [`RenderError`], [`DispatchError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use vscene_report::domain::{LookupKey, ReportDay};
//!
//! # fn example() -> vscene_report::domain::Result<()> {
//! let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
//! let day = ReportDay::previous_to(now)?;
//! let key = LookupKey::new(42, &day);
//! assert_eq!(key.date, "2024-03-14");
//! # Ok(())
//! # }
//! ```

pub mod dates;
pub mod errors;
pub mod key;
pub mod record;
pub mod result;

pub use dates::ReportDay;
pub use errors::{DispatchError, RenderError, ReportError, StoreError};
pub use key::LookupKey;
pub use record::{ReportRecord, COUNTER_COUNT, COUNTER_NAMES};
pub use result::Result;
