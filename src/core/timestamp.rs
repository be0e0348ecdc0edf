//! Timestamp formatting utilities
//!
//! Log lines carry a second-precision UTC timestamp in the form
//! `YYYY-MM-DD HH:MM:SS`. No timezone conversion is ever applied.

use chrono::{DateTime, SubsecRound, Utc};

/// strftime pattern used for every log line
pub const TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Format a `DateTime<Utc>`, truncating to whole seconds
///
/// # Examples
///
/// ```
/// use leveled_logger::core::timestamp::format_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(format_timestamp(&at), "2025-01-08 10:30:45");
/// ```
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Utc>) -> String {
    datetime.trunc_subsecs(0).format(TIMESTAMP_PATTERN).to_string()
}

/// Current wall-clock time in UTC, e.g. `2025-01-08 10:30:45`
#[must_use]
pub fn current_utc_timestamp() -> String {
    format_timestamp(&Utc::now())
}
