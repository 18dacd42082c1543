//! Weekend and leap-year checks.

use chrono::{Datelike, Weekday};

use crate::zone::Timestamp;

/// ## Summary
/// Returns true if `timestamp` falls on a Saturday or Sunday in its own zone.
#[must_use]
pub fn is_weekend(timestamp: &Timestamp) -> bool {
    matches!(timestamp.weekday(), Weekday::Sat | Weekday::Sun)
}

/// ## Summary
/// Gregorian leap-year rule, applied to every integer year including zero and
/// negative (proleptic) years.
#[must_use]
pub const fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
