//! Day and month offsets, and whole-day differences.

use chrono::{Datelike, Days, NaiveDate, TimeDelta};

use crate::error::{CalendarError, CalendarResult};
use crate::zone::{Timestamp, resolve_local};

/// ## Summary
/// Returns the signed number of whole days from `start` to `end`.
///
/// Counts elapsed 24-hour periods and truncates toward zero; calendar-day
/// boundaries are not considered, so 23 hours spanning midnight is zero days.
/// Negative when `end` is before `start`.
#[must_use]
pub fn days_between(start: &Timestamp, end: &Timestamp) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// ## Summary
/// Shifts `timestamp` by `days` calendar days, keeping its wall-clock time.
///
/// Month and year boundaries roll over. Across a DST change the wall-clock
/// time is kept and the offset follows the zone's rules, so the elapsed time
/// may be 23 or 25 hours.
///
/// ## Errors
///
/// Returns `CalendarError::OutOfRange` if the result is not representable.
pub fn add_days(timestamp: &Timestamp, days: i64) -> CalendarResult<Timestamp> {
    let local = timestamp.naive_local();

    TimeDelta::try_days(days)
        .and_then(|delta| local.checked_add_signed(delta))
        .and_then(|shifted| resolve_local(&timestamp.timezone(), &shifted))
        .ok_or_else(|| CalendarError::OutOfRange(format!("{timestamp} + {days} days")))
}

/// ## Summary
/// Shifts `timestamp` by `months` calendar months, keeping its wall-clock time.
///
/// The day of month is kept. When the target month is shorter, the excess days
/// roll into the following month: January 31 plus one month is March 3
/// (March 2 in a leap year).
///
/// ## Errors
///
/// Returns `CalendarError::OutOfRange` if the result is not representable.
pub fn add_months(timestamp: &Timestamp, months: i64) -> CalendarResult<Timestamp> {
    let local = timestamp.naive_local();
    let out_of_range = || CalendarError::OutOfRange(format!("{timestamp} + {months} months"));

    let date = shift_months(local.date(), months).ok_or_else(out_of_range)?;

    resolve_local(&timestamp.timezone(), &date.and_time(local.time())).ok_or_else(out_of_range)
}

/// Moves `date` by whole months, normalizing day-of-month overflow forward.
fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let total = (i64::from(date.year()) * 12 + i64::from(date.month0())).checked_add(months)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;

    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(date.day0())))
}
