//! Next-occurrence-of-weekday lookup.
//!
//! Weekday indices count from Sunday: 0 = Sunday through 6 = Saturday.

use chrono::{Datelike, TimeDelta, Weekday};

use crate::arithmetic::add_days;
use crate::error::{CalendarError, CalendarResult};
use crate::zone::Timestamp;

pub const DAYS_PER_WEEK: i64 = 7;

/// ## Summary
/// Converts a Sunday-based index into a [`Weekday`].
///
/// ## Errors
///
/// Returns `CalendarError::InvalidWeekday` for indices outside 0..=6.
pub fn weekday_from_index(index: i64) -> CalendarResult<Weekday> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        _ => Err(CalendarError::InvalidWeekday(index)),
    }
}

/// Sunday-based index of `weekday`.
#[must_use]
pub fn weekday_index(weekday: Weekday) -> i64 {
    i64::from(weekday.num_days_from_sunday())
}

/// ## Summary
/// Returns the first day strictly after `timestamp` whose weekday has the
/// Sunday-based index `target`, at the same wall-clock time.
///
/// ## Errors
///
/// Returns `CalendarError::InvalidWeekday` if `target` is outside 0..=6, or
/// `CalendarError::OutOfRange` if the result is not representable.
pub fn next_weekday(timestamp: &Timestamp, target: i64) -> CalendarResult<Timestamp> {
    next_weekday_of(timestamp, weekday_from_index(target)?)
}

/// ## Summary
/// Returns the first day strictly after `timestamp` falling on `target`, at the
/// same wall-clock time.
///
/// The input day is never returned, even if it already falls on `target`;
/// at most seven days ahead are examined.
///
/// ## Errors
///
/// Returns `CalendarError::OutOfRange` if the result is not representable.
pub fn next_weekday_of(timestamp: &Timestamp, target: Weekday) -> CalendarResult<Timestamp> {
    let today = timestamp.date_naive();

    let offset = (1..=DAYS_PER_WEEK)
        .find(|&offset| {
            today
                .checked_add_signed(TimeDelta::days(offset))
                .is_some_and(|day| day.weekday() == target)
        })
        .ok_or_else(|| CalendarError::OutOfRange(format!("no {target} after {timestamp}")))?;

    add_days(timestamp, offset)
}
