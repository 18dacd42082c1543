//! Dispatches CLI commands to the calendar library.

use almanac_calendar::{
    Layout, Timestamp, add_days, add_months, convert_timezone, days_between, format_date,
    is_leap_year, is_weekend, next_weekday, parse_date_in, parse_rfc3339, parse_timezone,
    recurring_event, weekday_index,
};
use chrono::Weekday;

use crate::cli::Command;
use crate::config::CalendarDefaults;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Runs a command and returns the text to print.
///
/// ## Errors
/// Returns an error if an argument cannot be parsed or the calendar operation fails.
#[tracing::instrument(skip(defaults))]
pub fn run(command: &Command, defaults: &CalendarDefaults) -> AppResult<String> {
    let output = match command {
        Command::Format {
            timestamp,
            layout,
            tz,
        } => {
            let mut ts = read_timestamp(timestamp, defaults)?;
            if let Some(tz) = tz {
                ts = convert_timezone(&ts, tz)?;
            }
            let layout = layout.as_deref().unwrap_or(&defaults.layout);
            format_date(&ts, layout)
        }
        Command::Parse { text, layout, tz } => {
            let zone = match tz {
                Some(tz) => parse_timezone(tz)?,
                None => defaults.zone,
            };
            let layout = layout.as_deref().unwrap_or(&defaults.layout);
            render(&parse_date_in(text, layout, &zone)?)
        }
        Command::DaysBetween { start, end } => {
            let start = read_timestamp(start, defaults)?;
            let end = read_timestamp(end, defaults)?;
            days_between(&start, &end).to_string()
        }
        Command::AddDays { timestamp, days } => {
            render(&add_days(&read_timestamp(timestamp, defaults)?, *days)?)
        }
        Command::AddMonths { timestamp, months } => {
            render(&add_months(&read_timestamp(timestamp, defaults)?, *months)?)
        }
        Command::Weekend { timestamp } => {
            is_weekend(&read_timestamp(timestamp, defaults)?).to_string()
        }
        Command::LeapYear { year } => is_leap_year(*year).to_string(),
        Command::Convert { timestamp, zone } => {
            render(&convert_timezone(&read_timestamp(timestamp, defaults)?, zone)?)
        }
        Command::NextWeekday { timestamp, weekday } => {
            let ts = read_timestamp(timestamp, defaults)?;
            render(&next_weekday(&ts, read_weekday(weekday)?)?)
        }
        Command::Recur {
            timestamp,
            interval,
        } => render(&recurring_event(&read_timestamp(timestamp, defaults)?, interval)?),
    };

    Ok(output)
}

/// Reads RFC 3339 first, then the configured layout in the configured zone.
fn read_timestamp(text: &str, defaults: &CalendarDefaults) -> AppResult<Timestamp> {
    if let Ok(ts) = parse_rfc3339(text) {
        return Ok(ts);
    }

    tracing::debug!(text, layout = %defaults.layout, "Not RFC 3339, using default layout");
    Ok(parse_date_in(text, &defaults.layout, &defaults.zone)?)
}

/// Accepts a Sunday-based index or an English weekday name ("mon", "Friday").
///
/// Out-of-range indices are passed through so the calendar layer reports them.
fn read_weekday(text: &str) -> AppResult<i64> {
    if let Ok(index) = text.trim().parse::<i64>() {
        return Ok(index);
    }

    text.trim()
        .parse::<Weekday>()
        .map(weekday_index)
        .map_err(|_e| AppError::InvalidArgument(format!("not a weekday: {text:?}")))
}

fn render(ts: &Timestamp) -> String {
    format_date(ts, Layout::RFC3339)
}
