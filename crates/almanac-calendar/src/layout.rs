//! Rendering timestamps to text and reading them back.
//!
//! Layouts use strftime-style specifiers (`%Y-%m-%d %H:%M:%S`). A `%` sequence
//! that chrono does not understand is kept as literal text instead of making the
//! whole layout unusable, so formatting never fails.

use std::fmt::{self, Write as _};

use chrono::format::{self, Item, ParseResult, Parsed, StrftimeItems};
use chrono::{DateTime, TimeDelta, TimeZone};

use crate::error::{CalendarError, CalendarResult};
use crate::zone::{Timestamp, Zone, resolve_local};

/// Longest specifier chrono accepts, e.g. `%:::z`.
const MAX_SPECIFIER_LEN: usize = 5;

/// Textual pattern describing how a timestamp renders to and parses from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout<'a> {
    pattern: &'a str,
}

impl<'a> Layout<'a> {
    /// `2024-06-01T12:00:00+00:00`
    pub const RFC3339: Layout<'static> = Layout::new("%Y-%m-%dT%H:%M:%S%:z");
    /// `2024-06-01`
    pub const DATE: Layout<'static> = Layout::new("%Y-%m-%d");
    /// `2024-06-01 12:00:00`
    pub const DATE_TIME: Layout<'static> = Layout::new("%Y-%m-%d %H:%M:%S");

    #[must_use]
    pub const fn new(pattern: &'a str) -> Self {
        Self { pattern }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.pattern
    }

    /// ## Summary
    /// Splits the pattern into chrono format items.
    ///
    /// Recognised specifiers become their chrono items. Everything else,
    /// including unknown `%` sequences, is kept as literal text.
    fn items(self) -> Vec<Item<'a>> {
        let pattern = self.pattern;
        let mut items = Vec::new();
        let mut literal_start = 0;
        let mut cursor = 0;

        while let Some(found) = pattern[cursor..].find('%') {
            let start = cursor + found;
            if let Some((end, specifier)) = specifier_at(pattern, start) {
                if literal_start < start {
                    items.push(Item::Literal(&pattern[literal_start..start]));
                }
                items.extend(specifier);
                literal_start = end;
                cursor = end;
            } else {
                cursor = start + 1;
            }
        }

        if literal_start < pattern.len() {
            items.push(Item::Literal(&pattern[literal_start..]));
        }

        items
    }
}

impl<'a> From<&'a str> for Layout<'a> {
    fn from(pattern: &'a str) -> Self {
        Self::new(pattern)
    }
}

impl<'a> From<&'a String> for Layout<'a> {
    fn from(pattern: &'a String) -> Self {
        Self::new(pattern.as_str())
    }
}

impl fmt::Display for Layout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern)
    }
}

/// Finds the shortest valid specifier starting at the `%` at `start`.
///
/// Returns the end offset and the items it expands to (`%D` expands to
/// several), or `None` if no prefix is a valid specifier.
fn specifier_at(pattern: &str, start: usize) -> Option<(usize, Vec<Item<'_>>)> {
    (2..=MAX_SPECIFIER_LEN).find_map(|len| {
        let end = start + len;
        let candidate = pattern.get(start..end)?;
        let items: Vec<Item<'_>> = StrftimeItems::new(candidate).collect();
        let valid = !items.is_empty() && !items.iter().any(|item| matches!(item, Item::Error));
        valid.then_some((end, items))
    })
}

/// ## Summary
/// Renders `timestamp` according to `layout`.
///
/// Every layout is accepted: unrecognised specifiers appear verbatim in the
/// output.
#[must_use]
pub fn format_date<'a>(timestamp: &Timestamp, layout: impl Into<Layout<'a>>) -> String {
    let layout = layout.into();
    let items = layout.items();

    let mut rendered = String::new();
    if let Err(e) = write!(rendered, "{}", timestamp.format_with_items(items.iter())) {
        tracing::warn!(error = %e, %layout, "Layout could not be fully rendered");
    }
    rendered
}

/// ## Summary
/// Parses `text` according to `layout`.
///
/// Fields the layout does not mention take their zero value: year 0, January,
/// the 1st, and 00 for hour, minute and second. So `"12:30"` parsed with
/// `%H:%M` is 12:30 on January 1st of year 0, and `"2024-06-01 15"` parsed
/// with `%Y-%m-%d %H` is 15:00. Text carrying a numeric offset yields a
/// timestamp in that fixed offset (`UTC` for a zero offset); otherwise the
/// result is in `UTC`.
///
/// ## Errors
///
/// Returns `CalendarError::Parse` when the text does not match the layout:
/// missing or extra characters, out-of-range fields, or fields that
/// contradict each other (such as a weekday that does not fall on the date).
/// Returns `CalendarError::OutOfRange` if the instant is not representable.
pub fn parse_date<'a>(text: &str, layout: impl Into<Layout<'a>>) -> CalendarResult<Timestamp> {
    parse_with_zone(text, layout.into(), Zone::UTC)
}

/// ## Summary
/// Like [`parse_date`], but text without an offset is read as wall-clock time
/// in `zone`.
///
/// Wall-clock times skipped or repeated by DST are resolved with the same
/// policy as day arithmetic: repeated times take the earlier instant, skipped
/// times move forward past the gap.
///
/// ## Errors
///
/// Returns `CalendarError::Parse` when the text does not match the layout, or
/// `CalendarError::OutOfRange` if the instant is not representable.
pub fn parse_date_in<'a>(
    text: &str,
    layout: impl Into<Layout<'a>>,
    zone: &Zone,
) -> CalendarResult<Timestamp> {
    parse_with_zone(text, layout.into(), *zone)
}

/// ## Summary
/// Parses an RFC 3339 timestamp such as `2024-06-01T12:00:00Z` or
/// `2024-06-01T12:00:00.250+05:30`.
///
/// The result keeps the written offset; `Z` and `+00:00` yield `UTC`.
///
/// ## Errors
///
/// Returns `CalendarError::Parse` if the text is not valid RFC 3339.
pub fn parse_rfc3339(text: &str) -> CalendarResult<Timestamp> {
    let parsed = DateTime::parse_from_rfc3339(text).map_err(|source| CalendarError::Parse {
        text: text.to_string(),
        layout: Layout::RFC3339.as_str().to_string(),
        source,
    })?;

    let offset = *parsed.offset();
    let zone = if offset.local_minus_utc() == 0 {
        Zone::UTC
    } else {
        Zone::Fixed(offset)
    };
    Ok(parsed.with_timezone(&zone))
}

/// Fills the fields a layout left out: year 0, January, the 1st, midnight.
///
/// Layouts built on ordinal days or week numbers keep their own date fields.
/// A Unix timestamp (`%s`) carries the whole instant and is left alone.
fn fill_missing_fields(parsed: &mut Parsed) -> ParseResult<()> {
    if parsed.timestamp().is_some() {
        return Ok(());
    }

    let has_year = parsed.year().is_some()
        || parsed.year_div_100().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some()
        || parsed.isoyear_div_100().is_some()
        || parsed.isoyear_mod_100().is_some();
    if !has_year {
        parsed.set_year(0)?;
    }

    let week_or_ordinal = parsed.ordinal().is_some()
        || parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some();
    if !week_or_ordinal {
        if parsed.month().is_none() {
            parsed.set_month(1)?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1)?;
        }
    }

    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        // %I without %p
        (None, Some(_)) => parsed.set_ampm(false)?,
        // %p without %I
        (Some(_), None) => parsed.set_hour12(12)?,
        (Some(_), Some(_)) => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    if parsed.second().is_none() {
        parsed.set_second(0)?;
    }

    Ok(())
}

fn parse_with_zone(text: &str, layout: Layout<'_>, zone: Zone) -> CalendarResult<Timestamp> {
    let parse_error = |source| CalendarError::Parse {
        text: text.to_string(),
        layout: layout.as_str().to_string(),
        source,
    };
    let out_of_range = || CalendarError::OutOfRange(format!("{text:?} in {zone}"));

    let mut parsed = Parsed::new();
    format::parse(&mut parsed, text, layout.items().iter()).map_err(parse_error)?;
    fill_missing_fields(&mut parsed).map_err(parse_error)?;

    if let Some(seconds) = parsed.timestamp() {
        let utc = DateTime::from_timestamp(seconds, parsed.nanosecond().unwrap_or(0))
            .ok_or_else(out_of_range)?;
        return Ok(utc.with_timezone(&Zone::UTC));
    }

    let date = parsed.to_naive_date().map_err(parse_error)?;
    let time = parsed.to_naive_time().map_err(parse_error)?;
    let local = date.and_time(time);

    if let Ok(offset) = parsed.to_fixed_offset() {
        let utc = local
            .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
            .ok_or_else(out_of_range)?;
        let zone = if offset.local_minus_utc() == 0 {
            Zone::UTC
        } else {
            Zone::Fixed(offset)
        };
        return Ok(zone.from_utc_datetime(&utc));
    }

    resolve_local(&zone, &local).ok_or_else(out_of_range)
}
