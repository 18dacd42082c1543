//! Next occurrence of a simple recurring interval ("3 day", "2 weeks", "1 month").

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::arithmetic::{add_days, add_months};
use crate::error::{CalendarError, CalendarResult};
use crate::weekday::DAYS_PER_WEEK;
use crate::zone::Timestamp;

/// Unit of a recurrence interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    Day,
    Week,
    Month,
}

/// Recognised unit suffixes, checked against the end of the lower-cased text.
const UNIT_SUFFIXES: &[(&str, IntervalUnit)] = &[
    ("days", IntervalUnit::Day),
    ("day", IntervalUnit::Day),
    ("weeks", IntervalUnit::Week),
    ("week", IntervalUnit::Week),
    ("months", IntervalUnit::Month),
    ("month", IntervalUnit::Month),
];

impl IntervalUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    fn from_suffix(text: &str) -> Option<Self> {
        UNIT_SUFFIXES
            .iter()
            .find(|(suffix, _)| text.ends_with(suffix))
            .map(|&(_, unit)| unit)
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[expect(
    clippy::expect_used,
    reason = "The pattern is a string literal and always compiles"
)]
fn first_number_pattern() -> Regex {
    Regex::new(r"\d+").expect("digit pattern compiles")
}

static FIRST_NUMBER: LazyLock<Regex> = LazyLock::new(first_number_pattern);

/// First run of ASCII digits in `text`, if it fits in an `i64`.
fn extract_quantity(text: &str) -> Option<i64> {
    FIRST_NUMBER
        .find(text)
        .and_then(|digits| digits.as_str().parse().ok())
}

/// A recurrence step: `quantity` repetitions of `unit`.
///
/// Parsed quantities are never negative; a leading `-` is not part of the
/// digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalSpec {
    pub quantity: i64,
    pub unit: IntervalUnit,
}

impl IntervalSpec {
    #[must_use]
    pub const fn new(quantity: i64, unit: IntervalUnit) -> Self {
        Self { quantity, unit }
    }

    /// ## Summary
    /// Parses free-form interval text such as `"3 week"`, `"2Days"` or `"1 month"`.
    ///
    /// The text is trimmed and lower-cased, then classified by its unit suffix
    /// (`day`, `week`, `month`, singular or plural). The quantity is the first
    /// run of digits anywhere in the text, so `"3week"` and `"every 3 weeks"`
    /// both mean three weeks, and `"3 day 5 week"` also means three weeks.
    /// The unit has to end the text: `"week3"` is rejected.
    ///
    /// ## Errors
    ///
    /// - `CalendarError::InvalidInterval` if no unit suffix matches. The suffix
    ///   is checked first, so `"fortnight"` fails here even without a number.
    /// - `CalendarError::NumberExtraction` if there are no digits, or the
    ///   digits do not fit in an `i64`.
    ///
    /// Quantities too large for the calendar are accepted here and rejected
    /// by [`IntervalSpec::advance`].
    pub fn parse(text: &str) -> CalendarResult<Self> {
        let normalized = text.trim().to_lowercase();

        let unit = IntervalUnit::from_suffix(&normalized)
            .ok_or_else(|| CalendarError::InvalidInterval(text.to_string()))?;

        let quantity = extract_quantity(&normalized)
            .ok_or_else(|| CalendarError::NumberExtraction(text.to_string()))?;

        tracing::debug!(text, quantity, %unit, "Parsed recurrence interval");

        Ok(Self { quantity, unit })
    }

    /// ## Summary
    /// Applies this interval once to `start`.
    ///
    /// Days and weeks use [`add_days`] (a week is seven days); months use
    /// [`add_months`], including its roll-forward policy for short months.
    ///
    /// ## Errors
    ///
    /// Returns `CalendarError::OutOfRange` if the result is not representable.
    pub fn advance(&self, start: &Timestamp) -> CalendarResult<Timestamp> {
        match self.unit {
            IntervalUnit::Day => add_days(start, self.quantity),
            IntervalUnit::Week => {
                let days = self
                    .quantity
                    .checked_mul(DAYS_PER_WEEK)
                    .ok_or_else(|| CalendarError::OutOfRange(format!("{start} + {self}")))?;
                add_days(start, days)
            }
            IntervalUnit::Month => add_months(start, self.quantity),
        }
    }
}

impl FromStr for IntervalSpec {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for IntervalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.unit)
    }
}

/// ## Summary
/// Returns the next occurrence of an event starting at `start` and repeating
/// every `interval` (e.g. `"2 week"`).
///
/// ## Errors
///
/// See [`IntervalSpec::parse`] and [`IntervalSpec::advance`].
pub fn recurring_event(start: &Timestamp, interval: &str) -> CalendarResult<Timestamp> {
    IntervalSpec::parse(interval)?.advance(start)
}
