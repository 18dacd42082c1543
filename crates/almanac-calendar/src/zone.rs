//! Timezone context carried by every timestamp.
//!
//! A [`Zone`] is either a named IANA zone, whose offset follows DST rules, or a
//! fixed UTC offset such as the one written in `2024-06-01T12:00:00+05:30`.

use std::fmt;

use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone,
};
use chrono_tz::{Tz, TzOffset};

/// An instant together with the zone its calendar fields are expressed in.
pub type Timestamp = DateTime<Zone>;

/// Timezone of a [`Timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Named zone from the IANA database.
    Named(Tz),
    /// Constant offset from UTC.
    Fixed(FixedOffset),
}

impl Zone {
    /// Coordinated Universal Time.
    pub const UTC: Self = Self::Named(Tz::UTC);

    /// ## Summary
    /// Returns the IANA zone, if this is a named zone.
    #[must_use]
    pub const fn as_named(&self) -> Option<Tz> {
        match self {
            Self::Named(tz) => Some(*tz),
            Self::Fixed(_) => None,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(tz) => f.write_str(tz.name()),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl From<Tz> for Zone {
    fn from(tz: Tz) -> Self {
        Self::Named(tz)
    }
}

impl From<FixedOffset> for Zone {
    fn from(offset: FixedOffset) -> Self {
        Self::Fixed(offset)
    }
}

/// Offset in force at a particular instant of a [`Zone`].
///
/// Renders as the zone abbreviation (`EST`, `CEST`) for named zones and as
/// `+HH:MM` for fixed ones.
#[derive(Debug, Clone, Copy)]
pub enum ZoneOffset {
    Named(TzOffset),
    Fixed(FixedOffset),
}

impl Offset for ZoneOffset {
    fn fix(&self) -> FixedOffset {
        match self {
            Self::Named(offset) => offset.fix(),
            Self::Fixed(offset) => *offset,
        }
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(offset) => fmt::Display::fmt(offset, f),
            Self::Fixed(offset) => fmt::Display::fmt(offset, f),
        }
    }
}

impl TimeZone for Zone {
    type Offset = ZoneOffset;

    fn from_offset(offset: &ZoneOffset) -> Self {
        match offset {
            ZoneOffset::Named(offset) => Self::Named(<Tz as TimeZone>::from_offset(offset)),
            ZoneOffset::Fixed(offset) => Self::Fixed(*offset),
        }
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<ZoneOffset> {
        match self {
            Self::Named(tz) => tz.offset_from_local_date(local).map(ZoneOffset::Named),
            Self::Fixed(offset) => LocalResult::Single(ZoneOffset::Fixed(*offset)),
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<ZoneOffset> {
        match self {
            Self::Named(tz) => tz.offset_from_local_datetime(local).map(ZoneOffset::Named),
            Self::Fixed(offset) => LocalResult::Single(ZoneOffset::Fixed(*offset)),
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> ZoneOffset {
        match self {
            Self::Named(tz) => ZoneOffset::Named(tz.offset_from_utc_date(utc)),
            Self::Fixed(offset) => ZoneOffset::Fixed(*offset),
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> ZoneOffset {
        match self {
            Self::Named(tz) => ZoneOffset::Named(tz.offset_from_utc_datetime(utc)),
            Self::Fixed(offset) => ZoneOffset::Fixed(*offset),
        }
    }
}

/// ## Summary
/// Maps a wall-clock time in `zone` to an instant.
///
/// - Unambiguous times map directly.
/// - Times repeated by a DST fold take the earlier instant.
/// - Times skipped by a DST gap are moved forward by the length of the gap,
///   so 02:30 on a spring-forward night in New York becomes 03:30 EDT.
///
/// Returns `None` when the instant falls outside chrono's representable range.
#[must_use]
pub fn resolve_local(zone: &Zone, local: &NaiveDateTime) -> Option<Timestamp> {
    match zone.from_local_datetime(local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _latest) => {
            tracing::trace!(%local, %zone, "Ambiguous local time, taking the earlier instant");
            Some(earliest)
        }
        LocalResult::None => {
            // The offset a day earlier is the one in force before the gap.
            let day_before = local.checked_sub_signed(TimeDelta::days(1))?;
            let before = zone.offset_from_utc_datetime(&day_before).fix();
            let utc = local
                .checked_sub_signed(TimeDelta::seconds(i64::from(before.local_minus_utc())))?;
            tracing::trace!(%local, %zone, "Local time falls in a DST gap, shifting forward");
            Some(zone.from_utc_datetime(&utc))
        }
    }
}
