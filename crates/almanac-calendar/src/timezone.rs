//! Timezone resolution and conversion.
//!
//! Uses `chrono-tz` for the IANA database and ICU4X to canonicalize aliases and
//! Windows timezone IDs that `chrono-tz` does not know under that name.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

use crate::error::{CalendarError, CalendarResult};
use crate::zone::{Timestamp, Zone};

/// Read-only source of named timezones.
pub trait ZoneDatabase: Send + Sync {
    /// Looks up a timezone by identifier, returning `None` if it is unknown.
    fn lookup(&self, name: &str) -> Option<Tz>;
}

/// The IANA database compiled into `chrono-tz`, with ICU4X fallback for
/// aliases and Windows timezone IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaZoneDatabase;

impl ZoneDatabase for IanaZoneDatabase {
    fn lookup(&self, name: &str) -> Option<Tz> {
        if let Ok(tz) = Tz::from_str(name) {
            return Some(tz);
        }

        let canonical = canonicalize_zone_name(name)?;
        tracing::debug!(name, canonical = %canonical, "Resolved timezone through ICU canonicalization");
        Tz::from_str(&canonical).ok()
    }
}

/// Maps a non-canonical timezone identifier to its canonical IANA name.
///
/// Handles Windows IDs ("Eastern Standard Time") and IANA aliases
/// ("Europe/Kiev"). Returns `None` when ICU does not recognise the name.
fn canonicalize_zone_name(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return None;
    }

    let windows_parser = WindowsParser::new();
    if let Some(tz) = windows_parser.parse(name, None) {
        let iana_parser = IanaParserExtended::new();
        for entry in iana_parser.iter() {
            if entry.time_zone == tz {
                return Some(entry.canonical.to_string());
            }
        }
    }

    let iana_parser = IanaParserExtended::new();
    let parsed = iana_parser.parse(name);
    if parsed.time_zone == icu::time::TimeZone::UNKNOWN {
        return None;
    }

    Some(parsed.canonical.to_string())
}

/// Resolves timezone identifiers against a [`ZoneDatabase`].
///
/// Holds no mutable state, so a single resolver can be shared freely between
/// threads.
pub struct TimeZoneResolver {
    database: Box<dyn ZoneDatabase>,
}

impl TimeZoneResolver {
    /// Creates a resolver backed by [`IanaZoneDatabase`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_database(IanaZoneDatabase)
    }

    /// Creates a resolver backed by a caller-supplied database.
    #[must_use]
    pub fn with_database(database: impl ZoneDatabase + 'static) -> Self {
        Self {
            database: Box::new(database),
        }
    }

    /// ## Summary
    /// Resolves a timezone identifier to a [`Zone`].
    ///
    /// ## Errors
    ///
    /// Returns `CalendarError::UnknownTimezone` if the identifier is empty or
    /// not known to the database.
    pub fn resolve(&self, name: &str) -> CalendarResult<Zone> {
        self.database
            .lookup(name)
            .map(Zone::Named)
            .ok_or_else(|| CalendarError::UnknownTimezone(name.to_string()))
    }

    /// ## Summary
    /// Re-expresses `timestamp` in the named zone.
    ///
    /// The instant is unchanged; only the calendar fields and offset differ.
    ///
    /// ## Errors
    ///
    /// Returns `CalendarError::UnknownTimezone` if the zone cannot be resolved.
    pub fn convert(&self, timestamp: &Timestamp, name: &str) -> CalendarResult<Timestamp> {
        let zone = self.resolve(name)?;
        Ok(timestamp.with_timezone(&zone))
    }
}

impl Default for TimeZoneResolver {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_RESOLVER: LazyLock<TimeZoneResolver> = LazyLock::new(TimeZoneResolver::new);

/// Process-wide resolver used by [`parse_timezone`] and [`convert_timezone`].
#[must_use]
pub fn default_resolver() -> &'static TimeZoneResolver {
    &DEFAULT_RESOLVER
}

/// ## Summary
/// Resolves a timezone identifier such as `"America/New_York"`.
///
/// ## Errors
///
/// Returns `CalendarError::UnknownTimezone` for unknown, empty or malformed names.
pub fn parse_timezone(name: &str) -> CalendarResult<Zone> {
    default_resolver().resolve(name)
}

/// ## Summary
/// Converts `timestamp` to the named zone, keeping the same instant.
///
/// ## Errors
///
/// Returns `CalendarError::UnknownTimezone` if the zone cannot be resolved.
pub fn convert_timezone(timestamp: &Timestamp, name: &str) -> CalendarResult<Timestamp> {
    default_resolver().convert(timestamp, name)
}
