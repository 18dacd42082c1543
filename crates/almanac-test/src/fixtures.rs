//! Timestamps and zones shared by the integration suites.

use almanac_calendar::zone::resolve_local;
use almanac_calendar::{Timestamp, Zone};
use chrono::{FixedOffset, NaiveDate};
use chrono_tz::Tz;

/// Zones covering both hemispheres, half-hour offsets and fixed offsets.
#[must_use]
pub fn sample_zones() -> Vec<Zone> {
    let mut zones = vec![
        Zone::UTC,
        Zone::Named(Tz::America__New_York),
        Zone::Named(Tz::Europe__Berlin),
        Zone::Named(Tz::Asia__Tokyo),
        Zone::Named(Tz::Asia__Kolkata),
        Zone::Named(Tz::Australia__Sydney),
    ];
    zones.extend(FixedOffset::east_opt(5 * 3600 + 45 * 60).map(Zone::Fixed));
    zones.extend(FixedOffset::west_opt(11 * 3600).map(Zone::Fixed));
    zones
}

/// ## Summary
/// Wall-clock time in `zone`.
///
/// ## Panics
/// Panics if the fields do not form a valid, representable date and time.
#[must_use]
#[expect(clippy::expect_used, reason = "fixture fields are literals")]
pub fn at(
    zone: Zone,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Timestamp {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .and_then(|local| resolve_local(&zone, &local))
        .expect("valid fixture date")
}

/// Midday and late-evening timestamps on dates spread over several centuries,
/// in every sample zone. None of them falls in a DST gap or fold.
#[must_use]
pub fn sample_timestamps() -> Vec<Timestamp> {
    const DATES: &[(i32, u32, u32, u32, u32, u32)] = &[
        (1600, 2, 29, 12, 0, 0),
        (1899, 12, 31, 12, 30, 15),
        (1970, 1, 1, 12, 0, 0),
        (2000, 2, 29, 21, 45, 0),
        (2023, 1, 31, 12, 0, 59),
        (2024, 6, 1, 12, 0, 0),
        (2024, 12, 31, 21, 59, 59),
        (2026, 3, 8, 12, 0, 0),
        (2026, 10, 25, 12, 0, 0),
        (2100, 7, 4, 12, 15, 0),
    ];

    sample_zones()
        .into_iter()
        .flat_map(|zone| {
            DATES
                .iter()
                .map(move |&(year, month, day, hour, minute, second)| {
                    at(zone, year, month, day, hour, minute, second)
                })
        })
        .collect()
}
