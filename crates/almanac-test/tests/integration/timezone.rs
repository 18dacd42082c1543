use almanac_test::calendar::{
    CalendarError, TimeZoneResolver, Zone, ZoneDatabase, convert_timezone, parse_timezone,
};
use almanac_test::fixtures::sample_timestamps;
use chrono::Offset;
use chrono_tz::Tz;

#[test]
fn unknown_zone_is_rejected() {
    assert!(matches!(
        parse_timezone("Not/AZone"),
        Err(CalendarError::UnknownTimezone(name)) if name == "Not/AZone"
    ));
}

#[test_log::test]
fn converting_to_utc_keeps_the_instant() {
    for ts in sample_timestamps() {
        let utc = convert_timezone(&ts, "UTC").expect("UTC resolves");

        assert_eq!(utc, ts);
        assert_eq!(utc.timestamp(), ts.timestamp());
        assert_eq!(utc.offset().fix().local_minus_utc(), 0);
        assert_eq!(utc.timezone(), Zone::UTC);
    }
}

#[test_log::test]
fn windows_names_resolve_to_iana_zones() {
    assert_eq!(
        parse_timezone("Eastern Standard Time").unwrap(),
        Zone::Named(Tz::America__New_York)
    );
}

struct FixedList;

impl ZoneDatabase for FixedList {
    fn lookup(&self, name: &str) -> Option<Tz> {
        (name == "office").then_some(Tz::Europe__Berlin)
    }
}

#[test]
fn injected_database_replaces_the_global_one() {
    let resolver = TimeZoneResolver::with_database(FixedList);

    assert_eq!(resolver.resolve("office").unwrap(), Zone::Named(Tz::Europe__Berlin));
    assert!(matches!(
        resolver.resolve("UTC"),
        Err(CalendarError::UnknownTimezone(_))
    ));

    let ts = sample_timestamps()[5];
    let converted = resolver.convert(&ts, "office").unwrap();
    assert_eq!(converted, ts);
    assert_eq!(converted.timezone(), Zone::Named(Tz::Europe__Berlin));
}
