use almanac_test::calendar::{Zone, is_weekend};
use almanac_test::fixtures::{at, sample_zones};
use chrono_tz::Tz;

#[test]
fn saturday_and_sunday_are_weekend() {
    for zone in sample_zones() {
        assert!(is_weekend(&at(zone, 2024, 6, 1, 12, 0, 0)), "Saturday in {zone}");
        assert!(is_weekend(&at(zone, 2024, 6, 2, 12, 0, 0)), "Sunday in {zone}");
        assert!(!is_weekend(&at(zone, 2024, 6, 5, 12, 0, 0)), "Wednesday in {zone}");
        assert!(!is_weekend(&at(zone, 2024, 6, 3, 0, 0, 0)), "Monday in {zone}");
    }
}

#[test]
fn weekend_follows_the_timestamps_own_zone() {
    // Friday 23:00 in New York is already Saturday in UTC
    let new_york = at(Tz::America__New_York.into(), 2024, 6, 7, 23, 0, 0);
    let utc = new_york.with_timezone(&Zone::UTC);

    assert!(!is_weekend(&new_york));
    assert!(is_weekend(&utc));
}
