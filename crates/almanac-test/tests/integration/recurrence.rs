use almanac_test::calendar::{
    CalendarError, IntervalSpec, IntervalUnit, add_days, add_months, recurring_event,
};
use almanac_test::fixtures::sample_timestamps;

#[test_log::test]
fn weeks_and_months_match_plain_arithmetic() {
    for ts in sample_timestamps() {
        assert_eq!(
            recurring_event(&ts, "2 week").unwrap(),
            add_days(&ts, 14).unwrap(),
            "{ts}"
        );
        assert_eq!(
            recurring_event(&ts, "1 month").unwrap(),
            add_months(&ts, 1).unwrap(),
            "{ts}"
        );
        assert_eq!(
            recurring_event(&ts, "3 days").unwrap(),
            add_days(&ts, 3).unwrap(),
            "{ts}"
        );
    }
}

#[test_log::test]
fn unknown_unit_and_missing_number_fail() {
    let ts = sample_timestamps()[0];

    assert!(matches!(
        recurring_event(&ts, "5 fortnight"),
        Err(CalendarError::InvalidInterval(_))
    ));
    assert!(matches!(
        recurring_event(&ts, "week"),
        Err(CalendarError::NumberExtraction(_))
    ));
}

#[test]
fn first_number_wins() {
    let spec: IntervalSpec = "3 day 5 week".parse().unwrap();
    assert_eq!(spec, IntervalSpec::new(3, IntervalUnit::Week));
}
