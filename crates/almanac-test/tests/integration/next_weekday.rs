use almanac_test::calendar::{CalendarError, next_weekday, weekday_index};
use almanac_test::fixtures::sample_timestamps;
use chrono::Datelike;

/// ## Summary
/// The next occurrence is strictly later, on the requested weekday, and
/// between one and seven calendar days ahead.
#[test_log::test]
fn next_weekday_lands_within_the_coming_week() {
    for ts in sample_timestamps() {
        for target in 0..7 {
            let next = next_weekday(&ts, target).expect("in range");
            let ahead = (next.date_naive() - ts.date_naive()).num_days();

            assert!(next > ts, "{ts} -> {next}");
            assert_eq!(weekday_index(next.weekday()), target, "{ts} -> {next}");
            assert!((1..=7).contains(&ahead), "{ts} -> {next}: {ahead} days");
        }
    }
}

#[test_log::test]
fn same_weekday_means_a_full_week() {
    for ts in sample_timestamps() {
        let next = next_weekday(&ts, weekday_index(ts.weekday())).expect("in range");
        assert_eq!((next.date_naive() - ts.date_naive()).num_days(), 7, "{ts}");
    }
}

#[test]
fn out_of_range_indices_are_rejected() {
    let ts = sample_timestamps()[0];
    for target in [-1, 7, 100, i64::MIN] {
        assert!(
            matches!(next_weekday(&ts, target), Err(CalendarError::InvalidWeekday(i)) if i == target),
            "{target}"
        );
    }
}
