use almanac_test::calendar::{add_days, add_months, days_between};
use almanac_test::fixtures::sample_timestamps;

const DAY_OFFSETS: &[i64] = &[-10_000, -1461, -400, -31, -7, -1, 0, 1, 2, 7, 29, 365, 1461, 10_000];

#[test_log::test]
fn days_between_is_zero_for_same_instant() {
    for ts in sample_timestamps() {
        assert_eq!(days_between(&ts, &ts), 0, "{ts}");
    }
}

#[test_log::test]
fn days_between_is_antisymmetric() {
    let samples = sample_timestamps();
    for a in &samples {
        for b in &samples {
            assert_eq!(days_between(a, b), -days_between(b, a), "{a} / {b}");
        }
    }
}

/// ## Summary
/// Shifting forward and back by the same number of days lands on the
/// original calendar date. None of the fixtures sits in a DST gap, so the
/// wall-clock time survives too.
#[test_log::test]
fn add_days_then_subtract_returns_to_original_date() {
    for ts in sample_timestamps() {
        for &n in DAY_OFFSETS {
            let there = add_days(&ts, n).expect("in range");
            let back = add_days(&there, -n).expect("in range");

            assert_eq!(back.date_naive(), ts.date_naive(), "{ts} {n:+} days");
            assert_eq!(there.date_naive() - ts.date_naive(), chrono::TimeDelta::days(n));
        }
    }
}

#[test_log::test]
fn twelve_months_is_one_calendar_year() {
    for ts in sample_timestamps() {
        let year_later = add_months(&ts, 12).expect("in range");
        let days = (year_later.date_naive() - ts.date_naive()).num_days();
        assert!((365..=366).contains(&days), "{ts}: {days}");
        assert_eq!(year_later.time(), ts.time(), "{ts}");
    }
}
