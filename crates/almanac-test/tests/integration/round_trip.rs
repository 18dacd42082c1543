use almanac_test::calendar::{Layout, format_date, parse_date, parse_date_in, parse_rfc3339};
use almanac_test::fixtures::sample_timestamps;
use chrono::{Offset, Timelike};

/// ## Summary
/// Formatting then parsing with a lossless layout recovers the calendar fields.
#[test_log::test]
fn format_then_parse_recovers_fields() {
    for ts in sample_timestamps() {
        let text = format_date(&ts, Layout::DATE_TIME);
        let parsed = parse_date_in(&text, Layout::DATE_TIME, &ts.timezone())
            .unwrap_or_else(|e| panic!("{text:?} failed to parse: {e}"));

        assert_eq!(parsed.naive_local(), ts.naive_local(), "{text}");
        assert_eq!(parsed, ts, "{text}");
    }
}

/// Historic local mean times carry offsets with seconds, which `%:z` cannot
/// write, so only whole-minute offsets are checked.
#[test_log::test]
fn offset_layouts_keep_the_instant() {
    let whole_minutes = sample_timestamps()
        .into_iter()
        .filter(|ts| ts.offset().fix().local_minus_utc() % 60 == 0);

    for ts in whole_minutes {
        let text = format_date(&ts, Layout::RFC3339);

        let via_layout = parse_date(&text, Layout::RFC3339).expect("layout round trip");
        let via_rfc3339 = parse_rfc3339(&text).expect("rfc3339 round trip");

        assert_eq!(via_layout, ts, "{text}");
        assert_eq!(via_rfc3339, ts, "{text}");
        assert_eq!(via_layout.naive_local(), ts.naive_local(), "{text}");
    }
}

#[test_log::test]
fn custom_layout_round_trip() {
    let layout = "%d.%m.%Y um %H:%M:%S Uhr";
    for ts in sample_timestamps() {
        let text = format_date(&ts, layout);
        let parsed = parse_date_in(&text, layout, &ts.timezone()).expect("custom layout");
        assert_eq!(parsed.naive_local(), ts.naive_local(), "{text}");
    }
}

/// ## Summary
/// Layouts that stop at the hour keep the hour and zero the rest.
#[test_log::test]
fn hour_precision_layout_keeps_the_hour() {
    let layout = "%Y-%m-%d %H";
    for ts in sample_timestamps() {
        let text = format_date(&ts, layout);
        let parsed = parse_date_in(&text, layout, &ts.timezone()).expect("hour layout");

        let expected = ts.date_naive().and_hms_opt(ts.hour(), 0, 0).expect("valid hour");
        assert_eq!(parsed.naive_local(), expected, "{text}");
    }
}
