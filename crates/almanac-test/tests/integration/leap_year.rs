use almanac_test::calendar::is_leap_year;

#[test]
fn gregorian_leap_years() {
    for year in [2000, 2024, 1600, 2400, 4, 0, -4, -400] {
        assert!(is_leap_year(year), "{year} is a leap year");
    }
    for year in [1900, 2023, 2100, 1800, 1, -1, -100] {
        assert!(!is_leap_year(year), "{year} is not a leap year");
    }
}

#[test]
fn leap_years_match_chrono_calendar() {
    for year in 1583..=2400_i32 {
        let has_feb_29 = chrono::NaiveDate::from_ymd_opt(year, 2, 29).is_some();
        assert_eq!(is_leap_year(i64::from(year)), has_feb_29, "{year}");
    }
}
