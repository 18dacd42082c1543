use almanac_test::app::cli::Cli;
use almanac_test::app::commands;
use almanac_test::app::config::CalendarDefaults;
use almanac_test::config::Settings;
use clap::Parser;

fn run(defaults: &CalendarDefaults, args: &[&str]) -> String {
    let cli = Cli::try_parse_from(std::iter::once("almanac").chain(args.iter().copied()))
        .expect("valid command line");
    commands::run(&cli.command, defaults).expect("command succeeds")
}

#[test_log::test]
fn configured_zone_and_layout_drive_the_commands() {
    let settings = Settings::from_toml_str(
        r#"
        [calendar]
        default_timezone = "Europe/Berlin"
        default_layout = "%d.%m.%Y %H:%M"
        "#,
    )
    .expect("valid settings");
    let defaults = CalendarDefaults::from_settings(&settings).expect("known zone");

    assert_eq!(
        run(&defaults, &["parse", "29.03.2026 12:00"]),
        "2026-03-29T12:00:00+02:00"
    );
    assert_eq!(
        run(&defaults, &["add-days", "28.03.2026 12:00", "1"]),
        "2026-03-29T12:00:00+02:00"
    );
    assert_eq!(
        run(&defaults, &["format", "2026-03-29T10:00:00Z", "--tz", "Asia/Tokyo"]),
        "29.03.2026 19:00"
    );
    assert_eq!(run(&defaults, &["leap-year", "2100"]), "false");
}

#[test]
fn unknown_configured_zone_is_rejected() {
    let settings = Settings::from_toml_str(
        r#"
        [calendar]
        default_timezone = "Not/AZone"
        "#,
    )
    .expect("syntactically valid");

    assert!(CalendarDefaults::from_settings(&settings).is_err());
}
