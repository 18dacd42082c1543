use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Almanac: date and time utilities.
///
/// Timestamps are RFC 3339 (`2024-06-01T12:00:00+02:00`) or text in the
/// configured default layout, read in the configured default timezone.
#[derive(Debug, Parser)]
#[command(name = "almanac", version, about)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a timestamp with a layout.
    Format {
        timestamp: String,
        /// strftime-style layout (defaults to the configured layout).
        #[arg(long)]
        layout: Option<String>,
        /// Convert to this timezone before rendering.
        #[arg(long)]
        tz: Option<String>,
    },
    /// Parse text with a layout and print it as RFC 3339.
    Parse {
        text: String,
        /// strftime-style layout (defaults to the configured layout).
        #[arg(long)]
        layout: Option<String>,
        /// Timezone for text without an offset (defaults to the configured zone).
        #[arg(long)]
        tz: Option<String>,
    },
    /// Whole days elapsed between two timestamps.
    DaysBetween { start: String, end: String },
    /// Shift a timestamp by a number of days.
    AddDays {
        timestamp: String,
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
    /// Shift a timestamp by a number of months.
    AddMonths {
        timestamp: String,
        #[arg(allow_negative_numbers = true)]
        months: i64,
    },
    /// Check whether a timestamp falls on a weekend.
    Weekend { timestamp: String },
    /// Check whether a year is a leap year.
    LeapYear {
        #[arg(allow_negative_numbers = true)]
        year: i64,
    },
    /// Express a timestamp in another timezone.
    Convert { timestamp: String, zone: String },
    /// Next occurrence of a weekday, given as a name or 0 (Sunday) to 6 (Saturday).
    NextWeekday { timestamp: String, weekday: String },
    /// Next occurrence of an event repeating every interval (e.g. "2 week").
    Recur { timestamp: String, interval: String },
}
