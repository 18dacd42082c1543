//! Property-style integration suites for the calendar utilities.

mod cli;
mod day_arithmetic;
mod leap_year;
mod next_weekday;
mod recurrence;
mod round_trip;
mod timezone;
mod weekend;
