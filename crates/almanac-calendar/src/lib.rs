//! Date and time convenience functions.
//!
//! Every function is a pure transformation over a [`Timestamp`] or a few
//! primitive arguments:
//!
//! - formatting and parsing with strftime-style layouts ([`layout`])
//! - day and month arithmetic ([`arithmetic`])
//! - weekend and leap-year checks ([`classify`])
//! - timezone resolution and conversion ([`timezone`])
//! - next-weekday lookup ([`weekday`])
//! - simple recurrence intervals ([`recurrence`])

pub mod arithmetic;
pub mod classify;
pub mod error;
pub mod layout;
pub mod recurrence;
pub mod timezone;
pub mod weekday;
pub mod zone;

pub use arithmetic::{add_days, add_months, days_between};
pub use classify::{is_leap_year, is_weekend};
pub use error::{CalendarError, CalendarResult};
pub use layout::{Layout, format_date, parse_date, parse_date_in, parse_rfc3339};
pub use recurrence::{IntervalSpec, IntervalUnit, recurring_event};
pub use timezone::{TimeZoneResolver, ZoneDatabase, convert_timezone, parse_timezone};
pub use weekday::{next_weekday, next_weekday_of, weekday_from_index, weekday_index};
pub use zone::{Timestamp, Zone, ZoneOffset};
