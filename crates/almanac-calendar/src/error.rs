use thiserror::Error;

/// Calendar operation errors
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Text does not match the layout it was parsed with.
    #[error("Parse error: {text:?} does not match layout {layout:?}: {source}")]
    Parse {
        text: String,
        layout: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Unknown timezone: {0:?}")]
    UnknownTimezone(String),

    /// Weekday index outside 0 (Sunday) through 6 (Saturday).
    #[error("Invalid weekday: {0} (expected 0 = Sunday through 6 = Saturday)")]
    InvalidWeekday(i64),

    #[error("Invalid interval format: {0:?}")]
    InvalidInterval(String),

    #[error("No number found in interval: {0:?}")]
    NumberExtraction(String),

    /// Result falls outside the representable calendar range.
    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
