use thiserror::Error;

/// Application-level errors (CLI layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CalendarError(#[from] almanac_calendar::CalendarError),

    #[error(transparent)]
    CoreError(#[from] almanac_core::error::CoreError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
