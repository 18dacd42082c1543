use almanac_calendar::{Zone, parse_timezone};
pub use almanac_core::config::*;
use almanac_core::error::CoreError;

use crate::error::AppResult;

/// Calendar settings resolved against the timezone database.
#[derive(Debug, Clone)]
pub struct CalendarDefaults {
    pub zone: Zone,
    pub layout: String,
}

impl CalendarDefaults {
    /// ## Summary
    /// Resolves the configured default timezone and layout.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the default timezone is unknown.
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let name = &settings.calendar.default_timezone;
        let zone = parse_timezone(name).map_err(|e| {
            CoreError::InvalidConfiguration(format!("calendar.default_timezone: {e}"))
        })?;

        Ok(Self {
            zone,
            layout: settings.calendar.default_layout.clone(),
        })
    }
}

impl Default for CalendarDefaults {
    fn default() -> Self {
        Self {
            zone: Zone::UTC,
            layout: DEFAULT_LAYOUT.to_string(),
        }
    }
}
