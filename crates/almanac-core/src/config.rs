use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Timezone used when a command-line timestamp carries no zone of its own.
pub const DEFAULT_TIMEZONE: &str = "UTC";
/// Layout used to read and print command-line timestamps.
pub const DEFAULT_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "ALMANAC";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub default_timezone: String,
    pub default_layout: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    fn builder() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("calendar.default_timezone", DEFAULT_TIMEZONE)?
            .set_default("calendar.default_layout", DEFAULT_LAYOUT)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
    }

    /// ## Summary
    /// Loads configuration from defaults, a TOML file and environment variables.
    ///
    /// When `path` is `None`, `config.toml` in the working directory is read if it
    /// exists. Environment variables take precedence over file values and use the
    /// `ALMANAC_` prefix with `__` between sections, e.g.
    /// `ALMANAC_CALENDAR__DEFAULT_TIMEZONE`.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE).required(false),
        };

        let settings = Self::builder()?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from TOML text layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        let settings = Self::builder()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks that every setting has a usable value.
    ///
    /// Whether the timezone name actually resolves is checked by the calendar
    /// layer, which owns the timezone database.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` naming the first empty setting.
    pub fn validate(&self) -> CoreResult<()> {
        let required = [
            ("calendar.default_timezone", &self.calendar.default_timezone),
            ("calendar.default_layout", &self.calendar.default_layout),
            ("logging.level", &self.logging.level),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::InvalidConfiguration(format!(
                    "{key} must not be empty"
                )));
            }
        }

        Ok(())
    }
}

/// ## Summary
/// Loads `.env` (if present) and then the layered configuration.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> CoreResult<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load(path)
}
