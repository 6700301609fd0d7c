use anyhow::Result;
use chrono::format::{Item, StrftimeItems};
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

const DEFAULT_DATE_ATTRIBUTE: &str = "%Y-%m-%d";
const DEFAULT_DATE_DISPLAY: &str = "%B %-d, %Y";
const DEFAULT_SEPARATOR: &str = " ";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub format: FormatConfig,
    pub logging: LoggingConfig,
}

/// Knobs for the HTML formatters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatConfig {
    /// `strftime` pattern for machine-readable `datetime` attributes.
    pub date_attribute: String,
    /// `strftime` pattern for the human-readable date text.
    pub date_display: String,
    /// Glue placed between rendered fields.
    pub separator: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date_attribute: DEFAULT_DATE_ATTRIBUTE.to_string(),
            date_display: DEFAULT_DATE_DISPLAY.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl FormatConfig {
    /// ## Summary
    /// Checks that both date patterns are valid `strftime` strings.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` naming the first bad pattern.
    pub fn validate(&self) -> CoreResult<()> {
        for (field, pattern) in [
            ("date_attribute", &self.date_attribute),
            ("date_display", &self.date_display),
        ] {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(CoreError::InvalidConfiguration(format!(
                    "format.{field} is not a valid strftime pattern: {pattern:?}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from built-in defaults, an optional `microformats.toml`
    /// and `MICROFORMATS_*` environment variables, in increasing precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the date patterns fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("format.date_attribute", DEFAULT_DATE_ATTRIBUTE)?
            .set_default("format.date_display", DEFAULT_DATE_DISPLAY)?
            .set_default("format.separator", DEFAULT_SEPARATOR)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            // TOML file
            .add_source(config::File::with_name("microformats").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("MICROFORMATS")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.format.validate()?;
        tracing::debug!(level = %settings.logging.level, "Loaded microformats settings");

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
