//! Global planner configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{UrlaubError, UrlaubResult};

const DEFAULT_VACATION_DAYS: u32 = 30;

fn default_vacation_days() -> u32 {
    DEFAULT_VACATION_DAYS
}

fn is_default_vacation_days(n: &u32) -> bool {
    *n == DEFAULT_VACATION_DAYS
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Global configuration at ~/.config/urlaub/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct UrlaubConfig {
    /// Yearly vacation-day allowance the selection is tracked against.
    #[serde(default = "default_vacation_days", skip_serializing_if = "is_default_vacation_days")]
    pub vacation_days: u32,

    /// Year to plan when no --year flag is given; current year otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Include the optional Augsburg "Hohes Friedensfest" (Aug 8).
    #[serde(default, skip_serializing_if = "is_false")]
    pub friedensfest: bool,

    /// Path or URL of a school-holiday ICS resource overlaid on the calendar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_holidays: Option<String>,
}

impl Default for UrlaubConfig {
    fn default() -> Self {
        UrlaubConfig {
            vacation_days: DEFAULT_VACATION_DAYS,
            year: None,
            friedensfest: false,
            school_holidays: None,
        }
    }
}

impl UrlaubConfig {
    pub fn config_path() -> UrlaubResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| UrlaubError::Config("Could not determine config directory".into()))?
            .join("urlaub");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> UrlaubResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: UrlaubConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| UrlaubError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| UrlaubError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/urlaub/config.toml
    pub fn save(&self) -> UrlaubResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| UrlaubError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| UrlaubError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> UrlaubResult<()> {
        let contents = format!(
            "\
# urlaub configuration

# Yearly vacation-day allowance:
# vacation_days = {DEFAULT_VACATION_DAYS}

# Year to plan by default (current year if unset):
# year = 2026

# Include the optional Augsburg \"Hohes Friedensfest\" (Aug 8):
# friedensfest = true

# School-holiday ICS resource to overlay, as a path or URL:
# school_holidays = \"~/ferien/bayern.ics\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                UrlaubError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| UrlaubError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The school-holiday source with `~` expanded, if configured.
    pub fn school_holiday_source(&self) -> Option<String> {
        self.school_holidays
            .as_ref()
            .map(|s| shellexpand::tilde(s).into_owned())
    }
}
