//! Configuration management for matricula.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::NaiveDate;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::student;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration directory name.
const CONFIG_DIR_NAME: &str = "matricula";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `MATRICULA_`)
/// 2. TOML config file at `~/.config/matricula/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record defaults.
    pub records: RecordsConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

/// Default values stamped onto records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    /// Course assigned when enrollment does not name one.
    pub default_course: String,
    /// Status stamped on every new record.
    pub initial_status: String,
    /// Status applied by a status change with no explicit value.
    pub graduated_status: String,
}

/// Display configuration for the interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime-style format used to render enrollment dates.
    pub date_format: String,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            default_course: student::DEFAULT_COURSE.to_string(),
            initial_status: student::STATUS_ACTIVE.to_string(),
            graduated_status: student::STATUS_GRADUATED.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `MATRICULA_`, with `__`
    ///    separating the section from the key)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("MATRICULA_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.records.default_course.is_empty() {
            return Err(Error::ConfigValidation {
                message: "default_course must not be empty".to_string(),
            });
        }

        if self.records.initial_status.is_empty() {
            return Err(Error::ConfigValidation {
                message: "initial_status must not be empty".to_string(),
            });
        }

        if self.records.graduated_status.is_empty() {
            return Err(Error::ConfigValidation {
                message: "graduated_status must not be empty".to_string(),
            });
        }

        if self.display.date_format.is_empty() {
            return Err(Error::ConfigValidation {
                message: "date_format must not be empty".to_string(),
            });
        }

        // A bad strftime specifier only fails when a date is rendered, so
        // render a probe date now instead of at the first listing.
        let probe = NaiveDate::default();
        let mut rendered = String::new();
        if write!(rendered, "{}", probe.format(&self.display.date_format)).is_err() {
            return Err(Error::ConfigValidation {
                message: format!("invalid date format: {}", self.display.date_format),
            });
        }

        Ok(())
    }
}
