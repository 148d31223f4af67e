// ABOUTME: Environment-driven configuration for the storage and report collaborators
// ABOUTME: Snapshot path, default history window and an optional pinned "today"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

//! Runtime configuration
//!
//! Engine constants are compiled in (`nutritrack_core::constants`). Only the
//! collaborator layer reads the environment:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `NUTRITRACK_DATA_PATH` | `./data/nutritrack.json` |
//! | `NUTRITRACK_HISTORY_DAYS` | `30` |
//! | `NUTRITRACK_TODAY` | local date |

use chrono::{Local, NaiveDate};
use nutritrack_core::constants::reports::{DEFAULT_HISTORY_DAYS, MAX_HISTORY_DAYS};
use nutritrack_core::errors::AppError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Default location of the JSON snapshot
pub const DEFAULT_DATA_PATH: &str = "./data/nutritrack.json";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// Collaborator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON snapshot backing the in-memory store
    pub data_path: PathBuf,
    /// Default number of days in the daily totals history
    pub history_days: u32,
    /// Fixed "today", for reproducible reports
    pub today: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            history_days: DEFAULT_HISTORY_DAYS,
            today: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment and validate it
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or is out of range
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the history window is empty or too long
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_HISTORY_DAYS).contains(&self.history_days) {
            return Err(ConfigError::ValueOutOfRange(
                "NUTRITRACK_HISTORY_DAYS must be between 1 and 365",
            ));
        }
        Ok(())
    }

    /// The configured "today", or the local date
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("NUTRITRACK_DATA_PATH", &mut self.data_path)?;
        Self::apply_env_var("NUTRITRACK_HISTORY_DAYS", &mut self.history_days)?;

        if let Ok(val) = env::var("NUTRITRACK_TODAY") {
            let today = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid NUTRITRACK_TODAY: '{val}'")))?;
            self.today = Some(today);
        }

        Ok(self)
    }
}
