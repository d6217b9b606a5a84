//! Statistics configuration
//!
//! Read from and saved to `statistics.yaml` in the caller's config directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::StatsError;
use crate::statistics::calendar::{Clock, FixedClock, SystemClock};

/// Config file name
const CONFIG_FILENAME: &str = "statistics.yaml";

/// Statistics configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsConfig {
    /// Year treated as "this year"; the local date is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<i32>,
}

impl StatisticsConfig {
    /// Loads the config from the config directory
    ///
    /// # Returns
    /// The config, or defaults when the file is missing, unreadable or invalid
    pub fn load(config_dir: &Path) -> Self {
        let config_path = Self::config_path(config_dir);

        if !config_path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "failed to read statistics config");
                return Self::default();
            }
        };

        let config: Self = match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "invalid statistics config");
                return Self::default();
            }
        };

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "rejected statistics config");
                Self::default()
            }
        }
    }

    /// Saves the config into the config directory
    pub fn save(&self, config_dir: &Path) -> Result<(), StatsError> {
        self.validate()?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| StatsError::config(format!("failed to serialize config: {}", e)))?;

        fs::write(Self::config_path(config_dir), content)?;
        Ok(())
    }

    /// Reference year must be a four-digit calendar year
    pub fn validate(&self) -> Result<(), StatsError> {
        match self.reference_year {
            Some(year) if !(1..=9999).contains(&year) => Err(StatsError::config(format!(
                "reference_year must be between 1 and 9999, got {}",
                year
            ))),
            _ => Ok(()),
        }
    }

    /// Full path of the config file
    pub fn config_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILENAME)
    }

    /// Clock for "this year" queries
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.reference_year.and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)) {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock),
        }
    }
}
