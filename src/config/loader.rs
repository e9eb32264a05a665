//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading store
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::WeekConfiguration;

use super::types::{ScheduleConfig, StoreConfig, StoreMetadata, parse_utc_offset};

/// Loads and provides access to the store configuration.
///
/// # Directory Structure
///
/// ```text
/// config/store/
/// ├── store.yaml     # Store metadata (name, UTC offset)
/// └── schedule.yaml  # Weekly schedule: `days:` list or `profile:` block
/// ```
///
/// # Example
///
/// ```no_run
/// use store_hours::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/store").unwrap();
/// println!("Loaded store: {}", loader.store().name);
/// println!("Configured days: {}", loader.week().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StoreConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The UTC offset is malformed
    /// - The schedule file has neither or both of `days` and `profile`
    /// - A day schedule fails validation or a weekday appears twice
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load store.yaml
        let store_path = path.join("store.yaml");
        let metadata = Self::load_yaml::<StoreMetadata>(&store_path)?;
        let offset = parse_utc_offset(&metadata.utc_offset).ok_or_else(|| {
            EngineError::ConfigParseError {
                path: store_path.display().to_string(),
                message: format!(
                    "invalid utc_offset '{}', expected +HH:MM",
                    metadata.utc_offset
                ),
            }
        })?;

        // Load schedule.yaml
        let schedule_path = path.join("schedule.yaml");
        let schedule_config = Self::load_yaml::<ScheduleConfig>(&schedule_path)?;
        let week = Self::build_week(schedule_config, &schedule_path)?;

        Ok(Self {
            config: StoreConfig::new(metadata, offset, week),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Turns the schedule file into a validated week configuration.
    fn build_week(schedule: ScheduleConfig, path: &Path) -> EngineResult<WeekConfiguration> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let week = match (schedule.days, schedule.profile) {
            (Some(days), None) => WeekConfiguration::from_schedules(days),
            (None, Some(profile)) => profile.to_week_configuration(),
            (Some(_), Some(_)) => {
                return Err(parse_error(
                    "schedule must define either `days` or `profile`, not both".to_string(),
                ));
            }
            (None, None) => {
                return Err(parse_error("schedule must define `days` or `profile`".to_string()));
            }
        }
        .map_err(|e| parse_error(e.to_string()))?;

        for day in week.iter() {
            day.validate().map_err(|e| parse_error(e.to_string()))?;
        }

        Ok(week)
    }

    /// Returns the underlying store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the store metadata.
    pub fn store(&self) -> &StoreMetadata {
        self.config.store()
    }

    /// Returns the weekly schedule.
    pub fn week(&self) -> &WeekConfiguration {
        self.config.week()
    }

    /// Consumes the loader, returning the store configuration.
    pub fn into_config(self) -> StoreConfig {
        self.config
    }
}
