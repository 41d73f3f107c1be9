//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a payroll
//! configuration snapshot from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, PayrollSettings, ScheduleConfig, StatutoryTables};

/// Loads payroll configuration from a directory of YAML files.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ph2023/
/// ├── schedule.yaml   # Work schedule (optional, defaults to 08:00/10/480)
/// ├── payroll.yaml    # Pay policy settings (optional, defaults to 1.25/4)
/// └── statutory.yaml  # Statutory contribution and tax tables (required)
/// ```
///
/// The schedule and pay policy files are optional because the engine carries
/// sensible defaults for them; the statutory snapshot is the reason a
/// deployment points at a config directory at all, so it is required.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/ph2023").unwrap();
/// println!("Pag-IBIG ceiling: {}", config.statutory.pagibig.salary_ceiling);
/// ```
#[derive(Debug)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ph2023")
    ///
    /// # Returns
    ///
    /// Returns a validated [`PayrollConfig`] on success, or an error if:
    /// - `statutory.yaml` is missing (`ConfigNotFound`)
    /// - Any present file contains invalid YAML (`ConfigParseError`)
    /// - The loaded tables fail validation (`ConfigInvalid`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<PayrollConfig> {
        let path = path.as_ref();

        let schedule = match Self::load_optional_yaml::<ScheduleConfig>(&path.join("schedule.yaml"))?
        {
            Some(schedule) => schedule,
            None => ScheduleConfig::default(),
        };

        let settings = match Self::load_optional_yaml::<PayrollSettings>(&path.join("payroll.yaml"))?
        {
            Some(settings) => settings,
            None => PayrollSettings::default(),
        };

        let statutory = Self::load_yaml::<StatutoryTables>(&path.join("statutory.yaml"))?;

        let config = PayrollConfig {
            schedule,
            settings,
            statutory,
        };
        config.validate()?;

        Ok(config)
    }

    /// Loads and parses a required YAML file.
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

    /// Loads a YAML file that may be absent. A missing file yields `None`;
    /// a present but malformed file is still an error.
    fn load_optional_yaml<T: serde::de::DeserializeOwned>(
        path: &Path,
    ) -> EngineResult<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_yaml(path).map(Some)
    }
}
