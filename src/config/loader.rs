//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::ReportPeriod;

use super::types::{EngineConfig, Holiday, HolidayCalendarFile, OrganisationMetadata};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query organisation metadata and holidays.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── organisation.yaml   # Organisation metadata
/// └── holidays/
///     └── 2025.yaml       # Holiday calendar for one year
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
/// use attendance_engine::models::ReportPeriod;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let october = ReportPeriod::new(10, 2025).unwrap();
/// println!("Holidays in October: {}", loader.holiday_count(&october));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `organisation.yaml` or the `holidays` directory is missing
    /// - Any file contains invalid YAML
    /// - A holiday file lists a date outside its declared year
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let organisation_path = path.join("organisation.yaml");
        let metadata = Self::load_yaml::<OrganisationMetadata>(&organisation_path)?;

        let holidays_dir = path.join("holidays");
        let holidays = Self::load_holidays(&holidays_dir)?;

        tracing::info!(
            organisation = %metadata.code,
            holidays = holidays.len(),
            "Configuration loaded"
        );

        Ok(Self {
            config: EngineConfig::new(metadata, holidays),
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

    /// Loads every holiday calendar file from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<Holiday>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut holidays = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let calendar = Self::load_yaml::<HolidayCalendarFile>(&path)?;

                if let Some(misplaced) = calendar.misplaced_holiday() {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "holiday '{}' on {} is outside year {}",
                            misplaced.name, misplaced.date, calendar.year
                        ),
                    });
                }

                holidays.extend(calendar.holidays);
            }
        }

        Ok(holidays)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the organisation metadata.
    pub fn organisation(&self) -> &OrganisationMetadata {
        self.config.organisation()
    }

    /// Returns the holidays that fall inside `period`.
    pub fn holidays_in(&self, period: &ReportPeriod) -> Vec<&Holiday> {
        self.config.holidays_in(period)
    }

    /// Returns the distinct holiday dates inside `period`, sorted.
    pub fn holiday_dates(&self, period: &ReportPeriod) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .holidays_in(period)
            .into_iter()
            .map(|h| h.date)
            .collect();
        dates.dedup();
        dates
    }

    /// Returns the number of distinct holiday dates inside `period`.
    pub fn holiday_count(&self, period: &ReportPeriod) -> u32 {
        self.holiday_dates(period).len() as u32
    }
}
