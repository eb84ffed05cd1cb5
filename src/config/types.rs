//! Configuration types for the Attendance Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::ReportPeriod;

/// Metadata about the organisation the engine reports for.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganisationMetadata {
    /// Short identifier for the configuration set (e.g., "default").
    pub code: String,
    /// The human-readable organisation name.
    pub name: String,
    /// ISO country code of the organisation.
    #[serde(default)]
    pub country: Option<String>,
}

/// A dated holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Independence Day").
    pub name: String,
    /// Region label for the holiday (e.g., "national"). Informational only:
    /// every holiday in the calendar applies to the whole organisation.
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    "national".to_string()
}

/// Holiday calendar file structure, one file per year.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendarFile {
    /// The year the file covers.
    pub year: i32,
    /// Holidays in that year.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl HolidayCalendarFile {
    /// Returns the first holiday dated outside the declared year, if any.
    pub fn misplaced_holiday(&self) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.date.year() != self.year)
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Organisation metadata.
    metadata: OrganisationMetadata,
    /// Holidays across all loaded years (sorted by date).
    holidays: Vec<Holiday>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: OrganisationMetadata, holidays: Vec<Holiday>) -> Self {
        let mut sorted_holidays = holidays;
        sorted_holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            metadata,
            holidays: sorted_holidays,
        }
    }

    /// Returns the organisation metadata.
    pub fn organisation(&self) -> &OrganisationMetadata {
        &self.metadata
    }

    /// Returns all holidays, sorted by date.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the holidays that fall inside `period`.
    pub fn holidays_in(&self, period: &ReportPeriod) -> Vec<&Holiday> {
        self.holidays
            .iter()
            .filter(|h| period.contains_date(h.date))
            .collect()
    }
}
