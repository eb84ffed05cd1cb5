//! Report period model.
//!
//! This module contains the [`ReportPeriod`] type, a validated calendar month
//! that defines the window for a monthly attendance summary.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// A calendar month (month, year) validated at construction.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod::new(2, 2024).unwrap();
/// assert_eq!(period.days_in_month(), 29);
/// assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
///
/// assert!(ReportPeriod::new(13, 2024).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReportPeriod {
    month: u32,
    year: i32,
    #[serde(skip)]
    first_day: NaiveDate,
    #[serde(skip)]
    last_day: NaiveDate,
}

impl ReportPeriod {
    /// Creates a period for `month` (1-12) of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] when the month is out of range or
    /// the year is outside the supported calendar.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidPeriod { month, year };

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

        let (next_year, next_month) = if month == 12 {
            (year.checked_add(1).ok_or_else(invalid)?, 1)
        } else {
            (year, month + 1)
        };
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            month,
            year,
            first_day,
            last_day,
        })
    }

    /// Returns the period containing `date`.
    pub fn containing(date: NaiveDate) -> EngineResult<Self> {
        Self::new(date.month(), date.year())
    }

    /// The month number, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Number of calendar days in the month (28-31).
    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }

    /// Checks if a given date falls within this month.
    ///
    /// ```
    /// use attendance_engine::models::ReportPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = ReportPeriod::new(6, 2025).unwrap();
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()));
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day
    }

    /// Iterates every calendar day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last_day = self.last_day;
        self.first_day
            .iter_days()
            .take_while(move |date| *date <= last_day)
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
