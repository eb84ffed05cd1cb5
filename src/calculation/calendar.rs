//! Calendar helpers for monthly aggregation.
//!
//! Week-offs follow a fixed weekly cadence: every Saturday and Sunday.
//! Alternate week-off schedules (rotating offs, 6-day weeks) are not supported.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::EngineResult;
use crate::models::{DayKind, ReportPeriod};

/// Number of calendar days in `month` of `year`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`](crate::error::EngineError::InvalidPeriod)
/// for a month outside 1-12.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert_eq!(days_in_month(2023, 2).unwrap(), 28);
/// assert_eq!(days_in_month(2025, 9).unwrap(), 30);
/// assert!(days_in_month(2025, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    Ok(ReportPeriod::new(month, year)?.days_in_month())
}

/// Determines whether a date is a workday or a week-off.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::get_day_kind;
/// use attendance_engine::models::DayKind;
/// use chrono::NaiveDate;
///
/// // 2025-09-06 is a Saturday
/// assert_eq!(get_day_kind(NaiveDate::from_ymd_opt(2025, 9, 6).unwrap()), DayKind::WeekOff);
/// // 2025-09-08 is a Monday
/// assert_eq!(get_day_kind(NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()), DayKind::Workday);
/// ```
pub fn get_day_kind(date: NaiveDate) -> DayKind {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayKind::WeekOff,
        _ => DayKind::Workday,
    }
}

/// Counts the Saturdays and Sundays in a period.
pub fn count_week_off_days(period: &ReportPeriod) -> u32 {
    period
        .days()
        .filter(|date| get_day_kind(*date) == DayKind::WeekOff)
        .count() as u32
}

/// Counts the Monday-to-Friday days in a period.
pub fn count_workdays(period: &ReportPeriod) -> u32 {
    period.days_in_month() - count_week_off_days(period)
}
