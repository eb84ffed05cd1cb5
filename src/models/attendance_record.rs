//! Attendance record model and timestamp decoding.
//!
//! An [`AttendanceRecord`] is the per-employee, per-day punch pair reported by the
//! external attendance service. The engine only ever reads these records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ReportPeriod;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A single day's punch-in / punch-out pair for one employee.
///
/// A `None` punch means the employee generated no punch that day, or the
/// punch text could not be parsed. Both cases classify as Absent.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{parse_timestamp, AttendanceRecord};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     employee_id: "EMP-001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
///     punch_in_time: parse_timestamp("2025-06-10T09:00:00Z"),
///     punch_out_time: None,
/// };
/// assert!(!record.has_both_punches());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day of the record (time of day already discarded).
    pub date: NaiveDate,
    /// Shift start, if punched.
    #[serde(default)]
    pub punch_in_time: Option<DateTime<Utc>>,
    /// Shift end, if punched.
    #[serde(default)]
    pub punch_out_time: Option<DateTime<Utc>>,
}

impl AttendanceRecord {
    /// Returns true when both punch-in and punch-out are present.
    pub fn has_both_punches(&self) -> bool {
        self.punch_in_time.is_some() && self.punch_out_time.is_some()
    }

    /// Returns true if the record is for `employee_id` and falls inside `period`.
    ///
    /// ```
    /// use attendance_engine::models::{AttendanceRecord, ReportPeriod};
    /// use chrono::NaiveDate;
    ///
    /// let period = ReportPeriod::new(6, 2025).unwrap();
    /// let record = AttendanceRecord {
    ///     employee_id: "EMP-001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
    ///     punch_in_time: None,
    ///     punch_out_time: None,
    /// };
    /// assert!(record.belongs_to("EMP-001", &period));
    /// assert!(!record.belongs_to("EMP-002", &period));
    /// ```
    pub fn belongs_to(&self, employee_id: &str, period: &ReportPeriod) -> bool {
        self.employee_id == employee_id && period.contains_date(self.date)
    }
}

/// Parses an ISO-8601 timestamp leniently.
///
/// Accepts RFC 3339 with an offset (converted to UTC) and offset-less date-times,
/// which are taken as UTC. Anything else returns `None`.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::parse_timestamp;
///
/// assert!(parse_timestamp("2025-06-10T09:00:00Z").is_some());
/// assert!(parse_timestamp("2025-06-10T14:30:00+05:30").is_some());
/// assert!(parse_timestamp("2025-06-10 09:00:00").is_some());
/// assert!(parse_timestamp("not a time").is_none());
/// assert!(parse_timestamp("").is_none());
/// ```
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc())
}

/// Normalizes a date or date-time string to its date-only key.
///
/// The calendar date is taken as written; the time of day and any offset are
/// discarded rather than converted.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::parse_record_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 6, 10);
/// assert_eq!(parse_record_date("2025-06-10"), expected);
/// assert_eq!(parse_record_date("2025-06-10T00:00:00.000Z"), expected);
/// assert_eq!(parse_record_date("2025-06-10T23:30:00-04:00"), expected);
/// assert_eq!(parse_record_date("10/06/2025"), None);
/// ```
pub fn parse_record_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.date())
}
