//! Attendance status classification.
//!
//! This module maps a punch-in / punch-out pair to a [`DayStatus`] using fixed
//! hour bands:
//!
//! | Hours worked      | Status           |
//! |-------------------|------------------|
//! | `h >= 8`          | Present          |
//! | `4.5 < h < 8`     | HalfDayPresent   |
//! | `1 < h <= 4.5`    | PartialPresent   |
//! | `h <= 1`, missing | Absent           |
//!
//! Classification never fails. A missing or unparseable punch classifies as
//! Absent, and so does a pair of punches one hour or less apart (including zero
//! and negative durations from bad data).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AttendanceRecord, DayStatus, parse_timestamp};

/// Minimum hours for a full Present day (inclusive).
pub const PRESENT_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Hours above which a day is HalfDayPresent (exclusive).
pub const HALF_DAY_THRESHOLD_HOURS: Decimal = Decimal::from_parts(45, 0, 0, false, 1);

/// Hours above which a day is PartialPresent (exclusive).
pub const PARTIAL_THRESHOLD_HOURS: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// The status of a day together with the hours that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The classified status.
    pub status: DayStatus,
    /// Hours between the punches, when both were present.
    pub hours_worked: Option<Decimal>,
}

/// Hours elapsed between two punches, at millisecond precision.
///
/// The result is negative when `punch_out` precedes `punch_in`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::hours_worked;
/// use attendance_engine::models::parse_timestamp;
/// use rust_decimal::Decimal;
///
/// let punch_in = parse_timestamp("2025-06-10T09:00:00Z").unwrap();
/// let punch_out = parse_timestamp("2025-06-10T13:30:00Z").unwrap();
/// assert_eq!(hours_worked(punch_in, punch_out), Decimal::new(45, 1));
/// ```
pub fn hours_worked(punch_in: DateTime<Utc>, punch_out: DateTime<Utc>) -> Decimal {
    let millis = (punch_out - punch_in).num_milliseconds();
    Decimal::new(millis, 0) / Decimal::new(MILLIS_PER_HOUR, 0)
}

/// Maps a worked-hours figure onto its status band.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::status_for_hours;
/// use attendance_engine::models::DayStatus;
/// use rust_decimal::Decimal;
///
/// assert_eq!(status_for_hours(Decimal::new(8, 0)), DayStatus::Present);
/// assert_eq!(status_for_hours(Decimal::new(45, 1)), DayStatus::PartialPresent);
/// assert_eq!(status_for_hours(Decimal::ONE), DayStatus::Absent);
/// ```
pub fn status_for_hours(hours: Decimal) -> DayStatus {
    if hours >= PRESENT_THRESHOLD_HOURS {
        DayStatus::Present
    } else if hours > HALF_DAY_THRESHOLD_HOURS {
        DayStatus::HalfDayPresent
    } else if hours > PARTIAL_THRESHOLD_HOURS {
        DayStatus::PartialPresent
    } else {
        DayStatus::Absent
    }
}

/// Classifies a punch pair.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::classify;
/// use attendance_engine::models::{parse_timestamp, DayStatus};
///
/// let punch_in = parse_timestamp("2025-06-10T09:00:00Z");
/// let punch_out = parse_timestamp("2025-06-10T17:00:00Z");
///
/// assert_eq!(classify(punch_in, punch_out), DayStatus::Present);
/// assert_eq!(classify(punch_in, None), DayStatus::Absent);
/// assert_eq!(classify(None, None), DayStatus::Absent);
/// ```
pub fn classify(
    punch_in: Option<DateTime<Utc>>,
    punch_out: Option<DateTime<Utc>>,
) -> DayStatus {
    classify_punches(punch_in, punch_out).status
}

/// Classifies a punch pair, keeping the worked hours.
pub fn classify_punches(
    punch_in: Option<DateTime<Utc>>,
    punch_out: Option<DateTime<Utc>>,
) -> Classification {
    let (Some(punch_in), Some(punch_out)) = (punch_in, punch_out) else {
        return Classification {
            status: DayStatus::Absent,
            hours_worked: None,
        };
    };

    let hours = hours_worked(punch_in, punch_out);
    let status = status_for_hours(hours);

    if status == DayStatus::Absent {
        debug!(
            punch_in = %punch_in,
            punch_out = %punch_out,
            hours = %hours,
            "Punch pair too short to count as attendance"
        );
    }

    Classification {
        status,
        hours_worked: Some(hours),
    }
}

/// Classifies an attendance record.
pub fn classify_record(record: &AttendanceRecord) -> Classification {
    classify_punches(record.punch_in_time, record.punch_out_time)
}

/// Classifies a punch pair given as raw ISO-8601 text.
///
/// Text that does not parse is treated as a missing punch.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::classify_raw;
/// use attendance_engine::models::DayStatus;
///
/// let result = classify_raw(Some("2025-06-10T09:00:00Z"), Some("garbage"));
/// assert_eq!(result.status, DayStatus::Absent);
/// assert_eq!(result.hours_worked, None);
/// ```
pub fn classify_raw(punch_in: Option<&str>, punch_out: Option<&str>) -> Classification {
    classify_punches(
        punch_in.and_then(parse_timestamp),
        punch_out.and_then(parse_timestamp),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn at(text: &str) -> DateTime<Utc> {
        parse_timestamp(text).unwrap()
    }

    fn after(start: &str, millis: i64) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        let punch_in = at(start);
        (
            Some(punch_in),
            Some(punch_in + TimeDelta::milliseconds(millis)),
        )
    }

    fn classify_after_millis(millis: i64) -> DayStatus {
        let (punch_in, punch_out) = after("2025-06-10T09:00:00Z", millis);
        classify(punch_in, punch_out)
    }

    const HOUR: i64 = 3_600_000;

    #[test]
    fn test_missing_punches_are_absent() {
        let t = Some(at("2025-06-10T09:00:00Z"));
        assert_eq!(classify(None, None), DayStatus::Absent);
        assert_eq!(classify(t, None), DayStatus::Absent);
        assert_eq!(classify(None, t), DayStatus::Absent);
    }

    #[test]
    fn test_zero_duration_is_absent() {
        let t = Some(at("2025-06-10T09:00:00Z"));
        assert_eq!(classify(t, t), DayStatus::Absent);
    }

    #[test]
    fn test_negative_duration_is_absent() {
        assert_eq!(classify_after_millis(-3 * HOUR), DayStatus::Absent);
    }

    #[test]
    fn test_exactly_eight_hours_is_present() {
        assert_eq!(classify_after_millis(8 * HOUR), DayStatus::Present);
    }

    #[test]
    fn test_just_under_eight_hours_is_half_day() {
        assert_eq!(classify_after_millis(8 * HOUR - 1), DayStatus::HalfDayPresent);
    }

    #[test]
    fn test_exactly_four_and_half_hours_is_partial() {
        assert_eq!(classify_after_millis(4 * HOUR + HOUR / 2), DayStatus::PartialPresent);
    }

    #[test]
    fn test_four_point_five_zero_zero_one_hours_is_half_day() {
        // 4.5001h = 16_200_360 ms
        assert_eq!(classify_after_millis(16_200_360), DayStatus::HalfDayPresent);
    }

    #[test]
    fn test_exactly_one_hour_is_absent() {
        assert_eq!(classify_after_millis(HOUR), DayStatus::Absent);
    }

    #[test]
    fn test_just_over_one_hour_is_partial() {
        assert_eq!(classify_after_millis(HOUR + 1), DayStatus::PartialPresent);
    }

    #[test]
    fn test_long_shift_is_present() {
        assert_eq!(classify_after_millis(14 * HOUR), DayStatus::Present);
    }

    #[test]
    fn test_morning_half_shift_scenario() {
        let result = classify_punches(
            Some(at("2025-06-10T09:00:00Z")),
            Some(at("2025-06-10T13:30:00Z")),
        );
        assert_eq!(result.status, DayStatus::PartialPresent);
        assert_eq!(result.hours_worked, Some(Decimal::new(45, 1)));
    }

    #[test]
    fn test_overnight_shift_counts_full_duration() {
        let result = classify_punches(
            Some(at("2025-06-10T22:00:00Z")),
            Some(at("2025-06-11T06:00:00Z")),
        );
        assert_eq!(result.status, DayStatus::Present);
        assert_eq!(result.hours_worked, Some(Decimal::new(8, 0)));
    }

    #[test]
    fn test_mixed_offsets_compare_in_utc() {
        // 09:00 IST is 03:30 UTC; 12:00 UTC is 8.5 hours later.
        let result = classify_raw(
            Some("2025-06-10T09:00:00+05:30"),
            Some("2025-06-10T12:00:00Z"),
        );
        assert_eq!(result.status, DayStatus::Present);
        assert_eq!(result.hours_worked, Some(Decimal::new(85, 1)));
    }

    #[test]
    fn test_unparseable_timestamps_are_absent() {
        assert_eq!(
            classify_raw(Some("not-a-time"), Some("2025-06-10T17:00:00Z")).status,
            DayStatus::Absent
        );
        assert_eq!(classify_raw(Some(""), Some("")).status, DayStatus::Absent);
        assert_eq!(classify_raw(None, None).status, DayStatus::Absent);
    }

    #[test]
    fn test_classify_record() {
        let record = AttendanceRecord {
            employee_id: "EMP-001".to_string(),
            date: at("2025-06-10T00:00:00Z").date_naive(),
            punch_in_time: Some(at("2025-06-10T09:00:00Z")),
            punch_out_time: Some(at("2025-06-10T15:00:00Z")),
        };
        let result = classify_record(&record);
        assert_eq!(result.status, DayStatus::HalfDayPresent);
        assert_eq!(result.hours_worked, Some(Decimal::new(6, 0)));
    }

    #[test]
    fn test_threshold_constants() {
        assert_eq!(PRESENT_THRESHOLD_HOURS, Decimal::new(8, 0));
        assert_eq!(HALF_DAY_THRESHOLD_HOURS, Decimal::new(45, 1));
        assert_eq!(PARTIAL_THRESHOLD_HOURS, Decimal::new(1, 0));
    }
}
