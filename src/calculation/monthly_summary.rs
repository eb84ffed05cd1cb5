//! Monthly attendance aggregation.
//!
//! Walks every calendar day of a month for one employee, classifies the day's
//! record and tallies the per-status day counts and payable days.
//!
//! # Days without a record
//!
//! - A week-off (Saturday/Sunday) or dated holiday without a worked record is
//!   an off day. It is never Absent and never loss of pay.
//! - A worked off day (Present, HalfDayPresent or PartialPresent) counts in
//!   its status bucket like any workday.
//! - A workday without a record, or whose record classifies as Absent, is
//!   Absent and counts as loss of pay.
//! - When holidays are only known as a count, they cannot be placed on the
//!   calendar. The count is then deducted from the Absent workday pool
//!   (saturating at zero), on the assumption that holidays are un-punched
//!   workdays. The per-day entries keep their Absent status, so
//!   `loss_of_pay_days` can be lower than the number of Absent entries.
//!   A count larger than the month is rejected.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, DayEntry, DayKind, DayStatus, LeaveUsage, MonthlySummary, ReportPeriod,
};

use super::calendar::{count_week_off_days, get_day_kind};
use super::payable_days::total_payable_days;
use super::status::classify_record;

/// How holidays are known to the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holidays<'a> {
    /// Only the number of holidays in the month is known.
    Count(u32),
    /// The holiday dates are known. Dates outside the month are ignored.
    Dates(&'a [NaiveDate]),
}

impl Holidays<'_> {
    /// Checks that a holiday count fits in `period`.
    ///
    /// Dated holidays always fit, since dates outside the month are ignored.
    pub fn validate(&self, period: &ReportPeriod) -> EngineResult<()> {
        match *self {
            Holidays::Count(count) if count > period.days_in_month() => {
                Err(EngineError::InvalidHolidays {
                    count,
                    days_in_month: period.days_in_month(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Summarizes one employee's month.
///
/// Records for other employees or other months are ignored.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriod`]
/// when `month`/`year` does not name a calendar month, and
/// [`EngineError::InvalidHolidays`] when `holiday_days` exceeds the month's length.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::summarize;
/// use attendance_engine::models::{parse_timestamp, AttendanceRecord, LeaveUsage};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![AttendanceRecord {
///     employee_id: "EMP-001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
///     punch_in_time: parse_timestamp("2025-06-10T09:00:00Z"),
///     punch_out_time: parse_timestamp("2025-06-10T13:30:00Z"),
/// }];
///
/// let summary = summarize("EMP-001", 6, 2025, &records, &LeaveUsage::new(), 0).unwrap();
/// assert_eq!(summary.partial_absent_days, 1);
/// assert_eq!(summary.total_payable_days, Decimal::new(25, 2));
/// ```
pub fn summarize(
    employee_id: &str,
    month: u32,
    year: i32,
    records: &[AttendanceRecord],
    leave_usage: &LeaveUsage,
    holiday_days: u32,
) -> EngineResult<MonthlySummary> {
    let period = ReportPeriod::new(month, year)?;
    let holidays = Holidays::Count(holiday_days);
    holidays.validate(&period)?;
    Ok(summarize_period(
        employee_id,
        &period,
        records,
        leave_usage,
        holidays,
    ))
}

/// Summarizes one employee's month for an already validated period.
///
/// A holiday count is capped at the month's length; callers that need to
/// reject oversized counts run [`Holidays::validate`] first.
pub fn summarize_period<'r, I>(
    employee_id: &str,
    period: &ReportPeriod,
    records: I,
    leave_usage: &LeaveUsage,
    holidays: Holidays<'_>,
) -> MonthlySummary
where
    I: IntoIterator<Item = &'r AttendanceRecord>,
{
    let by_date = index_records(employee_id, period, records);

    let holiday_dates: Vec<NaiveDate> = match holidays {
        Holidays::Count(_) => Vec::new(),
        Holidays::Dates(dates) => {
            let mut in_month: Vec<NaiveDate> = dates
                .iter()
                .copied()
                .filter(|date| period.contains_date(*date))
                .collect();
            in_month.sort_unstable();
            in_month.dedup();
            in_month
        }
    };

    let mut present_days = 0u32;
    let mut half_days = 0u32;
    let mut partial_absent_days = 0u32;
    let mut absent_days = 0u32;
    let mut days = Vec::with_capacity(period.days_in_month() as usize);

    for date in period.days() {
        let day_kind = if holiday_dates.binary_search(&date).is_ok() {
            DayKind::Holiday
        } else {
            get_day_kind(date)
        };

        let classification = by_date.get(&date).map(|record| classify_record(record));

        let status = match classification {
            Some(c) if c.status.is_worked() => Some(c.status),
            _ if day_kind.is_off() => None,
            _ => Some(DayStatus::Absent),
        };

        match status {
            Some(DayStatus::Present) => present_days += 1,
            Some(DayStatus::HalfDayPresent) => half_days += 1,
            Some(DayStatus::PartialPresent) => partial_absent_days += 1,
            Some(DayStatus::Absent) => absent_days += 1,
            None => {}
        }

        days.push(DayEntry {
            date,
            day_kind,
            status,
            hours_worked: classification.and_then(|c| c.hours_worked),
        });
    }

    let (holiday_days, loss_of_pay_days) = match holidays {
        Holidays::Count(count) => {
            let count = count.min(period.days_in_month());
            (count, absent_days.saturating_sub(count))
        }
        Holidays::Dates(_) => (holiday_dates.len() as u32, absent_days),
    };

    let total_payable_days =
        total_payable_days(present_days, half_days, partial_absent_days, leave_usage);

    debug!(
        employee_id = %employee_id,
        period = %period,
        present_days,
        half_days,
        partial_absent_days,
        loss_of_pay_days,
        total_payable_days = %total_payable_days,
        "Monthly summary computed"
    );

    MonthlySummary {
        employee_id: employee_id.to_string(),
        month: period.month(),
        year: period.year(),
        total_days_in_month: period.days_in_month(),
        present_days,
        half_days,
        partial_absent_days,
        week_off_days: count_week_off_days(period),
        holiday_days,
        used_leave_by_type: leave_usage.clone(),
        loss_of_pay_days,
        total_payable_days,
        days,
    }
}

/// Indexes the employee's in-month records by date. The first record of a day wins.
fn index_records<'r, I>(
    employee_id: &str,
    period: &ReportPeriod,
    records: I,
) -> HashMap<NaiveDate, &'r AttendanceRecord>
where
    I: IntoIterator<Item = &'r AttendanceRecord>,
{
    let mut by_date: HashMap<NaiveDate, &AttendanceRecord> = HashMap::new();
    let mut skipped = 0usize;

    for record in records {
        if !record.belongs_to(employee_id, period) {
            skipped += 1;
            continue;
        }

        if by_date.contains_key(&record.date) {
            warn!(
                employee_id = %employee_id,
                date = %record.date,
                "Duplicate attendance record ignored"
            );
            continue;
        }

        by_date.insert(record.date, record);
    }

    if skipped > 0 {
        debug!(
            employee_id = %employee_id,
            period = %period,
            skipped,
            "Ignored records for other employees or months"
        );
    }

    by_date
}
