//! Monthly summary models.
//!
//! This module contains the [`MonthlySummary`] type produced by the monthly
//! aggregator, and the per-day [`DayEntry`] rows that back the monthly grid.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DayKind, DayStatus, LeaveType, LeaveUsage};

/// One calendar day of an employee's month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    /// The calendar day.
    pub date: NaiveDate,
    /// Workday, week-off or holiday.
    pub day_kind: DayKind,
    /// The classified status. `None` for an off day that was not worked.
    pub status: Option<DayStatus>,
    /// Hours between punch-in and punch-out, when both punches exist.
    pub hours_worked: Option<Decimal>,
}

/// Attendance and payroll day counts for one employee and one month.
///
/// Recomputed on every view; never persisted.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::summarize;
/// use attendance_engine::models::LeaveUsage;
/// use rust_decimal::Decimal;
///
/// let summary = summarize("EMP-001", 2, 2023, &[], &LeaveUsage::new(), 0).unwrap();
/// assert_eq!(summary.total_days_in_month, 28);
/// assert_eq!(summary.week_off_days, 8);
/// assert_eq!(summary.loss_of_pay_days, 20);
/// assert_eq!(summary.total_payable_days, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    /// The employee summarized.
    pub employee_id: String,
    /// Month number, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Calendar days in the month.
    pub total_days_in_month: u32,
    /// Days classified Present.
    pub present_days: u32,
    /// Days classified HalfDayPresent.
    pub half_days: u32,
    /// Days classified PartialPresent.
    pub partial_absent_days: u32,
    /// Saturdays and Sundays in the month.
    pub week_off_days: u32,
    /// Holidays in the month, as supplied by the caller.
    pub holiday_days: u32,
    /// Leave days used per leave type.
    pub used_leave_by_type: LeaveUsage,
    /// Absent days that reduce pay, after any holiday-count deduction.
    pub loss_of_pay_days: u32,
    /// Fractional payroll basis for the month.
    pub total_payable_days: Decimal,
    /// Per-day breakdown in calendar order.
    #[serde(default)]
    pub days: Vec<DayEntry>,
}

impl MonthlySummary {
    /// Total leave days used across all leave types.
    pub fn leave_days_total(&self) -> u64 {
        self.used_leave_by_type
            .values()
            .map(|used| u64::from(*used))
            .sum()
    }

    /// Leave days used for one leave type (zero when absent from the snapshot).
    pub fn leave_used(&self, leave_type: LeaveType) -> u32 {
        self.used_leave_by_type
            .get(&leave_type)
            .copied()
            .unwrap_or(0)
    }

    /// Number of days in the breakdown carrying `status`.
    ///
    /// Entries keep the per-day classification. When holidays were supplied as
    /// a count, Absent entries can outnumber [`loss_of_pay_days`](Self::loss_of_pay_days).
    pub fn count_status(&self, status: DayStatus) -> usize {
        self.days
            .iter()
            .filter(|entry| entry.status == Some(status))
            .count()
    }

    /// Returns the breakdown entry for `date`, if it is in this month.
    pub fn day(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.days.iter().find(|entry| entry.date == date)
    }
}
