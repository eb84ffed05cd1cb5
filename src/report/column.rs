//! Report columns.
//!
//! A [`ReportColumn`] knows its header label and how to render its cell for a
//! [`MonthlySummary`]. Cells are plain strings so tabular renderers and
//! spreadsheet/PDF exporters can consume them without further formatting.

use serde::{Deserialize, Serialize};

use crate::models::{DayKind, LeaveType, MonthlySummary};

/// A column of the attendance report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "column", content = "value")]
pub enum ReportColumn {
    /// Employee identifier.
    EmployeeId,
    /// Calendar days in the month.
    TotalDays,
    /// Present days.
    Present,
    /// Half days.
    HalfDays,
    /// Partial days.
    PartialDays,
    /// Saturdays and Sundays.
    WeekOffs,
    /// Holidays.
    Holidays,
    /// Leave used of one type.
    Leave(LeaveType),
    /// Loss of pay days.
    LossOfPay,
    /// Payable days.
    PayableDays,
    /// Status code of one day of the month (1-based).
    Day(u32),
}

/// Which set of columns a report shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLayout {
    /// Day counts, leave and payable days per employee.
    #[default]
    Summary,
    /// One status cell per day of the month.
    DailyGrid,
}

impl ReportColumn {
    /// The payroll summary columns, in display order.
    pub fn summary_columns() -> Vec<ReportColumn> {
        let mut columns = vec![
            ReportColumn::EmployeeId,
            ReportColumn::TotalDays,
            ReportColumn::Present,
            ReportColumn::HalfDays,
            ReportColumn::PartialDays,
            ReportColumn::WeekOffs,
            ReportColumn::Holidays,
        ];
        columns.extend(LeaveType::ALL.into_iter().map(ReportColumn::Leave));
        columns.push(ReportColumn::LossOfPay);
        columns.push(ReportColumn::PayableDays);
        columns
    }

    /// Employee id followed by one column per day of a `days_in_month` month.
    pub fn daily_grid_columns(days_in_month: u32) -> Vec<ReportColumn> {
        std::iter::once(ReportColumn::EmployeeId)
            .chain((1..=days_in_month).map(ReportColumn::Day))
            .collect()
    }

    /// Columns for a layout.
    pub fn for_layout(layout: ReportLayout, days_in_month: u32) -> Vec<ReportColumn> {
        match layout {
            ReportLayout::Summary => Self::summary_columns(),
            ReportLayout::DailyGrid => Self::daily_grid_columns(days_in_month),
        }
    }

    /// The header label.
    pub fn header(&self) -> String {
        match self {
            ReportColumn::EmployeeId => "Employee ID".to_string(),
            ReportColumn::TotalDays => "Days".to_string(),
            ReportColumn::Present => "Present".to_string(),
            ReportColumn::HalfDays => "Half Days".to_string(),
            ReportColumn::PartialDays => "Partial".to_string(),
            ReportColumn::WeekOffs => "Week Off".to_string(),
            ReportColumn::Holidays => "Holidays".to_string(),
            ReportColumn::Leave(leave_type) => leave_type.code().to_string(),
            ReportColumn::LossOfPay => "LOP".to_string(),
            ReportColumn::PayableDays => "Payable Days".to_string(),
            ReportColumn::Day(day) => day.to_string(),
        }
    }

    /// Renders this column's cell for one summary.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::calculation::summarize;
    /// use attendance_engine::models::LeaveUsage;
    /// use attendance_engine::report::ReportColumn;
    ///
    /// let summary = summarize("EMP-001", 9, 2025, &[], &LeaveUsage::new(), 0).unwrap();
    /// assert_eq!(ReportColumn::LossOfPay.cell(&summary), "22");
    /// assert_eq!(ReportColumn::Day(1).cell(&summary), "A");  // Monday
    /// assert_eq!(ReportColumn::Day(6).cell(&summary), "WO"); // Saturday
    /// assert_eq!(ReportColumn::Day(31).cell(&summary), "");
    /// ```
    pub fn cell(&self, summary: &MonthlySummary) -> String {
        match self {
            ReportColumn::EmployeeId => summary.employee_id.clone(),
            ReportColumn::TotalDays => summary.total_days_in_month.to_string(),
            ReportColumn::Present => summary.present_days.to_string(),
            ReportColumn::HalfDays => summary.half_days.to_string(),
            ReportColumn::PartialDays => summary.partial_absent_days.to_string(),
            ReportColumn::WeekOffs => summary.week_off_days.to_string(),
            ReportColumn::Holidays => summary.holiday_days.to_string(),
            ReportColumn::Leave(leave_type) => summary.leave_used(*leave_type).to_string(),
            ReportColumn::LossOfPay => summary.loss_of_pay_days.to_string(),
            ReportColumn::PayableDays => summary.total_payable_days.normalize().to_string(),
            ReportColumn::Day(day) => day_cell(summary, *day),
        }
    }
}

fn day_cell(summary: &MonthlySummary, day: u32) -> String {
    let Some(entry) = day
        .checked_sub(1)
        .and_then(|index| summary.days.get(index as usize))
    else {
        return String::new();
    };

    match (entry.status, entry.day_kind) {
        (Some(status), _) => status.code().to_string(),
        (None, DayKind::Holiday) => "H".to_string(),
        (None, _) => "WO".to_string(),
    }
}
