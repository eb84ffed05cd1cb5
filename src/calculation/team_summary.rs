//! Team-wide monthly summaries.
//!
//! Summarizes every listed employee for one month from a single, mixed batch
//! of attendance records. Each employee is computed independently.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{AttendanceRecord, LeaveSnapshot, MonthlySummary, ReportPeriod};

use super::monthly_summary::{Holidays, summarize_period};

/// An employee to summarize, with their leave snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeLeave {
    /// The employee identifier.
    pub employee_id: String,
    /// The employee's leave balances.
    #[serde(default)]
    pub leave: LeaveSnapshot,
}

/// Summarizes a month for every employee in `employees`.
///
/// Output order follows `employees`. Records for employees that are not listed
/// are ignored.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{summarize_team, EmployeeLeave, Holidays};
/// use attendance_engine::models::ReportPeriod;
///
/// let period = ReportPeriod::new(9, 2025).unwrap();
/// let employees = vec![
///     EmployeeLeave { employee_id: "EMP-002".to_string(), ..Default::default() },
///     EmployeeLeave { employee_id: "EMP-001".to_string(), ..Default::default() },
/// ];
///
/// let summaries = summarize_team(&period, &employees, &[], Holidays::Count(0));
/// assert_eq!(summaries[0].employee_id, "EMP-002");
/// assert_eq!(summaries[1].loss_of_pay_days, 22);
/// ```
pub fn summarize_team(
    period: &ReportPeriod,
    employees: &[EmployeeLeave],
    records: &[AttendanceRecord],
    holidays: Holidays<'_>,
) -> Vec<MonthlySummary> {
    let mut by_employee: HashMap<&str, Vec<&AttendanceRecord>> = HashMap::new();
    for record in records {
        by_employee
            .entry(record.employee_id.as_str())
            .or_default()
            .push(record);
    }

    let summaries: Vec<MonthlySummary> = employees
        .iter()
        .map(|employee| {
            let employee_records = by_employee
                .get(employee.employee_id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();

            summarize_period(
                &employee.employee_id,
                period,
                employee_records.iter().copied(),
                &employee.leave.used_by_type(),
                holidays,
            )
        })
        .collect();

    info!(
        period = %period,
        employees = employees.len(),
        records = records.len(),
        "Team summaries computed"
    );

    summaries
}
