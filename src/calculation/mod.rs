//! Calculation logic for the Attendance Engine.
//!
//! This module contains the attendance status classifier, calendar helpers for
//! week-off detection and month lengths, the payable day formula, the monthly
//! aggregator for a single employee, and the team-wide fan-out over it.

mod calendar;
mod monthly_summary;
mod payable_days;
mod status;
mod team_summary;

pub use calendar::{count_week_off_days, count_workdays, days_in_month, get_day_kind};
pub use monthly_summary::{Holidays, summarize, summarize_period};
pub use payable_days::total_payable_days;
pub use status::{
    Classification, HALF_DAY_THRESHOLD_HOURS, PARTIAL_THRESHOLD_HOURS, PRESENT_THRESHOLD_HOURS,
    classify, classify_punches, classify_raw, classify_record, hours_worked, status_for_hours,
};
pub use team_summary::{EmployeeLeave, summarize_team};
