//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance_record;
mod day_status;
mod leave;
mod monthly_summary;
mod report_period;

pub use attendance_record::{AttendanceRecord, parse_record_date, parse_timestamp};
pub use day_status::{DayKind, DayStatus};
pub use leave::{LeaveBalance, LeaveSnapshot, LeaveType, LeaveUsage};
pub use monthly_summary::{DayEntry, MonthlySummary};
pub use report_period::ReportPeriod;
