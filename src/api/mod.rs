//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST API endpoints for classifying punches,
//! summarizing an employee's month and rendering team attendance reports.
//!
//! # Wire format
//!
//! - Object fields are camelCase (`employeeId`, `holidayDays`, `pageSize`).
//! - Enum values are snake_case strings: statuses (`present`,
//!   `half_day_present`, `partial_present`, `absent`), day kinds (`workday`,
//!   `week_off`, `holiday`), report layouts (`summary`, `daily_grid`) and
//!   report columns.
//! - Leave balances are keyed by leave code (`EL`, `SL`, `CL`, `CompOff`).
//!   Codes are matched without regard to case.
//! - Decimal amounts (`hoursWorked`, `totalPayableDays`) are strings, e.g. `"21.5"`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRecordRequest, ClassifyRequest, LeaveBalanceRequest, ReportEmployeeRequest,
    ReportRequest, SummaryRequest,
};
pub use response::{ApiError, ClassifyResponse};
pub use state::AppState;
