//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structures for the `/attendance/*`
//! endpoints. Field names are camelCase on the wire. Dates and punch times
//! arrive as raw strings and are decoded here, at the boundary, so handlers
//! only ever see well-typed domain values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculation::EmployeeLeave;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, LeaveBalance, LeaveSnapshot, parse_record_date, parse_timestamp,
};
use crate::report::{ReportLayout, ReportQuery};

/// Raw leave balances keyed by leave code (e.g., `"EL"`, `"CompOff"`).
pub type LeaveBalanceRequest = BTreeMap<String, LeaveBalance>;

/// Attendance record as sent by the attendance backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecordRequest {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// Calendar date, as a date (`2025-06-10`) or a date-time.
    pub date: String,
    /// Punch-in timestamp, if the employee punched in.
    #[serde(default)]
    pub punch_in_time: Option<String>,
    /// Punch-out timestamp, if the employee punched out.
    #[serde(default)]
    pub punch_out_time: Option<String>,
}

impl TryFrom<AttendanceRecordRequest> for AttendanceRecord {
    type Error = EngineError;

    /// Decodes a raw record.
    ///
    /// A date that cannot be read is an error. A punch that cannot be read is
    /// treated as missing, which later classifies the day as Absent.
    fn try_from(req: AttendanceRecordRequest) -> EngineResult<Self> {
        let date = parse_record_date(&req.date).ok_or_else(|| EngineError::InvalidRecord {
            employee_id: req.employee_id.clone(),
            message: format!("unreadable date '{}'", req.date),
        })?;

        let punch_in_time = decode_punch(&req.employee_id, req.punch_in_time.as_deref());
        let punch_out_time = decode_punch(&req.employee_id, req.punch_out_time.as_deref());

        Ok(AttendanceRecord {
            employee_id: req.employee_id,
            date,
            punch_in_time,
            punch_out_time,
        })
    }
}

fn decode_punch(employee_id: &str, raw: Option<&str>) -> Option<chrono::DateTime<chrono::Utc>> {
    let raw = raw?;
    let parsed = parse_timestamp(raw);
    if parsed.is_none() {
        debug!(employee_id = %employee_id, punch = %raw, "Unreadable punch treated as missing");
    }
    parsed
}

/// Decodes every record, failing on the first unreadable date.
pub fn decode_records(records: Vec<AttendanceRecordRequest>) -> EngineResult<Vec<AttendanceRecord>> {
    records.into_iter().map(AttendanceRecord::try_from).collect()
}

/// Builds a leave snapshot, logging any leave codes the engine does not know.
pub fn decode_leave(employee_id: &str, balances: Option<LeaveBalanceRequest>) -> LeaveSnapshot {
    let (snapshot, ignored) = LeaveSnapshot::from_codes(balances.unwrap_or_default());
    if !ignored.is_empty() {
        warn!(
            employee_id = %employee_id,
            codes = ?ignored,
            "Ignoring unknown leave codes"
        );
    }
    snapshot
}

/// Request body for the `/attendance/classify` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    /// Punch-in timestamp.
    #[serde(default)]
    pub punch_in_time: Option<String>,
    /// Punch-out timestamp.
    #[serde(default)]
    pub punch_out_time: Option<String>,
}

/// Request body for the `/attendance/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    /// The employee to summarize.
    pub employee_id: String,
    /// Month number, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Attendance records; records for other employees or months are ignored.
    #[serde(default)]
    pub records: Vec<AttendanceRecordRequest>,
    /// Leave balances keyed by leave code.
    #[serde(default)]
    pub leave_balance: Option<LeaveBalanceRequest>,
    /// Number of holidays in the month. The configured calendar is used when omitted.
    #[serde(default)]
    pub holiday_days: Option<u32>,
}

/// An employee listed in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEmployeeRequest {
    /// The employee identifier.
    pub employee_id: String,
    /// Leave balances keyed by leave code.
    #[serde(default)]
    pub leave_balance: Option<LeaveBalanceRequest>,
}

impl From<ReportEmployeeRequest> for EmployeeLeave {
    fn from(req: ReportEmployeeRequest) -> Self {
        let leave = decode_leave(&req.employee_id, req.leave_balance);
        EmployeeLeave {
            employee_id: req.employee_id,
            leave,
        }
    }
}

/// Request body for the `/attendance/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// Month number, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Employees to report on, in display order.
    pub employees: Vec<ReportEmployeeRequest>,
    /// Attendance records for any of the listed employees.
    #[serde(default)]
    pub records: Vec<AttendanceRecordRequest>,
    /// Number of holidays in the month. The configured calendar is used when omitted.
    #[serde(default)]
    pub holiday_days: Option<u32>,
    /// Search, filter and pagination parameters.
    #[serde(default)]
    pub query: ReportQuery,
    /// Column layout.
    #[serde(default)]
    pub layout: ReportLayout,
}
