//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{EmployeeLeave, Holidays, classify_raw, summarize_period, summarize_team};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{MonthlySummary, ReportPeriod};
use crate::report::{ReportColumn, ReportPage, ReportTable};

use super::request::{
    ClassifyRequest, ReportRequest, SummaryRequest, decode_leave, decode_records,
};
use super::response::{ApiError, ApiErrorResponse, ClassifyResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/classify", post(classify_handler))
        .route("/attendance/summary", post(summary_handler))
        .route("/attendance/report", post(report_handler))
        .with_state(state)
}

/// Serializes `body` as a JSON response with an explicit content type.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including the field path
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Converts an engine error into its mapped status and error body.
fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Handler for POST /attendance/classify.
///
/// Classifies a single punch pair. Unreadable timestamps classify as Absent.
async fn classify_handler(payload: Result<Json<ClassifyRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classify request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let classification = classify_raw(
        request.punch_in_time.as_deref(),
        request.punch_out_time.as_deref(),
    );

    info!(
        correlation_id = %correlation_id,
        status = %classification.status,
        "Classification completed"
    );
    json_response(StatusCode::OK, ClassifyResponse::from(classification))
}

/// Handler for POST /attendance/summary.
///
/// Accepts one employee's records and leave balances and returns their
/// monthly summary.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match build_summary(request, state.config()) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %summary.employee_id,
                loss_of_pay_days = summary.loss_of_pay_days,
                total_payable_days = %summary.total_payable_days,
                duration_us = start_time.elapsed().as_micros(),
                "Summary completed successfully"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /attendance/report.
///
/// Summarizes every listed employee for the month and returns one page of the
/// rendered report table.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match build_report(request, state.config()) {
        Ok(page) => {
            info!(
                correlation_id = %correlation_id,
                total_rows = page.total_rows,
                page = page.page,
                duration_us = start_time.elapsed().as_micros(),
                "Report completed successfully"
            );
            json_response(StatusCode::OK, page)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Picks the request's holiday count, or the configured dates for the period.
fn resolve_holidays<'a>(
    holiday_days: Option<u32>,
    configured: &'a [NaiveDate],
) -> Holidays<'a> {
    match holiday_days {
        Some(count) => Holidays::Count(count),
        None => Holidays::Dates(configured),
    }
}

/// Decodes a summary request and computes the monthly summary.
fn build_summary(request: SummaryRequest, config: &ConfigLoader) -> EngineResult<MonthlySummary> {
    let period = ReportPeriod::new(request.month, request.year)?;
    let records = decode_records(request.records)?;
    let leave = decode_leave(&request.employee_id, request.leave_balance);

    let configured = match request.holiday_days {
        Some(_) => Vec::new(),
        None => config.holiday_dates(&period),
    };

    let holidays = resolve_holidays(request.holiday_days, &configured);
    holidays.validate(&period)?;

    Ok(summarize_period(
        &request.employee_id,
        &period,
        &records,
        &leave.used_by_type(),
        holidays,
    ))
}

/// Decodes a report request, summarizes the team and renders one page.
fn build_report(request: ReportRequest, config: &ConfigLoader) -> EngineResult<ReportPage> {
    let period = ReportPeriod::new(request.month, request.year)?;
    let records = decode_records(request.records)?;
    let employees: Vec<EmployeeLeave> = request.employees.into_iter().map(Into::into).collect();

    let configured = match request.holiday_days {
        Some(_) => Vec::new(),
        None => config.holiday_dates(&period),
    };

    let holidays = resolve_holidays(request.holiday_days, &configured);
    holidays.validate(&period)?;

    let summaries = summarize_team(&period, &employees, &records, holidays);

    let columns = ReportColumn::for_layout(request.layout, period.days_in_month());
    ReportTable::new(columns, summaries).apply(&request.query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::AttendanceRecordRequest;
    use crate::models::DayStatus;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: String) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    fn full_day(date: &str) -> AttendanceRecordRequest {
        AttendanceRecordRequest {
            employee_id: "EMP-001".to_string(),
            date: date.to_string(),
            punch_in_time: Some(format!("{}T09:00:00Z", date)),
            punch_out_time: Some(format!("{}T17:30:00Z", date)),
        }
    }

    #[tokio::test]
    async fn test_classify_partial_day() {
        let request = ClassifyRequest {
            punch_in_time: Some("2025-06-10T09:00:00Z".to_string()),
            punch_out_time: Some("2025-06-10T13:30:00Z".to_string()),
        };
        let response =
            post_json("/attendance/classify", serde_json::to_string(&request).unwrap()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: ClassifyResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(result.status, DayStatus::PartialPresent);
        assert_eq!(result.code, "PP");
        assert_eq!(result.hours_worked, Some(Decimal::new(45, 1)));
    }

    #[tokio::test]
    async fn test_classify_missing_punch_is_absent() {
        let body = r#"{"punchInTime":"2025-06-10T09:00:00Z","punchOutTime":null}"#;
        let response = post_json("/attendance/classify", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let result: ClassifyResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(result.status, DayStatus::Absent);
        assert_eq!(result.hours_worked, None);
    }

    #[tokio::test]
    async fn test_summary_uses_configured_holidays() {
        // October 2025: 23 workdays, holidays on Thu 2nd and Mon 20th.
        let body = serde_json::json!({
            "employeeId": "EMP-001",
            "month": 10,
            "year": 2025,
            "records": [full_day("2025-10-01")],
        });
        let response = post_json("/attendance/summary", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let summary: MonthlySummary = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(summary.holiday_days, 2);
        assert_eq!(summary.present_days, 1);
        assert_eq!(summary.loss_of_pay_days, 20);
    }

    #[tokio::test]
    async fn test_summary_explicit_holiday_count_overrides_calendar() {
        let body = serde_json::json!({
            "employeeId": "EMP-001",
            "month": 10,
            "year": 2025,
            "holidayDays": 0,
        });
        let response = post_json("/attendance/summary", body.to_string()).await;

        let summary: MonthlySummary = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(summary.holiday_days, 0);
        assert_eq!(summary.loss_of_pay_days, 23);
    }

    #[tokio::test]
    async fn test_summary_invalid_month_returns_400() {
        let body = r#"{"employeeId":"EMP-001","month":13,"year":2025}"#;
        let response = post_json("/attendance/summary", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_PERIOD");
    }

    #[tokio::test]
    async fn test_summary_holiday_count_past_month_end_returns_400() {
        let body = r#"{"employeeId":"EMP-001","month":2,"year":2023,"holidayDays":100}"#;
        let response = post_json("/attendance/summary", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_HOLIDAYS");
        assert!(error.message.contains("28-day month"));
    }

    #[tokio::test]
    async fn test_summary_unreadable_record_date_returns_400() {
        let body = serde_json::json!({
            "employeeId": "EMP-001",
            "month": 6,
            "year": 2025,
            "records": [{"employeeId": "EMP-001", "date": "June 10th"}],
        });
        let response = post_json("/attendance/summary", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_RECORD");
    }

    #[tokio::test]
    async fn test_summary_missing_employee_id_returns_validation_error() {
        let body = r#"{"month":6,"year":2025}"#;
        let response = post_json("/attendance/summary", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("employeeId"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = post_json("/attendance/summary", "{invalid json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_report_daily_grid_page() {
        let body = serde_json::json!({
            "month": 9,
            "year": 2025,
            "employees": [{"employeeId": "EMP-001"}, {"employeeId": "EMP-002"}],
            "records": [full_day("2025-09-01")],
            "layout": "daily_grid",
            "query": {"pageSize": 1},
        });
        let response = post_json("/attendance/report", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let page: ReportPage = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(page.headers.len(), 31);
        assert_eq!(page.total_rows, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0][0], "EMP-001");
        assert_eq!(page.rows[0][1], "P");
        assert_eq!(page.rows[0][6], "WO");
    }

    #[tokio::test]
    async fn test_report_zero_page_size_returns_invalid_query() {
        let body = serde_json::json!({
            "month": 9,
            "year": 2025,
            "employees": [{"employeeId": "EMP-001"}],
            "query": {"pageSize": 0},
        });
        let response = post_json("/attendance/report", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_QUERY");
    }

    #[tokio::test]
    async fn test_report_holiday_count_past_month_end_returns_400() {
        let body = serde_json::json!({
            "month": 9,
            "year": 2025,
            "employees": [{"employeeId": "EMP-001"}],
            "holidayDays": 31,
        });
        let response = post_json("/attendance/report", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_HOLIDAYS");
    }
}
