//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while deriving attendance summaries.
//!
//! Malformed punch timestamps are not errors. The status classifier treats
//! them as a missing punch, which makes the day Absent.

use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::InvalidPeriod { month: 13, year: 2025 };
/// assert_eq!(error.to_string(), "Invalid report period: month 13 of year 2025");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested month/year does not name a calendar month.
    #[error("Invalid report period: month {month} of year {year}")]
    InvalidPeriod {
        /// The requested month (expected 1-12).
        month: u32,
        /// The requested year.
        year: i32,
    },

    /// An attendance record could not be decoded into a well-typed record.
    #[error("Invalid attendance record for employee '{employee_id}': {message}")]
    InvalidRecord {
        /// The employee the record belongs to.
        employee_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A holiday count does not fit in the month it was supplied for.
    #[error("Invalid holiday count: {count} holidays in a {days_in_month}-day month")]
    InvalidHolidays {
        /// The supplied holiday count.
        count: u32,
        /// Calendar days in the month.
        days_in_month: u32,
    },

    /// A report query had parameters that cannot be satisfied.
    #[error("Invalid report query: {message}")]
    InvalidQuery {
        /// A description of the problem.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
