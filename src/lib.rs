//! Attendance Engine for HR and facility-management payroll
//!
//! This crate classifies daily punch-in/punch-out pairs into attendance
//! statuses (Present, Half Day, Partial, Absent), aggregates them into
//! monthly payroll day counts per employee, and renders filterable,
//! paginated report tables over those summaries.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
