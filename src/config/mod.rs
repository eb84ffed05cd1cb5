//! Configuration loading and management for the Attendance Engine.
//!
//! This module provides functionality to load organisation metadata and the
//! holiday calendar from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded organisation: {}", config.organisation().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, Holiday, HolidayCalendarFile, OrganisationMetadata};
