//! Core error types for vetcare-core.
//!
//! This module defines the error hierarchy using thiserror so callers
//! can match on failures instead of string-typed errors.

use thiserror::Error;

/// Core error type for vetcare-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Scheduling errors
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Scheduling-specific errors.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A time-of-day string did not parse as HH:mm
    #[error("Invalid time format '{input}': expected HH:mm")]
    InvalidTimeFormat {
        input: String,
        #[source]
        source: chrono::format::ParseError,
    },

    /// A service tag outside the fixed catalogue
    #[error("Invalid service type '{0}'")]
    InvalidServiceType(String),

    /// A patient-category tag outside the fixed pair
    #[error("Invalid patient category '{0}'")]
    InvalidPatientCategory(String),

    /// A required display field was blank
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
