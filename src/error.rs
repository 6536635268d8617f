//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Message shown when a submission is missing its description or amount
pub const INCOMPLETE_SUBMISSION_MESSAGE: &str = "Please enter a description and amount";

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A new transaction was submitted without a description or amount
    #[error("{}", INCOMPLETE_SUBMISSION_MESSAGE)]
    IncompleteSubmission,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl TrackerError {
    /// Check if this is the incomplete-submission warning
    pub fn is_incomplete_submission(&self) -> bool {
        matches!(self, Self::IncompleteSubmission)
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
