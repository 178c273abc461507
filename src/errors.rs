//! Centralized error handling.
//!
//! Provides a unified error type for the fixture crate. The only defined
//! error path is record validation; task-join failures surface as internal
//! errors. Lookup misses are represented by `Option`, never by an error.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// A record failed validation (missing or null required fields).
    #[error("{0}")]
    Validation(String),

    /// Unexpected runtime failure, e.g. a spawned task that panicked.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
