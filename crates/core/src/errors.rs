//! Core error types for the Wheeler analytics engine.
//!
//! The calculators in this crate never fail. Errors only come from the
//! collaborators (record and config repositories) and from parsing caller
//! supplied month bounds.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type raised by repository implementations.
///
/// Storage layers convert their driver errors into this shape so that the
/// core never depends on a particular database crate.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid month key '{0}', expected YYYY-MM")]
    InvalidMonthKey(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}
