//! # Store Errors
//!
//! Error types for the record store and record validation.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for input normalization
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Store errors
///
/// Absence is the only thing the store can report. It is terminal for the
/// request that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No live record carries this id
    #[error("Student not found")]
    NotFound(u64),
}

/// Record validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent, null or blank
    #[error("All fields are required")]
    MissingFields,

    /// Age is present but not an integer
    #[error("Age must be a whole number")]
    InvalidAge,
}
