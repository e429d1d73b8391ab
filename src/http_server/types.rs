//! Request/Response wire types
//!
//! Shared by the server handlers and the typed client.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    /// RFC 3339, UTC, millisecond precision
    pub timestamp: String,
    pub student_count: usize,
    pub version: String,
}

/// Body returned by create, update and delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordResponse {
    pub message: String,
    pub student: Record,
}

impl RecordResponse {
    pub fn created(student: Record) -> Self {
        Self::new("Student created successfully", student)
    }

    pub fn updated(student: Record) -> Self {
        Self::new("Student updated successfully", student)
    }

    pub fn deleted(student: Record) -> Self {
        Self::new("Student deleted successfully", student)
    }

    fn new(message: &str, student: Record) -> Self {
        Self {
            message: message.to_string(),
            student,
        }
    }
}

/// Error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
