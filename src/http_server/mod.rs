//! # HTTP Server Module
//!
//! JSON API and browser UI for the student record store, combined into one
//! Axum server.
//!
//! # Endpoints
//!
//! - `/` - Management UI
//! - `/api/health` - Health check
//! - `/api/metrics` - Service counters
//! - `/api/students` - List and create
//! - `/api/students/:id` - Get, replace, delete
//! - `/api/students/search/:query` - Case-insensitive search

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod student_routes;
pub mod types;
pub mod ui_routes;

pub use config::{HttpServerConfig, DEFAULT_PORT};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use student_routes::StudentsState;
pub use types::{ErrorResponse, HealthResponse, RecordResponse};
