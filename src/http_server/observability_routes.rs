//! Observability HTTP Routes
//!
//! Health check and service counters.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};

use super::errors::method_not_allowed;
use super::student_routes::StudentsState;
use super::types::HealthResponse;
use crate::observability::MetricsSnapshot;

/// Create observability routes
pub fn observability_routes(state: Arc<StudentsState>) -> Router {
    Router::new()
        .route("/health", get(health_handler).fallback(method_not_allowed))
        .route("/metrics", get(metrics_handler).fallback(method_not_allowed))
        .with_state(state)
}

/// GET /api/health
async fn health_handler(State(state): State<Arc<StudentsState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Student Management Backend is running".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        student_count: state.store.len(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/metrics
async fn metrics_handler(State(state): State<Arc<StudentsState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
