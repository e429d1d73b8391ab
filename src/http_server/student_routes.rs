//! Student HTTP Routes
//!
//! CRUD and search endpoints over the record store.
//!
//! Validation runs before the store is touched, on create and update alike.
//! An update with a bad body is therefore a 400 even if the id is absent.

use std::sync::Arc;

use axum::{
    async_trait,
    body::{to_bytes, Body},
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::{method_not_allowed, ApiError, ApiResult};
use super::types::RecordResponse;
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::store::{Record, RecordInput, RecordStore, StoreError};

// ==================
// Shared State
// ==================

/// State shared across student and health handlers
pub struct StudentsState {
    pub store: Arc<RecordStore>,
    pub metrics: Arc<MetricsRegistry>,
}

impl StudentsState {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }

    /// Count and log a failed request, passing the error through.
    fn observe_failure(&self, err: ApiError) -> ApiError {
        match &err {
            ApiError::Validation(_) | ApiError::InvalidBody(_) => {
                self.metrics.increment_validation_rejections();
                let reason = err.to_string();
                log_event_with_fields(Event::ValidationRejected, &[("reason", reason.as_str())]);
            }
            ApiError::Store(StoreError::NotFound(id)) => {
                self.metrics.increment_lookups_missed();
                log_event_with_fields(Event::RecordNotFound, &[("id", id.to_string().as_str())]);
            }
            ApiError::UnknownId(raw) => {
                self.metrics.increment_lookups_missed();
                log_event_with_fields(Event::RecordNotFound, &[("id", raw.as_str())]);
            }
            ApiError::RouteNotFound(_) | ApiError::MethodNotAllowed | ApiError::Internal(_) => {}
        }
        err
    }
}

// ==================
// Student Routes
// ==================

/// Create student routes
pub fn student_routes(state: Arc<StudentsState>) -> Router {
    Router::new()
        .route(
            "/students",
            get(list_students)
                .post(create_student)
                .fallback(method_not_allowed),
        )
        .route(
            "/students/search",
            get(search_all_students).fallback(search_is_not_an_id),
        )
        .route(
            "/students/search/:query",
            get(search_students).fallback(method_not_allowed),
        )
        .route(
            "/students/:id",
            get(get_student)
                .put(update_student)
                .delete(delete_student)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

// ==================
// Extractors
// ==================

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Record body that treats an absent or blank payload as `{}`.
///
/// An empty body then fails validation with "All fields are required"
/// instead of a decode error. Non-empty bodies go through `Json`.
pub struct RecordBody(pub RecordInput);

#[async_trait]
impl<S> FromRequest<S> for RecordBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(RecordInput::default()));
        }

        let request = Request::from_parts(parts, Body::from(bytes));
        let Json(input) = Json::<RecordInput>::from_request(request, state).await?;
        Ok(Self(input))
    }
}

// ==================
// Helper Functions
// ==================

/// Ids are decimal `u64`. Anything else cannot name a record.
fn parse_id(raw: &str) -> ApiResult<u64> {
    raw.parse::<u64>()
        .map_err(|_| ApiError::UnknownId(raw.to_string()))
}

// ==================
// Handlers
// ==================

/// GET /api/students
async fn list_students(State(state): State<Arc<StudentsState>>) -> Json<Vec<Record>> {
    Json(state.store.list())
}

/// GET /api/students/:id
async fn get_student(
    State(state): State<Arc<StudentsState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Record>> {
    let result = parse_id(&raw_id).and_then(|id| state.store.get(id).map_err(ApiError::from));
    result.map(Json).map_err(|e| state.observe_failure(e))
}

/// POST /api/students
async fn create_student(
    State(state): State<Arc<StudentsState>>,
    payload: Result<RecordBody, ApiError>,
) -> ApiResult<(StatusCode, Json<RecordResponse>)> {
    let fields = payload
        .and_then(|RecordBody(input)| input.normalize().map_err(ApiError::from))
        .map_err(|e| state.observe_failure(e))?;

    let record = state.store.insert(fields);
    state.metrics.increment_created();
    log_event_with_fields(
        Event::RecordCreated,
        &[("id", record.id.to_string().as_str()), ("name", record.name.as_str())],
    );

    Ok((StatusCode::CREATED, Json(RecordResponse::created(record))))
}

/// PUT /api/students/:id
async fn update_student(
    State(state): State<Arc<StudentsState>>,
    Path(raw_id): Path<String>,
    payload: Result<RecordBody, ApiError>,
) -> ApiResult<Json<RecordResponse>> {
    let result = payload
        .and_then(|RecordBody(input)| input.normalize().map_err(ApiError::from))
        .and_then(|fields| {
            let id = parse_id(&raw_id)?;
            state.store.update(id, fields).map_err(ApiError::from)
        });
    let record = result.map_err(|e| state.observe_failure(e))?;

    state.metrics.increment_updated();
    log_event_with_fields(Event::RecordUpdated, &[("id", record.id.to_string().as_str())]);

    Ok(Json(RecordResponse::updated(record)))
}

/// DELETE /api/students/:id
async fn delete_student(
    State(state): State<Arc<StudentsState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<RecordResponse>> {
    let result = parse_id(&raw_id).and_then(|id| state.store.remove(id).map_err(ApiError::from));
    let record = result.map_err(|e| state.observe_failure(e))?;

    state.metrics.increment_deleted();
    log_event_with_fields(Event::RecordDeleted, &[("id", record.id.to_string().as_str())]);

    Ok(Json(RecordResponse::deleted(record)))
}

/// GET /api/students/search/:query
async fn search_students(
    State(state): State<Arc<StudentsState>>,
    Path(query): Path<String>,
) -> Json<Vec<Record>> {
    state.metrics.increment_searches();
    Json(state.store.search(&query))
}

/// GET /api/students/search
async fn search_all_students(State(state): State<Arc<StudentsState>>) -> Json<Vec<Record>> {
    state.metrics.increment_searches();
    Json(state.store.search(""))
}

/// Any other method on /api/students/search addresses the id "search"
async fn search_is_not_an_id(State(state): State<Arc<StudentsState>>) -> ApiError {
    state.observe_failure(ApiError::UnknownId("search".to_string()))
}
