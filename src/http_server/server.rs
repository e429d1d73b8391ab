//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::OriginalUri;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::errors::ApiError;
use super::observability_routes::observability_routes;
use super::student_routes::{student_routes, StudentsState};
use super::ui_routes::ui_routes;
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};
use crate::store::RecordStore;

/// HTTP server for the student service
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<StudentsState>,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration and the demo records
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a server with custom configuration and the demo records
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_store(config, Arc::new(RecordStore::seeded()))
    }

    /// Create a server over an existing store
    pub fn with_store(config: HttpServerConfig, store: Arc<RecordStore>) -> Self {
        let state = Arc::new(StudentsState::new(store));
        let router = Self::build_router(&config, state.clone());
        Self {
            config,
            state,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: Arc<StudentsState>) -> Router {
        let cors = if config.is_permissive() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(ui_routes())
            .nest(
                "/api",
                observability_routes(state.clone()).merge(student_routes(state)),
            )
            .fallback(route_not_found)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(cors),
            )
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared record store
    pub fn store(&self) -> Arc<RecordStore> {
        self.state.store.clone()
    }

    /// Service counters
    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        self.state.metrics.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> io::Result<()> {
        log_event(Event::ServerStart);

        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener.local_addr()?.to_string();
        let count = self.state.store.len().to_string();
        log_event_with_fields(
            Event::ServerReady,
            &[("addr", local.as_str()), ("student_count", count.as_str())],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        log_event(Event::ServerShutdown);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Nested routers inherit this fallback, so read the unstripped URI
async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
