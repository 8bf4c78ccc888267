//! geoplot Service Library
//!
//! HTTP handlers and router for serving a geoplot map.
//! This library is used by both the geoplot-service binary and integration tests.

pub mod config;
pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use geoplot::{Map, PageOptions};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state shared across handlers.
///
/// The map is only read while rendering, so requests share it without a lock.
pub struct AppState {
    /// Map served on every request.
    pub map: Map,
    /// Page presentation settings.
    pub page: PageOptions,
}

/// Build the service router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::get_map))
        .route("/statements", get(handlers::get_statements))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

// Re-export commonly used types for convenience
pub use config::ServiceConfig;
pub use handlers::{ErrorResponse, HealthResponse, StatementsResponse};
