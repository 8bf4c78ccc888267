//! HTTP request handlers for the map service.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::AppState;

/// Generated Leaflet statements, in page order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatementsResponse {
    /// One statement per viewport, icon, circle, marker and polyline.
    pub statements: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Serve the configured map as an HTML page.
///
/// # Returns
///
/// - `200 OK` with the page on success
/// - `500 Internal Server Error` if rendering fails
#[utoipa::path(
    get,
    path = "/",
    tag = "map",
    responses(
        (status = 200, description = "Interactive map page", body = String, content_type = "text/html"),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    )
)]
pub async fn get_map(State(state): State<Arc<AppState>>) -> Response {
    let mut body: Vec<u8> = Vec::new();
    match geoplot::serve_map_with(&mut body, &state.map, &state.page) {
        Ok(()) => {
            tracing::info!(bytes = body.len(), "Map page served");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

/// List the statements the map page would run.
#[utoipa::path(
    get,
    path = "/statements",
    tag = "map",
    responses(
        (status = 200, description = "Generated statements", body = StatementsResponse),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    )
)]
pub async fn get_statements(State(state): State<Arc<AppState>>) -> Response {
    match geoplot::render_statements(&state.map) {
        Ok(statements) => {
            tracing::debug!(count = statements.len(), "Statements rendered");
            (StatusCode::OK, Json(StatementsResponse { statements })).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Create an error response for a failed render.
fn error_response(e: geoplot::GeoplotError) -> Response {
    tracing::warn!(error = %e, "Map rendering failed");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
