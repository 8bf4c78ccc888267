//! geoplot Service - serve a map as an interactive web page.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `GEOPLOT_PORT` | HTTP server port | 8080 |
//! | `GEOPLOT_MAP_FILE` | JSON map document to serve | built-in sample map |
//! | `GEOPLOT_TITLE` | Page title | "geoplot" |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET /` - The map page
//! - `GET /statements` - Generated Leaflet statements as JSON
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use geoplot_service::{app, handlers, AppState, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the geoplot service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "geoplot Map Service",
        version = "0.1.0",
        description = "Serves a map description as an interactive Leaflet page.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::get_map,
        handlers::get_statements,
        handlers::health_check,
    ),
    components(
        schemas(
            handlers::StatementsResponse,
            handlers::ErrorResponse,
            handlers::HealthResponse,
        )
    ),
    tags(
        (name = "map", description = "Map rendering endpoints"),
        (name = "system", description = "System and health endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geoplot_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();

    if config.map_file.is_none() {
        tracing::warn!("GEOPLOT_MAP_FILE not set, serving the sample map");
    }
    let map = config.load_map()?;

    tracing::info!(
        map_file = ?config.map_file,
        icons = map.icons().len(),
        markers = map.markers().len(),
        polylines = map.polylines().len(),
        circles = map.circles().len(),
        port = config.port,
        "Starting geoplot service"
    );

    let state = Arc::new(AppState {
        map,
        page: config.page,
    });

    let router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(app(state));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
