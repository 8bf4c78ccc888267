//! Integration tests for the HTTP API.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use geoplot::{Area, Circle, Icon, LatLng, Map, Marker, PageOptions, Polyline};
use geoplot_service::{app, config::sample_map, AppState};
use serde_json::Value;

/// Create a test server serving the given map.
fn create_test_server(map: Map) -> TestServer {
    let state = Arc::new(AppState {
        map,
        page: PageOptions::default(),
    });
    TestServer::new(app(state)).unwrap()
}

/// A map whose marker points at an icon handle it does not own.
fn broken_map() -> Map {
    let mut other = Map::new();
    other.add_icon(Icon::default());
    let foreign = other.add_icon(Icon::default());

    let mut map = Map::new();
    map.add_marker(Marker::new(LatLng::new(0.0, 0.0), "").with_icon(foreign));
    map
}

fn inline_script(page: &str) -> &str {
    let start = page.find("<script>").unwrap() + "<script>".len();
    let end = start + page[start..].find("</script>").unwrap();
    &page[start..end]
}

#[tokio::test]
async fn test_map_page() {
    let server = create_test_server(sample_map());

    let response = server.get("/").await;

    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let page = response.text();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.trim_end().ends_with("</html>"));
    assert_eq!(page.matches("<script>").count(), 1);

    let head_end = page.find("</head>").unwrap();
    let body_start = page.find("<body>").unwrap();
    let script_start = page.find("<script>").unwrap();
    let body_end = page.find("</body>").unwrap();
    assert!(page.find("<head>").unwrap() < head_end);
    assert!(head_end < body_start);
    assert!(body_start < script_start);
    let script_end = script_start + page[script_start..].find("</script>").unwrap();
    assert!(page[script_end + "</script>".len()..body_end].trim().is_empty());

    let script = inline_script(&page);
    let icon = script.find("= L.icon(").unwrap();
    let marker = script.find("L.marker([35.658584, 139.745432]").unwrap();
    let polyline = script.find("L.polyline(").unwrap();
    assert!(icon < marker);
    assert!(marker < polyline);
    assert!(!script.contains("L.circle("));
}

#[tokio::test]
async fn test_map_page_render_failure() {
    let server = create_test_server(broken_map());

    let response = server.get("/").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("Unknown icon"));
}

#[tokio::test]
async fn test_statements_endpoint() {
    let tower = LatLng::new(35.658584, 139.7454316);
    let mut map = Map::new();
    map.zoom = 7;
    map.center = Some(tower);
    map.area = Some(Area::new(tower.offset(-1.0, -1.0), tower.offset(1.0, 1.0)));
    let pin = map.add_icon(Icon::color(255, 0, 0));
    map.add_marker(Marker::new(tower, "a").with_icon(pin));
    map.add_marker(Marker::new(tower.offset(0.1, 0.1), "b").with_icon(pin));
    map.add_circle(Circle::new(tower, 500, "c"));
    map.add_polyline(Polyline::new(Vec::new(), "d"));

    let server = create_test_server(map);
    let response = server.get("/statements").await;

    response.assert_status_ok();
    let json: Value = response.json();
    let statements: Vec<&str> = json["statements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();

    assert_eq!(statements.len(), 6);
    assert!(statements[0].starts_with("map.setZoom(7); map.setView([35.658584, 139.745432]);"));
    assert!(statements[1].contains("= L.divIcon("));
    assert!(statements[2].starts_with("L.circle("));
    assert!(statements[3].starts_with("L.marker("));
    assert!(statements[4].starts_with("L.marker("));
    assert_eq!(statements[5], r#"L.polyline([], {}).addTo(map).bindPopup("d");"#);
}

#[tokio::test]
async fn test_statements_render_failure() {
    let server = create_test_server(broken_map());

    let response = server.get("/statements").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_repeated_requests_rename_icons() {
    let server = create_test_server(sample_map());

    let first: Value = server.get("/statements").await.json();
    let second: Value = server.get("/statements").await.json();

    // Icon names are chosen per render
    assert_ne!(first["statements"][0], second["statements"][0]);
    assert_eq!(first["statements"][2], second["statements"][2]);
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server(Map::new());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].as_str().is_some());
}

#[tokio::test]
async fn test_unknown_route() {
    let server = create_test_server(Map::new());

    let response = server.get("/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
}
