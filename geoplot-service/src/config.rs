//! Service configuration from environment variables.

use std::path::PathBuf;

use geoplot::{Icon, LatLng, Map, MapDocument, Marker, PageOptions, Point, Polyline, Size};

/// Port used when `GEOPLOT_PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime settings of the map service.
///
/// | Variable | Description | Default |
/// |----------|-------------|---------|
/// | `GEOPLOT_PORT` | HTTP server port | 8080 |
/// | `GEOPLOT_MAP_FILE` | JSON map document to serve | built-in sample map |
/// | `GEOPLOT_TITLE` | Page title | "geoplot" |
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub map_file: Option<PathBuf>,
    pub page: PageOptions,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            map_file: None,
            page: PageOptions::default(),
        }
    }
}

impl ServiceConfig {
    /// Read the configuration from the environment, using defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        let port = std::env::var("GEOPLOT_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let map_file = std::env::var("GEOPLOT_MAP_FILE")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let mut page = PageOptions::default();
        if let Ok(title) = std::env::var("GEOPLOT_TITLE") {
            page.title = title;
        }

        Self {
            port,
            map_file,
            page,
        }
    }

    /// Load the configured map document, or the sample map if none is set.
    pub fn load_map(&self) -> geoplot::Result<Map> {
        match &self.map_file {
            Some(path) => MapDocument::from_file(path)?.into_map(),
            None => Ok(sample_map()),
        }
    }
}

/// A marker on Tokyo Tower with a square around it.
pub fn sample_map() -> Map {
    let tokyo_tower = LatLng::new(35.658584, 139.7454316);

    let mut map = Map::new();
    let google_map_icon = map.add_icon(
        Icon::from_url("https://maps.google.com/mapfiles/ms/icons/red-dot.png")
            .with_size(Size::new(32, 32))
            .with_anchor(Point::new(16, 32)),
    );
    map.add_marker(Marker::new(tokyo_tower, "Hello").with_icon(google_map_icon));
    map.add_polyline(Polyline::new(
        vec![
            tokyo_tower.offset(-0.1, -0.1),
            tokyo_tower.offset(-0.1, 0.1),
            tokyo_tower.offset(0.1, 0.1),
            tokyo_tower.offset(0.1, -0.1),
            tokyo_tower.offset(-0.1, -0.1),
        ],
        "World",
    ));
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_env() {
        // Save original values
        let orig_port = std::env::var("GEOPLOT_PORT").ok();
        let orig_file = std::env::var("GEOPLOT_MAP_FILE").ok();
        let orig_title = std::env::var("GEOPLOT_TITLE").ok();

        std::env::set_var("GEOPLOT_PORT", "9090");
        std::env::set_var("GEOPLOT_MAP_FILE", "/data/map.json");
        std::env::set_var("GEOPLOT_TITLE", "Tokyo");

        let config = ServiceConfig::from_env();
        assert_eq!(config.port, 9090);
        assert_eq!(config.map_file, Some(PathBuf::from("/data/map.json")));
        assert_eq!(config.page.title, "Tokyo");

        // Invalid port falls back to the default
        std::env::set_var("GEOPLOT_PORT", "not-a-port");
        std::env::remove_var("GEOPLOT_MAP_FILE");
        std::env::remove_var("GEOPLOT_TITLE");

        let config = ServiceConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.map_file, None);
        assert_eq!(config.page.title, geoplot::page::DEFAULT_TITLE);

        // Restore original values
        for (key, value) in [
            ("GEOPLOT_PORT", orig_port),
            ("GEOPLOT_MAP_FILE", orig_file),
            ("GEOPLOT_TITLE", orig_title),
        ] {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_load_sample_map() {
        let map = ServiceConfig::default().load_map().unwrap();
        assert_eq!(map.markers().len(), 1);
        assert_eq!(map.polylines().len(), 1);
        assert_eq!(map.polylines()[0].lat_lngs.len(), 5);
    }

    #[test]
    fn test_load_map_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"zoom": 5, "circles": [{"lat_lng": {"lat": 1, "lon": 2}, "radius_meters": 10}]}"#)
            .unwrap();

        let config = ServiceConfig {
            map_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let map = config.load_map().unwrap();
        assert_eq!(map.zoom, 5);
        assert_eq!(map.circles().len(), 1);
    }

    #[test]
    fn test_load_missing_map_file() {
        let config = ServiceConfig {
            map_file: Some(PathBuf::from("/nonexistent/map.json")),
            ..Default::default()
        };
        assert!(config.load_map().is_err());
    }
}
