//! Map description documents.
//!
//! A [`MapDocument`] is the serializable form of a [`Map`]. Icons are
//! declared once in a named table and markers refer to them by name, so
//! every marker naming the same icon shares one rendered icon.
//!
//! ```json
//! {
//!   "zoom": 12,
//!   "center": {"lat": 35.658584, "lon": 139.7454316},
//!   "icons": {
//!     "red": {"url": "https://maps.google.com/mapfiles/ms/icons/red-dot.png",
//!             "size": {"width": 32, "height": 32},
//!             "anchor": {"x": 16, "y": 32}}
//!   },
//!   "markers": [
//!     {"lat_lng": {"lat": 35.658584, "lon": 139.7454316}, "popup": "Tokyo Tower", "icon": "red"}
//!   ],
//!   "polylines": [
//!     {"lat_lngs": [{"lat": 35.6, "lon": 139.7}, {"lat": 35.7, "lon": 139.8}], "color": "#ff0000"}
//!   ],
//!   "circles": [
//!     {"lat_lng": {"lat": 35.658584, "lon": 139.7454316}, "radius_meters": 500}
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::{Circle, Icon, Marker, Polyline};
use crate::error::{GeoplotError, Result};
use crate::geo::{Area, LatLng};
use crate::map::Map;

/// A marker in a document, naming its icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDocument {
    pub lat_lng: LatLng,
    #[serde(default)]
    pub popup: String,
    /// Key into [`MapDocument::icons`].
    #[serde(default)]
    pub icon: Option<String>,
}

/// Serializable description of a whole map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapDocument {
    pub center: Option<LatLng>,
    pub zoom: u32,
    pub area: Option<Area>,
    pub icons: BTreeMap<String, Icon>,
    pub markers: Vec<MarkerDocument>,
    pub polylines: Vec<Polyline>,
    pub circles: Vec<Circle>,
}

impl MapDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON document file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build a [`Map`] from this document.
    ///
    /// Each named icon is stored once, so markers naming the same icon
    /// share it.
    ///
    /// # Errors
    ///
    /// Returns [`GeoplotError::UnknownIconName`] if a marker names an icon
    /// missing from the icon table.
    pub fn into_map(self) -> Result<Map> {
        let mut map = Map::new();
        map.center = self.center;
        map.zoom = self.zoom;
        map.area = self.area;

        let mut handles = HashMap::with_capacity(self.icons.len());
        for (name, icon) in self.icons {
            let id = map.add_icon(icon);
            handles.insert(name, id);
        }

        for marker in self.markers {
            let icon = match marker.icon {
                Some(name) => match handles.get(&name) {
                    Some(id) => Some(*id),
                    None => return Err(GeoplotError::UnknownIconName { name }),
                },
                None => None,
            };
            map.add_marker(Marker {
                lat_lng: marker.lat_lng,
                popup: marker.popup,
                icon,
            });
        }

        for polyline in self.polylines {
            map.add_polyline(polyline);
        }
        for circle in self.circles {
            map.add_circle(circle);
        }

        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Rgb;
    use crate::render::render_statements;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DOCUMENT: &str = r##"{
        "zoom": 12,
        "center": {"lat": 35.658584, "lon": 139.7454316},
        "icons": {
            "red": {"url": "https://maps.google.com/mapfiles/ms/icons/red-dot.png",
                    "size": {"width": 32, "height": 32},
                    "anchor": {"x": 16, "y": 32}},
            "unused": {"html": "<b>x</b>"}
        },
        "markers": [
            {"lat_lng": {"lat": 35.658584, "lon": 139.7454316}, "popup": "Tokyo Tower", "icon": "red"},
            {"lat_lng": {"lat": 35.7, "lon": 139.8}, "icon": "red"},
            {"lat_lng": {"lat": 35.8, "lon": 139.9}}
        ],
        "polylines": [
            {"lat_lngs": [{"lat": 35.6, "lon": 139.7}, {"lat": 35.7, "lon": 139.8}], "color": "#ff0000"}
        ],
        "circles": [
            {"lat_lng": {"lat": 35.658584, "lon": 139.7454316}, "radius_meters": 500}
        ]
    }"##;

    #[test]
    fn test_parse_document() {
        let doc = MapDocument::from_json(DOCUMENT).unwrap();

        assert_eq!(doc.zoom, 12);
        assert_eq!(doc.icons.len(), 2);
        assert_eq!(doc.markers.len(), 3);
        assert_eq!(doc.markers[1].popup, "");
        assert_eq!(doc.polylines[0].color, Some(Rgb::new(255, 0, 0)));
        assert_eq!(doc.circles[0].radius_meters, 500);
    }

    #[test]
    fn test_into_map_shares_named_icons() {
        let map = MapDocument::from_json(DOCUMENT).unwrap().into_map().unwrap();

        assert_eq!(map.icons().len(), 2);
        assert_eq!(map.markers()[0].icon, map.markers()[1].icon);
        assert!(map.markers()[0].icon.is_some());
        assert_eq!(map.markers()[2].icon, None);

        let lines = render_statements(&map).unwrap();
        assert_eq!(lines.iter().filter(|l| l.starts_with("const ")).count(), 1);
    }

    #[test]
    fn test_unknown_icon_name() {
        let json = r#"{"markers": [{"lat_lng": {"lat": 0, "lon": 0}, "icon": "missing"}]}"#;
        let result = MapDocument::from_json(json).unwrap().into_map();

        match result {
            Err(GeoplotError::UnknownIconName { name }) => assert_eq!(name, "missing"),
            other => panic!("expected UnknownIconName, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_document() {
        let map = MapDocument::from_json("{}").unwrap().into_map().unwrap();
        assert!(map.has_default_viewport());
        assert!(map.markers().is_empty());
    }

    #[test]
    fn test_invalid_color_rejected() {
        let json = r#"{"polylines": [{"lat_lngs": [], "color": "red"}]}"#;
        assert!(matches!(
            MapDocument::from_json(json),
            Err(GeoplotError::Json(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();

        let doc = MapDocument::from_file(file.path()).unwrap();
        assert_eq!(doc.markers.len(), 3);
    }

    #[test]
    fn test_from_missing_file() {
        assert!(matches!(
            MapDocument::from_file("/nonexistent/map.json"),
            Err(GeoplotError::Io(_))
        ));
    }
}
