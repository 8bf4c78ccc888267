//! GeoJSON import.
//!
//! Enable the `geojson` feature to use this module. Points become markers
//! and line work becomes polylines; polygon rings are drawn as given, so a
//! ring that repeats its first position is drawn closed.
//!
//! # Example
//!
//! ```ignore
//! use geoplot::{geojson::add_geometry, Map};
//! use geojson::Geometry;
//!
//! let route: Geometry = r#"{
//!     "type": "LineString",
//!     "coordinates": [[139.70, 35.65], [139.75, 35.66]]
//! }"#.parse().unwrap();
//!
//! let mut map = Map::new();
//! add_geometry(&mut map, &route, "Route")?;
//! ```

use geojson::{Geometry, Position, Value as GeoJsonValue};

use crate::entity::{Marker, Polyline};
use crate::error::{GeoplotError, Result};
use crate::geo::LatLng;
use crate::map::Map;

/// Add every shape of a GeoJSON geometry to the map.
///
/// Coordinates are read in GeoJSON order (`[longitude, latitude, ...]`).
/// Each created entity gets `popup` as its popup text.
///
/// # Errors
///
/// Returns [`GeoplotError::InvalidCoordinate`] if any position has fewer
/// than two elements. Entities added before the bad position stay on the
/// map.
pub fn add_geometry(map: &mut Map, geometry: &Geometry, popup: &str) -> Result<()> {
    match &geometry.value {
        GeoJsonValue::Point(position) => {
            map.add_marker(Marker::new(to_lat_lng(position)?, popup));
        }
        GeoJsonValue::MultiPoint(positions) => {
            for position in positions {
                map.add_marker(Marker::new(to_lat_lng(position)?, popup));
            }
        }
        GeoJsonValue::LineString(line) => {
            map.add_polyline(Polyline::new(to_lat_lngs(line)?, popup));
        }
        GeoJsonValue::MultiLineString(lines) | GeoJsonValue::Polygon(lines) => {
            for line in lines {
                map.add_polyline(Polyline::new(to_lat_lngs(line)?, popup));
            }
        }
        GeoJsonValue::MultiPolygon(polygons) => {
            for ring in polygons.iter().flatten() {
                map.add_polyline(Polyline::new(to_lat_lngs(ring)?, popup));
            }
        }
        GeoJsonValue::GeometryCollection(geometries) => {
            for g in geometries {
                add_geometry(map, g, popup)?;
            }
        }
    }
    Ok(())
}

fn to_lat_lng(position: &Position) -> Result<LatLng> {
    match position.as_slice() {
        [lon, lat, ..] => Ok(LatLng::new(*lat, *lon)),
        _ => Err(GeoplotError::InvalidCoordinate {
            len: position.len(),
        }),
    }
}

fn to_lat_lngs(positions: &[Position]) -> Result<Vec<LatLng>> {
    positions.iter().map(to_lat_lng).collect()
}
