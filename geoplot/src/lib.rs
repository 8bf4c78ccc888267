//! # geoplot - interactive maps from plain data
//!
//! Describe a map with plain values (center, zoom, area, markers,
//! polylines, circles, icons) and render it as a self-contained HTML page
//! that draws the map in a browser with [Leaflet](https://leafletjs.com/).
//!
//! ## Quick Start
//!
//! ```
//! use geoplot::{serve_map, Icon, LatLng, Map, Marker, Point, Polyline, Size};
//!
//! let tower = LatLng::new(35.658584, 139.7454316);
//!
//! let mut map = Map::new();
//! let pin = map.add_icon(
//!     Icon::from_url("https://maps.google.com/mapfiles/ms/icons/red-dot.png")
//!         .with_size(Size::new(32, 32))
//!         .with_anchor(Point::new(16, 32)),
//! );
//! map.add_marker(Marker::new(tower, "Hello").with_icon(pin));
//! map.add_polyline(Polyline::new(
//!     vec![
//!         tower.offset(-0.1, -0.1),
//!         tower.offset(-0.1, 0.1),
//!         tower.offset(0.1, 0.1),
//!         tower.offset(0.1, -0.1),
//!         tower.offset(-0.1, -0.1),
//!     ],
//!     "World",
//! ));
//!
//! // Any `std::io::Write` works as the response sink.
//! let mut body: Vec<u8> = Vec::new();
//! serve_map(&mut body, &map)?;
//! # Ok::<(), geoplot::GeoplotError>(())
//! ```
//!
//! ## Rendering
//!
//! Each entity becomes one Leaflet statement, emitted in the order
//! viewport, icons, circles, markers, polylines. Icons are emitted once per
//! [`IconId`] no matter how many markers use them, under a random 16-letter
//! variable name chosen per render.
//!
//! Rendering never mutates the [`Map`], so a shared map can be served from
//! concurrent requests without locking.

pub mod document;
pub mod entity;
pub mod error;
pub mod geo;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod map;
pub mod page;
pub mod render;

// Re-export main types at crate root for convenience
pub use document::{MapDocument, MarkerDocument};
pub use entity::{Circle, Icon, Marker, Polyline, Rgb};
pub use error::{GeoplotError, Result};
pub use geo::{Area, LatLng, Point, Size};
pub use map::{IconId, Map};
pub use page::{render_page, serve_map, serve_map_with, PageOptions};
pub use render::render_statements;
