//! Geographic and pixel primitives.
//!
//! [`LatLng`] and [`Area`] are in decimal degrees (WGS84). [`Point`] and
//! [`Size`] are pixel quantities used to lay out icons.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in decimal degrees.
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(alias = "lon", alias = "lng")]
    pub longitude: f64,
}

impl LatLng {
    /// Create a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Return a new coordinate translated by the given deltas.
    ///
    /// The result is not clamped or wrapped, so offsets can produce
    /// coordinates outside ±90°/±180°.
    ///
    /// # Examples
    ///
    /// ```
    /// use geoplot::LatLng;
    ///
    /// let tower = LatLng::new(35.658584, 139.7454316);
    /// let corner = tower.offset(-0.1, 0.1);
    /// assert!((corner.latitude - 35.558584).abs() < 1e-9);
    /// assert_eq!(tower.latitude, 35.658584);
    /// ```
    pub fn offset(&self, lat: f64, lon: f64) -> LatLng {
        LatLng {
            latitude: self.latitude + lat,
            longitude: self.longitude + lon,
        }
    }
}

/// A bounding rectangle the viewport is fitted to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    /// First corner.
    pub from: LatLng,
    /// Opposite corner.
    pub to: LatLng,
}

impl Area {
    /// Create a new area from two opposite corners.
    pub fn new(from: LatLng, to: LatLng) -> Self {
        Self { from, to }
    }
}

/// A pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
