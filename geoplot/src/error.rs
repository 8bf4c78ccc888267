//! Error types for the geoplot library.

use thiserror::Error;

use crate::map::IconId;

/// Errors that can occur while building or rendering a map.
#[derive(Error, Debug)]
pub enum GeoplotError {
    /// The page template failed to parse or render.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// JSON encoding of statement options or decoding of a map document failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error when writing the page or reading a document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The secure random source could not produce an icon identifier.
    #[error("Random source unavailable: {0}")]
    Random(#[from] getrandom::Error),

    /// A marker references an icon handle that this map never issued.
    #[error("Unknown icon handle: {handle:?}")]
    UnknownIcon { handle: IconId },

    /// A map document marker names an icon that the document does not declare.
    #[error("Unknown icon name: {name}")]
    UnknownIconName { name: String },

    /// A color string is not in `#rrggbb` form.
    #[error("Invalid color: {value} (expected #rrggbb)")]
    InvalidColor { value: String },

    /// A GeoJSON position has fewer than two elements.
    #[error("Invalid coordinate: {len} elements (expected at least 2: lon, lat)")]
    InvalidCoordinate { len: usize },

    /// A coordinate is NaN or infinite and has no JavaScript literal.
    #[error("Non-finite coordinate: [{latitude}, {longitude}]")]
    NonFiniteCoordinate { latitude: f64, longitude: f64 },
}

/// Result type alias using [`GeoplotError`].
pub type Result<T> = std::result::Result<T, GeoplotError>;
