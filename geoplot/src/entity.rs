//! Visual entity descriptors.
//!
//! Each descriptor is plain data for one element drawn on the map. Markers
//! refer to icons through an [`IconId`] handle issued by
//! [`Map::add_icon`](crate::Map::add_icon), so several markers can share
//! one icon.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoplotError;
use crate::geo::{LatLng, Point, Size};
use crate::map::IconId;

/// An RGB stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb`.
    ///
    /// ```
    /// use geoplot::Rgb;
    ///
    /// assert_eq!(Rgb::new(255, 0, 16).to_hex(), "#ff0010");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = GeoplotError;

    /// Parse `#rrggbb` or `rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GeoplotError::InvalidColor {
            value: s.to_string(),
        };

        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = GeoplotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

/// A marker icon, drawn either from an image URL or from inline HTML.
///
/// When `url` is empty the icon is rendered as an HTML icon using `html`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icon {
    /// Image URL.
    pub url: String,
    /// Inline markup, used when `url` is empty.
    pub html: String,
    /// Icon size in pixels.
    pub size: Option<Size>,
    /// Pixel of the icon placed on the marker coordinate.
    pub anchor: Option<Point>,
    /// Popup opening point relative to the anchor.
    pub popup_anchor: Option<Point>,
}

impl Icon {
    /// Create an image icon.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create an HTML icon.
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            ..Default::default()
        }
    }

    /// Set the icon size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the icon anchor.
    pub fn with_anchor(mut self, anchor: Point) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Set the popup anchor.
    pub fn with_popup_anchor(mut self, popup_anchor: Point) -> Self {
        self.popup_anchor = Some(popup_anchor);
        self
    }

    /// Whether this icon renders from inline HTML rather than an image.
    pub fn is_html(&self) -> bool {
        self.url.is_empty()
    }

    /// A 20x30 map pin filled with the given color.
    ///
    /// The pin tip sits on the marker coordinate and popups open just above
    /// the pin head.
    pub fn color(r: u8, g: u8, b: u8) -> Self {
        Icon::from_html(pin_svg(r, g, b))
            .with_size(Size::new(20, 30))
            .with_anchor(Point::new(10, 30))
            .with_popup_anchor(Point::new(0, -30))
    }
}

fn pin_svg(r: u8, g: u8, b: u8) -> String {
    format!(
        r#"<svg width="100%" height="100%" viewBox="0 0 32 48" version="1.1" xmlns="http://www.w3.org/2000/svg" style="fill-rule:evenodd;clip-rule:evenodd;stroke-linejoin:round;stroke-miterlimit:2;">
    <path d="M1.701,23.023C0.613,20.877 0,18.454 0,15.89C0,7.12 7.169,0 15.998,0C24.828,0 31.997,7.12 31.997,15.89C31.997,18.454 31.389,20.854 30.3,23L15.998,48.007L1.701,23.023Z" style="fill:rgb({r},{g},{b});"/>
    <path d="M1.701,23.023C0.613,20.877 0,18.454 0,15.89C0,7.12 7.169,0 15.998,0C24.828,0 31.997,7.12 31.997,15.89C31.997,18.454 31.389,20.854 30.3,23L15.998,48.007L1.701,23.023ZM2.582,22.549C1.57,20.544 1,18.283 1,15.89C1,7.67 7.722,1 15.998,1C24.274,1 30.997,7.67 30.997,15.89C30.997,18.277 30.434,20.513 29.425,22.514C29.419,22.526 15.998,45.993 15.998,45.993L2.582,22.549Z"/>
    <g transform="matrix(1.02055,0,0,1.02055,-1.48306,1.74407)">
        <circle cx="17.129" cy="13.971" r="5.862" style="fill:white;"/>
    </g>
</svg>"#
    )
}

/// A point annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub lat_lng: LatLng,
    /// Popup text; newlines become line breaks.
    pub popup: String,
    /// Handle of an icon in the owning map, or the library default icon.
    pub icon: Option<IconId>,
}

impl Marker {
    /// Create a marker with the default icon.
    pub fn new(lat_lng: LatLng, popup: impl Into<String>) -> Self {
        Self {
            lat_lng,
            popup: popup.into(),
            icon: None,
        }
    }

    /// Use an icon previously added to the map.
    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// A connected line through the given points.
///
/// The path is drawn exactly as given; repeat the first point at the end
/// to close it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Polyline {
    pub lat_lngs: Vec<LatLng>,
    pub popup: String,
    /// Stroke color, or the library default.
    pub color: Option<Rgb>,
}

impl Polyline {
    pub fn new(lat_lngs: Vec<LatLng>, popup: impl Into<String>) -> Self {
        Self {
            lat_lngs,
            popup: popup.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}

/// A circle with a radius in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub lat_lng: LatLng,
    pub radius_meters: u32,
    #[serde(default)]
    pub popup: String,
}

impl Circle {
    pub fn new(lat_lng: LatLng, radius_meters: u32, popup: impl Into<String>) -> Self {
        Self {
            lat_lng,
            radius_meters,
            popup: popup.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_parse() {
        assert_eq!("#ff8000".parse::<Rgb>().unwrap(), Rgb::new(255, 128, 0));
        assert_eq!("00ff7f".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 127));
        assert_eq!("#FFFFFF".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_rgb_parse_invalid() {
        assert!("#fff".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
        assert!("#ff00ééé".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rgb_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, r##""#010203""##);

        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_icon_kind() {
        assert!(!Icon::from_url("https://example.com/pin.png").is_html());
        assert!(Icon::from_html("<b>x</b>").is_html());
        assert!(Icon::default().is_html());
    }

    #[test]
    fn test_color_icon() {
        let icon = Icon::color(12, 34, 56);

        assert!(icon.is_html());
        assert!(icon.html.contains("fill:rgb(12,34,56);"));
        assert_eq!(icon.size, Some(Size::new(20, 30)));
        assert_eq!(icon.anchor, Some(Point::new(10, 30)));
        assert_eq!(icon.popup_anchor, Some(Point::new(0, -30)));
    }

    #[test]
    fn test_circle_popup_defaults_to_empty() {
        let circle: Circle = serde_json::from_str(
            r#"{"lat_lng": {"latitude": 1.0, "longitude": 2.0}, "radius_meters": 300}"#,
        )
        .unwrap();
        assert_eq!(circle.radius_meters, 300);
        assert!(circle.popup.is_empty());
    }
}
