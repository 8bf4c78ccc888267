//! The map aggregate.
//!
//! A [`Map`] owns every entity drawn on it. Icons live in an arena inside
//! the map and are referenced by [`IconId`] handles, which gives icons an
//! identity independent of their field values: two icons with identical
//! fields added separately are two icons, while one handle used by many
//! markers is one icon.

use crate::entity::{Circle, Icon, Marker, Polyline};
use crate::error::{GeoplotError, Result};
use crate::geo::{Area, LatLng};

/// Opaque handle to an icon stored in a [`Map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconId(usize);

/// A map description: optional viewport settings plus ordered entities.
///
/// # Example
///
/// ```
/// use geoplot::{Icon, LatLng, Map, Marker, Point, Size};
///
/// let tower = LatLng::new(35.658584, 139.7454316);
///
/// let mut map = Map::new();
/// map.zoom = 12;
/// map.center = Some(tower);
///
/// let pin = map.add_icon(
///     Icon::from_url("https://maps.google.com/mapfiles/ms/icons/red-dot.png")
///         .with_size(Size::new(32, 32))
///         .with_anchor(Point::new(16, 32)),
/// );
/// map.add_marker(Marker::new(tower, "Hello").with_icon(pin));
///
/// assert_eq!(map.markers().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Map {
    /// Viewport center.
    pub center: Option<LatLng>,
    /// Zoom level; `0` leaves the page default.
    pub zoom: u32,
    /// Area the viewport is fitted to.
    pub area: Option<Area>,

    icons: Vec<Icon>,
    markers: Vec<Marker>,
    polylines: Vec<Polyline>,
    circles: Vec<Circle>,
}

impl Map {
    /// Create an empty map with no viewport settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an icon and return the handle markers use to reference it.
    ///
    /// Every call stores a new icon, even if an equal one is already stored.
    pub fn add_icon(&mut self, icon: Icon) -> IconId {
        self.icons.push(icon);
        IconId(self.icons.len() - 1)
    }

    /// Append a marker.
    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Append a polyline.
    pub fn add_polyline(&mut self, polyline: Polyline) {
        self.polylines.push(polyline);
    }

    /// Append a circle.
    pub fn add_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    /// Look up an icon by handle.
    pub fn icon(&self, id: IconId) -> Option<&Icon> {
        self.icons.get(id.0)
    }

    /// Look up an icon by handle, failing for handles this map never issued.
    pub(crate) fn resolve_icon(&self, id: IconId) -> Result<&Icon> {
        self.icon(id)
            .ok_or(GeoplotError::UnknownIcon { handle: id })
    }

    /// All stored icons in insertion order.
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Whether no viewport setting is present.
    pub fn has_default_viewport(&self) -> bool {
        self.zoom == 0 && self.center.is_none() && self.area.is_none()
    }
}
