//! Map to Leaflet statement rendering.
//!
//! Rendering runs in two phases. The first walks the markers, collects
//! each distinct icon handle in order of first use, and gives it a fresh
//! random variable name in a table local to this render. The second
//! serializes every entity to one statement using that table. Nothing on
//! the [`Map`] is mutated, so one map can be rendered from many threads.
//!
//! Statement order: viewport, icons, circles, markers, polylines.
//!
//! All text embedded in a statement goes through [`js_string`], and all
//! options objects through JSON encoding, so caller-supplied text cannot
//! break out of its string literal or out of the surrounding `<script>`.

use std::collections::HashMap;

use serde::Serialize;

use crate::entity::{Circle, Icon, Marker, Polyline};
use crate::error::{GeoplotError, Result};
use crate::geo::{LatLng, Point, Size};
use crate::map::{IconId, Map};

/// Length of a generated icon variable name.
pub const ICON_NAME_LEN: usize = 16;

const ICON_NAME_ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Bytes at or above this value are discarded so every letter is equally likely.
const ICON_NAME_BYTE_LIMIT: u8 = 208; // 4 * 52

/// Generate a random icon variable name from `[a-zA-Z]`.
///
/// Uses the operating system's secure random source. Collisions are not
/// checked; 52^16 names make them negligible within one page.
pub fn generate_icon_name() -> Result<String> {
    let mut name = String::with_capacity(ICON_NAME_LEN);
    let mut bytes = [0u8; ICON_NAME_LEN * 2];

    while name.len() < ICON_NAME_LEN {
        getrandom::getrandom(&mut bytes)?;
        for b in bytes.iter().filter(|b| **b < ICON_NAME_BYTE_LIMIT) {
            if name.len() == ICON_NAME_LEN {
                break;
            }
            name.push(letter_for_byte(*b));
        }
    }

    Ok(name)
}

fn letter_for_byte(b: u8) -> char {
    ICON_NAME_ALPHABET[b as usize % ICON_NAME_ALPHABET.len()] as char
}

/// Icon variable names assigned for one render, in order of first use.
#[derive(Debug, Default)]
pub struct IconNames {
    order: Vec<IconId>,
    names: HashMap<IconId, String>,
}

impl IconNames {
    /// Assign a name to every distinct icon referenced by the map's markers.
    ///
    /// Icons that no marker references get no name and are not rendered.
    pub fn assign(map: &Map) -> Result<Self> {
        let mut table = IconNames::default();
        for id in map.markers().iter().filter_map(|m| m.icon) {
            map.resolve_icon(id)?;
            if table.names.contains_key(&id) {
                continue;
            }
            table.names.insert(id, generate_icon_name()?);
            table.order.push(id);
        }
        Ok(table)
    }

    /// Name assigned to `id`, if a marker uses it.
    pub fn get(&self, id: IconId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Handles and names in order of first use.
    pub fn iter(&self) -> impl Iterator<Item = (IconId, &str)> {
        self.order.iter().map(|id| (*id, self.names[id].as_str()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// One drawable item, ready to be turned into a statement.
#[derive(Debug)]
pub enum Entity<'a> {
    /// Zoom, center and area settings of the map.
    Viewport(&'a Map),
    /// An icon bound to a variable.
    Icon { icon: &'a Icon, name: &'a str },
    Circle(&'a Circle),
    /// A marker with the variable name of its icon, if any.
    Marker {
        marker: &'a Marker,
        icon_name: Option<&'a str>,
    },
    Polyline(&'a Polyline),
}

impl Entity<'_> {
    /// Serialize this entity to one statement.
    ///
    /// Returns `None` for a viewport with nothing set.
    pub fn to_js(&self) -> Result<Option<String>> {
        match self {
            Entity::Viewport(map) => viewport_js(map),
            Entity::Icon { icon, name } => icon_js(icon, name).map(Some),
            Entity::Circle(circle) => circle_js(circle).map(Some),
            Entity::Marker { marker, icon_name } => marker_js(marker, *icon_name).map(Some),
            Entity::Polyline(polyline) => polyline_js(polyline).map(Some),
        }
    }
}

/// Render every statement for the map in page order.
pub fn render_statements(map: &Map) -> Result<Vec<String>> {
    let names = IconNames::assign(map)?;
    render_with_names(map, &names)
}

fn render_with_names(map: &Map, names: &IconNames) -> Result<Vec<String>> {
    let mut entities = vec![Entity::Viewport(map)];

    for (id, name) in names.iter() {
        entities.push(Entity::Icon {
            icon: map.resolve_icon(id)?,
            name,
        });
    }
    entities.extend(map.circles().iter().map(Entity::Circle));
    for marker in map.markers() {
        let icon_name = marker
            .icon
            .map(|id| names.get(id).ok_or(GeoplotError::UnknownIcon { handle: id }))
            .transpose()?;
        entities.push(Entity::Marker { marker, icon_name });
    }
    entities.extend(map.polylines().iter().map(Entity::Polyline));

    let mut lines = Vec::with_capacity(entities.len());
    for entity in &entities {
        if let Some(line) = entity.to_js()? {
            lines.push(line);
        }
    }

    tracing::debug!(
        icons = names.len(),
        circles = map.circles().len(),
        markers = map.markers().len(),
        polylines = map.polylines().len(),
        statements = lines.len(),
        "Rendered map statements"
    );

    Ok(lines)
}

/// Encode `s` as a JavaScript string literal that is also safe inside an
/// HTML `<script>` element.
///
/// ```
/// use geoplot::render::js_string;
///
/// assert_eq!(js_string("say \"hi\"").unwrap(), r#""say \"hi\"""#);
/// assert_eq!(js_string("</script>").unwrap(), r#""<\/script>""#);
/// ```
pub fn js_string(s: &str) -> Result<String> {
    Ok(script_safe(serde_json::to_string(s)?))
}

/// Encode `value` as JSON that is safe inside an HTML `<script>` element.
fn js_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(script_safe(serde_json::to_string(value)?))
}

/// Neutralize sequences that end a script element or break JS parsing.
///
/// Only valid on JSON text, where these can appear only inside strings.
fn script_safe(json: String) -> String {
    if !json.contains(['<', '\u{2028}', '\u{2029}']) {
        return json;
    }
    json.replace("</", "<\\/")
        .replace("<!--", "<\\!--")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

fn popup_js(popup: &str) -> Result<String> {
    js_string(&popup.replace('\n', "<br/>"))
}

fn lat_lng_js(l: &LatLng) -> Result<String> {
    if !l.latitude.is_finite() || !l.longitude.is_finite() {
        return Err(GeoplotError::NonFiniteCoordinate {
            latitude: l.latitude,
            longitude: l.longitude,
        });
    }
    Ok(format!("[{:.6}, {:.6}]", l.latitude, l.longitude))
}

fn viewport_js(map: &Map) -> Result<Option<String>> {
    let mut parts = Vec::new();
    if map.zoom > 0 {
        parts.push(format!("map.setZoom({});", map.zoom));
    }
    if let Some(center) = &map.center {
        parts.push(format!("map.setView({});", lat_lng_js(center)?));
    }
    if let Some(area) = &map.area {
        parts.push(format!(
            "map.fitBounds([{}, {}]);",
            lat_lng_js(&area.from)?,
            lat_lng_js(&area.to)?
        ));
    }

    if parts.is_empty() {
        Ok(None)
    } else {
        Ok(Some(parts.join(" ")))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IconOptions<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_size: Option<[i32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_anchor: Option<[i32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    popup_anchor: Option<[i32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    class_name: Option<&'a str>,
}

fn size_pair(s: &Size) -> [i32; 2] {
    [s.width, s.height]
}

fn point_pair(p: &Point) -> [i32; 2] {
    [p.x, p.y]
}

fn icon_js(icon: &Icon, name: &str) -> Result<String> {
    let mut options = IconOptions {
        icon_url: None,
        html: None,
        icon_size: icon.size.as_ref().map(size_pair),
        icon_anchor: icon.anchor.as_ref().map(point_pair),
        popup_anchor: icon.popup_anchor.as_ref().map(point_pair),
        class_name: None,
    };

    let constructor = if icon.is_html() {
        options.html = Some(&icon.html);
        // Empty class name drops Leaflet's default white box styling.
        options.class_name = Some("");
        "divIcon"
    } else {
        options.icon_url = Some(&icon.url);
        "icon"
    };

    Ok(format!(
        "const {} = L.{}({});",
        name,
        constructor,
        js_json(&options)?
    ))
}

fn marker_js(marker: &Marker, icon_name: Option<&str>) -> Result<String> {
    let options = match icon_name {
        Some(name) => format!("{{icon: {}}}", name),
        None => "{}".to_string(),
    };

    Ok(format!(
        "L.marker({}, {}).addTo(map).bindPopup({});",
        lat_lng_js(&marker.lat_lng)?,
        options,
        popup_js(&marker.popup)?
    ))
}

#[derive(Serialize)]
struct PolylineOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

fn polyline_js(polyline: &Polyline) -> Result<String> {
    let lat_lngs = polyline
        .lat_lngs
        .iter()
        .map(lat_lng_js)
        .collect::<Result<Vec<_>>>()?;
    let options = PolylineOptions {
        color: polyline.color.map(|c| c.to_hex()),
    };

    Ok(format!(
        "L.polyline([{}], {}).addTo(map).bindPopup({});",
        lat_lngs.join(", "),
        js_json(&options)?,
        popup_js(&polyline.popup)?
    ))
}

fn circle_js(circle: &Circle) -> Result<String> {
    Ok(format!(
        "L.circle({}, {{radius: {}}}).addTo(map).bindPopup({});",
        lat_lng_js(&circle.lat_lng)?,
        circle.radius_meters,
        popup_js(&circle.popup)?
    ))
}
