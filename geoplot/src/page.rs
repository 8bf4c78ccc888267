//! Page assembly and the HTTP adapter.
//!
//! The page is a static HTML document that loads Leaflet from a CDN, sets
//! up a full-window map with two base layers, and then runs the rendered
//! statements in order. Statements are inserted verbatim; escaping is the
//! renderer's job.

use std::io::Write;

use tera::{Context, Tera};

use crate::error::Result;
use crate::map::Map;
use crate::render::render_statements;

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");
const PAGE_TEMPLATE_NAME: &str = "page.html";

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "geoplot";

/// Presentation settings for the generated page.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Document title, HTML-escaped on insertion.
    pub title: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Insert already rendered statements into the page template.
pub fn render_page_from_statements(statements: &[String], options: &PageOptions) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;

    let mut context = Context::new();
    context.insert("title", &options.title);
    context.insert("lines", statements);

    Ok(tera.render(PAGE_TEMPLATE_NAME, &context)?)
}

/// Render the complete HTML page for a map.
pub fn render_page(map: &Map, options: &PageOptions) -> Result<String> {
    let statements = render_statements(map)?;
    render_page_from_statements(&statements, options)
}

/// Render `map` and write the page to `w`.
///
/// The page is rendered completely before anything is written, so a
/// rendering failure leaves the sink untouched. Write failures are
/// returned as [`GeoplotError::Io`](crate::GeoplotError::Io); the caller
/// chooses the response status.
///
/// # Example
///
/// ```
/// use geoplot::{serve_map, LatLng, Map, Marker};
///
/// let mut map = Map::new();
/// map.add_marker(Marker::new(LatLng::new(35.658584, 139.7454316), "Hello"));
///
/// let mut body: Vec<u8> = Vec::new();
/// serve_map(&mut body, &map).unwrap();
/// assert!(String::from_utf8(body).unwrap().contains("L.marker("));
/// ```
pub fn serve_map<W: Write>(w: &mut W, map: &Map) -> Result<()> {
    serve_map_with(w, map, &PageOptions::default())
}

/// Like [`serve_map`], with explicit page options.
pub fn serve_map_with<W: Write>(w: &mut W, map: &Map, options: &PageOptions) -> Result<()> {
    let page = render_page(map, options)?;
    w.write_all(page.as_bytes())?;
    w.flush()?;

    tracing::debug!(bytes = page.len(), "Map page written");
    Ok(())
}
