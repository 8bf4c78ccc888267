pub mod render;
pub mod statements;

use anyhow::{bail, Context, Result};
use geojson::GeoJson;
use geoplot::{Map, MapDocument};
use std::path::Path;

/// Property names tried, in order, for a feature's popup text.
const POPUP_PROPERTIES: [&str; 3] = ["popup", "name", "title"];

/// Load a map from a `.json` map document or a `.geojson` file.
pub fn load_map(input: &Path) -> Result<Map> {
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "json" => {
            let document = MapDocument::from_file(input)
                .with_context(|| format!("Failed to read map document {}", input.display()))?;
            document.into_map().context("Invalid map document")
        }
        "geojson" => {
            let text = std::fs::read_to_string(input).context("Failed to open input file")?;
            let geojson: GeoJson = text.parse().context("Failed to parse GeoJSON")?;
            map_from_geojson(&geojson)
        }
        _ => bail!(
            "Unsupported file format: {}. Use .json or .geojson",
            extension
        ),
    }
}

fn map_from_geojson(geojson: &GeoJson) -> Result<Map> {
    let mut map = Map::new();

    match geojson {
        GeoJson::Geometry(geometry) => {
            geoplot::geojson::add_geometry(&mut map, geometry, "")?;
        }
        GeoJson::Feature(feature) => add_feature(&mut map, feature)?,
        GeoJson::FeatureCollection(collection) => {
            for feature in &collection.features {
                add_feature(&mut map, feature)?;
            }
        }
    }

    Ok(map)
}

fn add_feature(map: &mut Map, feature: &geojson::Feature) -> Result<()> {
    // Features without geometry have nothing to draw
    let Some(geometry) = &feature.geometry else {
        return Ok(());
    };

    let popup = POPUP_PROPERTIES
        .iter()
        .find_map(|key| feature.property(key).and_then(|v| v.as_str()))
        .unwrap_or("");

    geoplot::geojson::add_geometry(map, geometry, popup)
        .context("Invalid coordinate in GeoJSON feature")
}
