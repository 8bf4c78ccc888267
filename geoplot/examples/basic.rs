//! Basic example: write a map page to a file.
//!
//! Run with: cargo run --example basic -- /tmp/map.html

use std::env;
use std::fs::File;
use std::io::BufWriter;

use geoplot::{serve_map, Area, Circle, GeoplotError, Icon, LatLng, Map, Marker, Polyline, Rgb};

fn main() -> Result<(), GeoplotError> {
    let output = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example basic -- /path/to/map.html");
        std::process::exit(1);
    });

    let tower = LatLng::new(35.658584, 139.7454316);
    let skytree = LatLng::new(35.710063, 139.8107);

    let mut map = Map::new();
    map.area = Some(Area::new(tower.offset(-0.05, -0.05), skytree.offset(0.05, 0.05)));

    let red = map.add_icon(Icon::color(220, 20, 60));
    map.add_marker(Marker::new(tower, "Tokyo Tower\n333 m").with_icon(red));
    map.add_marker(Marker::new(skytree, "Tokyo Skytree\n634 m").with_icon(red));
    map.add_polyline(
        Polyline::new(vec![tower, skytree], "Between the towers").with_color(Rgb::new(0, 90, 200)),
    );
    map.add_circle(Circle::new(tower, 1000, "1 km around Tokyo Tower"));

    let mut writer = BufWriter::new(File::create(&output)?);
    serve_map(&mut writer, &map)?;

    println!("Map written to {}", output);
    Ok(())
}
