use anyhow::{Context, Result};
use geoplot::{Map, PageOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn run(input: PathBuf, output: Option<PathBuf>, title: Option<String>) -> Result<()> {
    let map = super::load_map(&input)?;

    let mut options = PageOptions::default();
    if let Some(title) = title {
        options.title = title;
    }

    match output {
        Some(path) => {
            write_page(&map, &options, &path)?;

            eprintln!(
                "Rendered {} markers, {} polylines, {} circles to {}",
                map.markers().len(),
                map.polylines().len(),
                map.circles().len(),
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            geoplot::serve_map_with(&mut stdout, &map, &options)
                .context("Failed to render map")?;
        }
    }

    Ok(())
}

/// Render the page, then write it to `path`.
///
/// The file is only created once rendering has succeeded.
fn write_page(map: &Map, options: &PageOptions, path: &Path) -> Result<()> {
    let page = geoplot::render_page(map, options).context("Failed to render map")?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    file.write_all(page.as_bytes())
        .and_then(|()| file.flush())
        .with_context(|| format!("Failed to write output file {}", path.display()))?;

    Ok(())
}
