use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn run(input: PathBuf, json: bool) -> Result<()> {
    let map = super::load_map(&input)?;
    let statements = geoplot::render_statements(&map).context("Failed to render statements")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&statements)?);
    } else {
        for statement in &statements {
            println!("{}", statement);
        }
    }

    Ok(())
}
