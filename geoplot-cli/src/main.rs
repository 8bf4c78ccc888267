use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Render map descriptions to interactive HTML pages
#[derive(Parser)]
#[command(name = "geoplot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a map description to an HTML page
    Render {
        /// Input file (.json map document or .geojson)
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page title
        #[arg(short, long, env = "GEOPLOT_TITLE")]
        title: Option<String>,
    },

    /// Print the Leaflet statements generated for a map description
    Statements {
        /// Input file (.json map document or .geojson)
        input: PathBuf,

        /// Output statements as a JSON array
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            title,
        } => commands::render::run(input, output, title),
        Commands::Statements { input, json } => commands::statements::run(input, json),
    }
}
