#![allow(non_snake_case)]

mod app;
mod catalog_source;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// iWatchMovies - movie title grid
#[derive(Parser, Debug)]
#[command(name = "iwatchmovies-desktop")]
#[command(about = "iWatchMovies - a grid of movie title cards")]
struct Args {
    /// Catalog file (.json or .csv); defaults to <config dir>/iwatchmovies/movies.json
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Window title
    #[arg(short, long, default_value = "iWatchMovies")]
    title: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    setup_logging();

    let args = Args::parse();

    let source = catalog_source::resolve(args.catalog, catalog_source::default_catalog_path());
    let catalog = source
        .load()
        .with_context(|| format!("Failed to load catalog from {}", source))?;

    tracing::info!("Starting with {} movies from {}", catalog.len(), source);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(catalog)
        .launch(app::App);

    Ok(())
}
