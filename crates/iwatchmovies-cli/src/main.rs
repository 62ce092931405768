//! iWatchMovies CLI
//!
//! Thin wrapper around iwatchmovies-core for preparing catalogs.
//!
//! ## Usage
//!
//! ```bash
//! # Clean a raw TMDB export and write the result
//! iwatchmovies process data/raw/movies.csv --output data/modified/movies.csv
//!
//! # Print a few random movies from a prepared file
//! iwatchmovies sample data/modified/movies.csv -n 5
//!
//! # List the titles a catalog would put in the grid
//! iwatchmovies titles movies.json
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use iwatchmovies_core::dataset::COMBINED_TEXT_COLUMN;
use iwatchmovies_core::{Catalog, MovieDataset, Record};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Characters of combined text shown per sampled movie
const COMBINED_PREVIEW_CHARS: usize = 120;

/// iWatchMovies - catalog tools
#[derive(Parser)]
#[command(name = "iwatchmovies")]
#[command(version = "0.1.0")]
#[command(about = "iWatchMovies - movie catalog tools")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a raw TMDB movies CSV
    Process {
        /// Raw CSV export
        input: PathBuf,

        /// Where to write the processed CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print random movies from a CSV in readable form
    Sample {
        /// Processed (or raw) CSV file
        input: PathBuf,

        /// Number of movies to print
        #[arg(short, default_value_t = 5)]
        n: usize,

        /// Seed for a repeatable selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the titles of a catalog file, one per line
    Titles {
        /// Catalog file (.json or .csv)
        catalog: PathBuf,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn process(input: &Path, output: Option<&Path>) -> Result<()> {
    let mut dataset = MovieDataset::load(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    dataset.prepare()?;
    tracing::info!("Prepared {} movies", dataset.len());

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            dataset.write_csv(BufWriter::new(file))?;
            eprintln!("Wrote {} movies to {}", dataset.len(), path.display());
        }
        None => dataset.write_csv(io::stdout().lock())?,
    }
    Ok(())
}

fn print_record(out: &mut impl Write, record: &Record<'_>) -> io::Result<()> {
    let field = |column: &str| {
        record
            .get(column)
            .map(|cell| cell.to_string())
            .unwrap_or_default()
    };

    writeln!(out)?;
    writeln!(out, "--- Movie {} ---", record.index() + 1)?;
    writeln!(out, "Title: {}", field("title"))?;
    writeln!(out, "Genres: {}", field("genres"))?;
    writeln!(out, "Overview: {}", field("overview"))?;
    writeln!(out, "Keywords: {}", field("keywords"))?;
    writeln!(out, "Release Date: {}", field("release_date"))?;
    writeln!(out, "Language: {}", field("original_language"))?;
    let combined: String = field(COMBINED_TEXT_COLUMN)
        .chars()
        .take(COMBINED_PREVIEW_CHARS)
        .collect();
    writeln!(out, "Combined Text: {}...", combined)?;
    Ok(())
}

fn sample(input: &Path, n: usize, seed: Option<u64>) -> Result<()> {
    let dataset = MovieDataset::load(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut out = io::stdout().lock();
    for record in dataset.sample(n, &mut rng) {
        print_record(&mut out, &record)?;
    }
    Ok(())
}

fn titles(path: &Path) -> Result<()> {
    let catalog =
        Catalog::load(path).with_context(|| format!("Failed to load {}", path.display()))?;

    let mut out = io::stdout().lock();
    for movie in catalog.movies() {
        writeln!(out, "{}", movie.title)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Process { input, output } => process(&input, output.as_deref()),
        Commands::Sample { input, n, seed } => sample(&input, n, seed),
        Commands::Titles { catalog } => titles(&catalog),
    }
}
