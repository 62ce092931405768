//! iWatchMovies Core Library
//!
//! The movie catalog shown by the card grid, plus the TMDB dataset
//! preparation pipeline that produces catalogs from raw exports.
//!
//! ## Overview
//!
//! A [`Catalog`] is an ordered list of [`MovieEntry`] values. The grid page
//! renders one card per entry, in order. Catalogs come from the built-in
//! sample list, a JSON file, or a CSV file with a `title` column.
//!
//! ## Quick Start
//!
//! ```no_run
//! use iwatchmovies_core::Catalog;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::load("movies.json")?;
//!
//!     for movie in catalog.movies() {
//!         println!("{}", movie.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod movie;

// Re-exports
pub use catalog::{Catalog, CatalogFormat};
pub use dataset::{Cell, MovieDataset, Record};
pub use error::{CatalogError, CatalogResult};
pub use movie::MovieEntry;
