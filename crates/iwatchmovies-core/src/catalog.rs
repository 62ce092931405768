//! Movie catalogs
//!
//! A catalog is the ordered list of movies handed to the grid page at
//! construction. It is a plain value: the app builds one at startup and
//! passes it down, nothing holds it globally.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dataset::MovieDataset;
use crate::error::{CatalogError, CatalogResult};
use crate::movie::MovieEntry;

/// Titles shown when no catalog file is configured
pub const SAMPLE_TITLES: [&str; 5] = [
    "Avatar",
    "Inception",
    "The Dark Knight",
    "Interstellar",
    "The Matrix",
];

/// On-disk catalog formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `{ "movies": [{ "title": .. }] }` or a bare array of movies
    Json,
    /// CSV with a header row containing a `title` column
    Csv,
}

impl CatalogFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "csv" => Ok(CatalogFormat::Csv),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// The configuration shape of a JSON catalog
#[derive(Deserialize)]
struct CatalogFile {
    movies: Vec<MovieEntry>,
}

/// Ordered, immutable list of movies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    movies: Vec<MovieEntry>,
}

impl Catalog {
    pub fn new(movies: Vec<MovieEntry>) -> Self {
        Self { movies }
    }

    /// The five-title sample list
    pub fn sample() -> Self {
        Self::new(SAMPLE_TITLES.iter().copied().map(MovieEntry::from).collect())
    }

    /// Load a catalog file, picking the parser from the extension
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let file = File::open(path)?;
        let catalog = Self::from_reader(file, format)?;

        tracing::debug!(
            "Loaded {} movies from {} ({:?})",
            catalog.len(),
            path.display(),
            format
        );
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R, format: CatalogFormat) -> CatalogResult<Self> {
        match format {
            CatalogFormat::Json => Self::from_json_reader(reader),
            CatalogFormat::Csv => Ok(Self::new(MovieDataset::from_reader(reader)?.entries()?)),
        }
    }

    /// Parse `{ "movies": [..] }` or a bare `[..]`, chosen by the first token
    pub fn from_json_reader<R: Read>(mut reader: R) -> CatalogResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let movies = if text.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<MovieEntry>>(&text)?
        } else {
            serde_json::from_str::<CatalogFile>(&text)?.movies
        };
        Ok(Self::new(movies))
    }

    pub fn movies(&self) -> &[MovieEntry] {
        &self.movies
    }

    pub fn into_movies(self) -> Vec<MovieEntry> {
        self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl From<Vec<MovieEntry>> for Catalog {
    fn from(movies: Vec<MovieEntry>) -> Self {
        Self::new(movies)
    }
}

impl FromIterator<MovieEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = MovieEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_order() {
        let catalog = Catalog::sample();
        let titles: Vec<&str> = catalog.movies().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Avatar", "Inception", "The Dark Knight", "Interstellar", "The Matrix"]
        );
    }

    #[test]
    fn json_wrapped_and_bare_forms() {
        let wrapped = r#"{ "movies": [{ "title": "Heat" }, { "title": "" }] }"#;
        let catalog = Catalog::from_json_reader(wrapped.as_bytes()).unwrap();
        assert_eq!(catalog.movies(), &[MovieEntry::new("Heat"), MovieEntry::new("")]);

        let bare = r#"[{ "title": "Alien" }]"#;
        let catalog = Catalog::from_json_reader(bare.as_bytes()).unwrap();
        assert_eq!(catalog.movies(), &[MovieEntry::new("Alien")]);
    }

    #[test]
    fn json_entry_without_title_is_blank() {
        let catalog = Catalog::from_json_reader("[{}]".as_bytes()).unwrap();
        assert_eq!(catalog.movies(), &[MovieEntry::new("")]);

        let wrapped = r#"{ "movies": [{ "title": "Heat" }, {}] }"#;
        let catalog = Catalog::from_json_reader(wrapped.as_bytes()).unwrap();
        assert_eq!(catalog.movies(), &[MovieEntry::new("Heat"), MovieEntry::new("")]);
    }

    #[test]
    fn json_empty_list() {
        let catalog = Catalog::from_json_reader(r#"{ "movies": [] }"#.as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn json_rejects_wrong_shape() {
        let result = Catalog::from_json_reader(r#"{ "films": 3 }"#.as_bytes());
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn json_shape_errors_point_at_the_problem() {
        let err = Catalog::from_json_reader(r#"{ "films": 3 }"#.as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("missing field `movies`"), "{}", message);
        assert!(message.contains("line 1"), "{}", message);

        let bare = "[\n  { \"title\": \"Heat\" },\n  { \"title\": 7 }\n]";
        let err = Catalog::from_json_reader(bare.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 3"), "{}", err);
    }

    #[test]
    fn csv_takes_title_column() {
        let csv = "id,title,overview\n1,Alien,In space\n2,Heat,\n";
        let catalog = Catalog::from_reader(csv.as_bytes(), CatalogFormat::Csv).unwrap();
        assert_eq!(catalog.movies(), &[MovieEntry::new("Alien"), MovieEntry::new("Heat")]);
    }

    #[test]
    fn csv_without_title_column() {
        let csv = "id,name\n1,Alien\n";
        let result = Catalog::from_reader(csv.as_bytes(), CatalogFormat::Csv);
        assert!(matches!(result, Err(CatalogError::MissingColumn(c)) if c == "title"));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("a/movies.JSON")).unwrap(),
            CatalogFormat::Json
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("movies.csv")).unwrap(),
            CatalogFormat::Csv
        );
        assert!(matches!(
            CatalogFormat::from_path(Path::new("movies.txt")),
            Err(CatalogError::UnsupportedFormat(_))
        ));
        assert!(CatalogFormat::from_path(Path::new("movies")).is_err());
    }
}
