//! Where the launch catalog comes from.

use std::fmt;
use std::path::PathBuf;

use iwatchmovies_core::{Catalog, CatalogResult};

/// Catalog file looked up when none is given on the command line
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("iwatchmovies").join("movies.json"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Path passed with --catalog; must load
    Explicit(PathBuf),
    /// Default config location, present on disk
    Default(PathBuf),
    /// Built-in five-title list
    Sample,
}

/// Pick the catalog source.
///
/// An explicit path always wins, even when it does not exist, so that a typo
/// fails loudly instead of silently showing the sample list.
pub fn resolve(explicit: Option<PathBuf>, default_path: Option<PathBuf>) -> CatalogSource {
    if let Some(path) = explicit {
        return CatalogSource::Explicit(path);
    }
    match default_path {
        Some(path) if path.is_file() => CatalogSource::Default(path),
        _ => CatalogSource::Sample,
    }
}

impl CatalogSource {
    pub fn load(&self) -> CatalogResult<Catalog> {
        match self {
            CatalogSource::Explicit(path) | CatalogSource::Default(path) => Catalog::load(path),
            CatalogSource::Sample => Ok(Catalog::sample()),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Explicit(path) | CatalogSource::Default(path) => {
                write!(f, "{}", path.display())
            }
            CatalogSource::Sample => f.write_str("built-in sample list"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("mine.csv");
        let source = resolve(Some(explicit.clone()), Some(dir.path().join("movies.json")));
        assert_eq!(source, CatalogSource::Explicit(explicit));
    }

    #[test]
    fn missing_explicit_path_fails_to_load() {
        let dir = TempDir::new().unwrap();
        let source = resolve(Some(dir.path().join("typo.json")), None);
        assert!(source.load().is_err());
    }

    #[test]
    fn existing_default_is_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.json");
        std::fs::write(&path, r#"[{ "title": "Heat" }]"#).unwrap();

        let source = resolve(None, Some(path.clone()));
        assert_eq!(source, CatalogSource::Default(path));
        assert_eq!(source.load().unwrap().len(), 1);
    }

    #[test]
    fn falls_back_to_sample() {
        let dir = TempDir::new().unwrap();
        let source = resolve(None, Some(dir.path().join("movies.json")));
        assert_eq!(source, CatalogSource::Sample);
        assert_eq!(source.load().unwrap(), Catalog::sample());

        assert_eq!(resolve(None, None), CatalogSource::Sample);
        assert_eq!(CatalogSource::Sample.to_string(), "built-in sample list");
    }
}
