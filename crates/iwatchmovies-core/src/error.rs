//! Error types for iWatchMovies

use thiserror::Error;

/// Error type for catalog loading and dataset processing
#[derive(Error, Debug)]
pub enum CatalogError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input or failed CSV write
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON catalog
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension does not name a known catalog format
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// A column the operation depends on is absent
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A cell could not be parsed as a list of named objects
    #[error("Invalid value in column '{column}' at row {row}: {message}")]
    InvalidField {
        row: usize,
        column: String,
        message: String,
    },
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
