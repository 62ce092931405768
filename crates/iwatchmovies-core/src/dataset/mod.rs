//! TMDB dataset preparation.
//!
//! Loads a raw TMDB movies export, cleans it and reduces the list columns to
//! plain names so the result can feed a catalog or a text index.
//!
//! ## Pipeline
//!
//! ```text
//! load -> drop_unnecessary_columns -> drop_nulls -> drop_duplicates
//!      -> parse_named_lists(genres, keywords, cast, crew)
//!      -> combine_text(genres, keywords, cast, crew, overview)
//!      -> write_csv
//! ```
//!
//! [`MovieDataset::prepare`] runs the whole pipeline.

mod named_list;

use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rand::Rng;

use crate::error::{CatalogError, CatalogResult};
use crate::movie::MovieEntry;

pub use named_list::parse_names;

/// Columns the catalog has no use for
pub const UNNECESSARY_COLUMNS: [&str; 8] = [
    "budget",
    "homepage",
    "original_title",
    "popularity",
    "revenue",
    "status",
    "vote_average",
    "vote_count",
];

/// Columns holding JSON lists of named objects
pub const NAMED_LIST_COLUMNS: [&str; 4] = ["genres", "keywords", "cast", "crew"];

/// Columns merged into [`COMBINED_TEXT_COLUMN`]
pub const TEXT_SOURCE_COLUMNS: [&str; 5] = ["genres", "keywords", "cast", "crew", "overview"];

pub const COMBINED_TEXT_COLUMN: &str = "combined_text";

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Raw text as read from the CSV
    Text(String),
    /// Names extracted from a JSON list cell
    Names(Vec<String>),
}

impl Cell {
    /// Empty text counts as missing; parsed lists never do
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Text(s) if s.is_empty())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Names(names) => f.write_str(&names.join(", ")),
        }
    }
}

/// Read-only view of one row
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    dataset: &'a MovieDataset,
    index: usize,
}

impl<'a> Record<'a> {
    /// Position of the row in the current table
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        let col = self.dataset.column_index(column)?;
        self.dataset.rows[self.index].get(col)
    }
}

/// A CSV table of movies, held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieDataset {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl MovieDataset {
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let dataset = Self::from_reader(File::open(path)?)?;
        tracing::info!(
            "Loaded {} rows x {} columns from {}",
            dataset.len(),
            dataset.headers.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|v| Cell::Text(v.to_string())).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Run the full cleaning pipeline
    pub fn prepare(&mut self) -> CatalogResult<()> {
        self.drop_unnecessary_columns();
        self.drop_nulls();
        self.drop_duplicates()?;
        self.parse_named_lists(&NAMED_LIST_COLUMNS)?;
        self.combine_text(&TEXT_SOURCE_COLUMNS, COMBINED_TEXT_COLUMN);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        (index < self.rows.len()).then_some(Record {
            dataset: self,
            index,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        (0..self.rows.len()).map(move |index| Record {
            dataset: self,
            index,
        })
    }

    /// Remove [`UNNECESSARY_COLUMNS`]. Returns how many were present.
    pub fn drop_unnecessary_columns(&mut self) -> usize {
        let keep: Vec<bool> = self
            .headers
            .iter()
            .map(|h| !UNNECESSARY_COLUMNS.contains(&h.as_str()))
            .collect();
        let dropped = keep.iter().filter(|k| !**k).count();
        if dropped == 0 {
            return 0;
        }

        self.headers = retain_by_mask(std::mem::take(&mut self.headers), &keep);
        for row in &mut self.rows {
            *row = retain_by_mask(std::mem::take(row), &keep);
        }

        tracing::debug!("Dropped {} unnecessary columns", dropped);
        dropped
    }

    /// Remove rows with any empty cell. Returns the number removed.
    pub fn drop_nulls(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !row.iter().any(Cell::is_null));
        let removed = before - self.rows.len();
        tracing::debug!("Dropped {} rows with missing values", removed);
        removed
    }

    /// Keep the first row for each `id`. Returns the number removed.
    pub fn drop_duplicates(&mut self) -> CatalogResult<usize> {
        let id_col = self
            .column_index("id")
            .ok_or_else(|| CatalogError::MissingColumn("id".to_string()))?;

        let before = self.rows.len();
        let mut seen = HashSet::new();
        self.rows.retain(|row| seen.insert(row[id_col].to_string()));
        let removed = before - self.rows.len();
        tracing::debug!("Dropped {} duplicate ids", removed);
        Ok(removed)
    }

    /// Replace the text of each listed column with the names it holds.
    ///
    /// Columns that are absent are skipped, as are cells already parsed.
    pub fn parse_named_lists(&mut self, columns: &[&str]) -> CatalogResult<()> {
        for column in columns {
            let Some(col) = self.column_index(column) else {
                continue;
            };

            for (row_index, row) in self.rows.iter_mut().enumerate() {
                if let Cell::Text(raw) = &row[col] {
                    let names = parse_names(raw).map_err(|e| CatalogError::InvalidField {
                        row: row_index,
                        column: column.to_string(),
                        message: e.to_string(),
                    })?;
                    row[col] = Cell::Names(names);
                }
            }
            tracing::debug!("Parsed named lists in '{}'", column);
        }
        Ok(())
    }

    /// Join names and text from `sources` into `target`, space separated.
    ///
    /// `target` is appended, or overwritten when it already exists.
    pub fn combine_text(&mut self, sources: &[&str], target: &str) {
        let source_cols: Vec<usize> = sources
            .iter()
            .filter_map(|c| self.column_index(c))
            .collect();

        let combined: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                let mut parts: Vec<&str> = Vec::new();
                for &col in &source_cols {
                    match &row[col] {
                        Cell::Names(names) => parts.extend(names.iter().map(String::as_str)),
                        Cell::Text(s) => parts.push(s),
                    }
                }
                parts.join(" ")
            })
            .collect();

        let col = match self.column_index(target) {
            Some(col) => col,
            None => {
                self.headers.push(target.to_string());
                for row in &mut self.rows {
                    row.push(Cell::Text(String::new()));
                }
                self.headers.len() - 1
            }
        };
        for (row, text) in self.rows.iter_mut().zip(combined) {
            row[col] = Cell::Text(text);
        }
    }

    /// Titles of every row, in order
    pub fn entries(&self) -> CatalogResult<Vec<MovieEntry>> {
        let col = self
            .column_index("title")
            .ok_or_else(|| CatalogError::MissingColumn("title".to_string()))?;
        Ok(self
            .rows
            .iter()
            .map(|row| MovieEntry::new(row[col].to_string()))
            .collect())
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> CatalogResult<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Up to `n` distinct random rows
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Record<'_>> {
        let amount = n.min(self.rows.len());
        rand::seq::index::sample(rng, self.rows.len(), amount)
            .into_iter()
            .map(|index| Record {
                dataset: self,
                index,
            })
            .collect()
    }
}

fn retain_by_mask<T>(items: Vec<T>, keep: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, &k)| k.then_some(item))
        .collect()
}
