//! The movie record rendered by each card

use serde::{Deserialize, Serialize};

/// A single movie in the grid.
///
/// Only the display title is carried. Titles are not validated: an empty or
/// whitespace-only title is a legitimate value and renders as an empty card,
/// and so does an entry with no title at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieEntry {
    #[serde(default)]
    pub title: String,
}

impl MovieEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl From<&str> for MovieEntry {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for MovieEntry {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}

impl std::fmt::Display for MovieEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}
