//! Parsing of TMDB list cells.
//!
//! TMDB exports store genres, keywords, cast and crew as JSON arrays of
//! objects, e.g. `[{"id": 35, "name": "Comedy"}]`. Only the `name` values
//! are kept.

use serde_json::Value;

/// Extract the `name` of every object in a JSON array cell.
///
/// An empty cell is an empty list. A cell holding valid JSON that is not an
/// array also yields an empty list. Elements that are not objects, or
/// objects without a `name`, are skipped.
pub fn parse_names(cell: &str) -> Result<Vec<String>, serde_json::Error> {
    if cell.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(cell)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .iter()
        .filter_map(|item| item.as_object()?.get("name"))
        .map(|name| match name {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect())
}
