//! Global CSS for the movie grid.

use super::colors::{GRAY_800, GRAY_900, RED_500, WHITE};
use crate::components::grid_column_rules;

/// Layout and typography rules that do not depend on the viewport
pub const BASE_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: sans-serif;
  background: var(--gray-900);
  color: var(--white);
  min-height: 100vh;
}

/* === Page === */
.grid-page {
  background: var(--gray-900);
  min-height: 100vh;
  padding: 2rem;
}

.page-title {
  color: var(--red-500);
  margin-bottom: 2rem;
  text-align: center;
  font-family: sans-serif;
  font-size: 2.25rem;
  font-weight: 700;
}

/* === Grid === */
.movie-grid {
  display: grid;
  gap: 1.5rem;
}

/* === Card === */
.movie-card {
  background: var(--gray-800);
  color: var(--white);
  border-radius: 0.5rem;
  padding: 1.5rem;
  margin: 0.5rem;
  min-width: 200px;
  min-height: 120px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.25rem;
  font-weight: 700;
  transition: transform 0.2s;
}

.movie-card__title {
  text-align: center;
  white-space: pre-wrap;
}
"#;

/// Full stylesheet: palette variables, base rules and grid breakpoints
pub fn global_styles() -> String {
    format!(
        ":root {{\n  --gray-900: {GRAY_900};\n  --gray-800: {GRAY_800};\n  --red-500: {RED_500};\n  --white: {WHITE};\n}}\n{BASE_STYLES}\n{}",
        grid_column_rules()
    )
}
