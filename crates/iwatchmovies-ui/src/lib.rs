//! iWatchMovies UI Components
//!
//! Dioxus components for the movie grid:
//! - [`MovieCard`]: one title on a dark rounded card that lifts on hover
//! - [`GridPage`]: the page heading plus a responsive grid of cards
//!
//! Styles come from [`theme::global_styles`], which the hosting app mounts
//! once at the root.

pub mod components;
pub mod theme;

pub use components::*;
