//! Fixed palette and stylesheet

pub mod colors;
mod styles;

pub use styles::{global_styles, BASE_STYLES};
