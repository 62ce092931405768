//! Movie grid components

mod grid_page;
mod movie_card;

pub use grid_page::*;
pub use movie_card::*;
