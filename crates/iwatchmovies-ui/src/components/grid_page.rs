//! Grid Page Component
//!
//! Page heading plus one [`MovieCard`] per movie, laid out in a grid whose
//! column count follows the viewport width.

use dioxus::prelude::*;
use iwatchmovies_core::{Catalog, MovieEntry};

use super::MovieCard;

/// Heading shown above the grid
pub const PAGE_TITLE: &str = "iWatchMovies";

/// Root font size used to convert em breakpoints to pixels
const ROOT_FONT_PX: f32 = 16.0;

/// Viewport width classes, smallest first
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
    ];

    /// Lower bound of the class, in em
    pub fn min_width_em(self) -> f32 {
        match self {
            Breakpoint::Base => 0.0,
            Breakpoint::Sm => 30.0,
            Breakpoint::Md => 48.0,
            Breakpoint::Lg => 62.0,
        }
    }

    /// Number of grid columns at this width class
    pub fn columns(self) -> usize {
        match self {
            Breakpoint::Base => 1,
            Breakpoint::Sm => 2,
            Breakpoint::Md => 3,
            Breakpoint::Lg => 5,
        }
    }

    /// Classify a viewport width in CSS pixels. Bounds are inclusive.
    pub fn for_viewport_width(px: f32) -> Self {
        let em = px / ROOT_FONT_PX;
        Self::ALL
            .into_iter()
            .rev()
            .find(|bp| em >= bp.min_width_em())
            .unwrap_or(Breakpoint::Base)
    }
}

/// Columns the grid shows at a viewport width in CSS pixels
pub fn columns_for_viewport_width(px: f32) -> usize {
    Breakpoint::for_viewport_width(px).columns()
}

/// `grid-template-columns` rules for every breakpoint
pub fn grid_column_rules() -> String {
    Breakpoint::ALL
        .into_iter()
        .map(|bp| {
            let rule = format!(
                ".movie-grid {{ grid-template-columns: repeat({}, minmax(0, 1fr)); }}",
                bp.columns()
            );
            if bp == Breakpoint::Base {
                format!("{rule}\n")
            } else {
                format!(
                    "@media screen and (min-width: {}em) {{\n  {rule}\n}}\n",
                    bp.min_width_em()
                )
            }
        })
        .collect()
}

/// Properties for the GridPage component
#[derive(Clone, PartialEq, Props)]
pub struct GridPageProps {
    /// Movies to show, in display order
    #[props(default = Catalog::sample().into_movies())]
    pub movies: Vec<MovieEntry>,
}

/// Full page: heading and responsive card grid
///
/// Cards are keyed by position, which holds as long as the list is never
/// reordered while mounted.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GridPage { movies: catalog.into_movies() }
/// }
/// ```
#[component]
pub fn GridPage(props: GridPageProps) -> Element {
    rsx! {
        main { class: "grid-page",
            h1 { class: "page-title", "{PAGE_TITLE}" }

            div { class: "movie-grid",
                for (index, movie) in props.movies.iter().enumerate() {
                    MovieCard {
                        key: "{index}",
                        title: movie.title.clone(),
                    }
                }
            }
        }
    }
}
