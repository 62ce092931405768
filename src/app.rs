use dioxus::prelude::*;
use iwatchmovies_core::Catalog;
use iwatchmovies_ui::theme::global_styles;
use iwatchmovies_ui::GridPage;

/// Root application component.
///
/// Mounts the stylesheet and hands the launch catalog to the grid page.
#[component]
pub fn App() -> Element {
    let catalog = use_context::<Catalog>();

    rsx! {
        style { {global_styles()} }
        GridPage { movies: catalog.into_movies() }
    }
}
