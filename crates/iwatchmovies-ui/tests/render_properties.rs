//! Server-side render tests for the movie grid
//!
//! Components are rendered to markup with dioxus-ssr and the card titles are
//! read back out of the HTML.

use dioxus::prelude::*;
use iwatchmovies_core::{Catalog, MovieEntry};
use iwatchmovies_ui::{GridPage, GridPageProps, MovieCard, MovieCardProps, CardVisual, PAGE_TITLE};
use proptest::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

const TITLE_OPEN: &str = r#"class="movie-card__title">"#;

fn render_page(movies: Vec<MovieEntry>) -> String {
    let mut dom = VirtualDom::new_with_props(GridPage, GridPageProps { movies });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_card(title: &str) -> String {
    let mut dom = VirtualDom::new_with_props(
        MovieCard,
        MovieCardProps {
            title: title.to_string(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Text of every card title element, in document order
fn card_titles(html: &str) -> Vec<String> {
    html.split(TITLE_OPEN)
        .skip(1)
        .map(|rest| {
            let end = rest.find("</p>").unwrap_or(rest.len());
            decode_entities(&strip_comments(&rest[..end]))
        })
        .collect()
}

/// Undo HTML text escaping; `&amp;` goes last so `&amp;lt;` stays `&lt;`
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn strip_comments(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        rest = match rest[start..].find("-->") {
            Some(end) => &rest[start + end + 3..],
            None => "",
        };
    }
    out.push_str(rest);
    out
}

fn entries(titles: &[&str]) -> Vec<MovieEntry> {
    titles.iter().copied().map(MovieEntry::from).collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn sample_list_renders_five_cards_in_order() {
    let html = render_page(Catalog::sample().into_movies());
    assert_eq!(
        card_titles(&html),
        vec!["Avatar", "Inception", "The Dark Knight", "Interstellar", "The Matrix"]
    );
    assert!(html.contains(PAGE_TITLE));
}

#[test]
fn empty_list_renders_empty_grid() {
    let html = render_page(Vec::new());
    assert!(html.contains(r#"class="movie-grid""#));
    assert!(card_titles(&html).is_empty());
    assert!(!html.contains(r#"class="movie-card""#));
}

#[test]
fn empty_title_renders_one_blank_card() {
    let html = render_page(entries(&[""]));
    assert_eq!(card_titles(&html), vec![String::new()]);
    assert_eq!(html.matches(r#"class="movie-card""#).count(), 1);
}

#[test]
fn cards_share_the_same_fixed_class() {
    let blank = render_card("");
    let named = render_card("Interstellar");
    assert!(blank.contains(r#"class="movie-card""#));
    assert!(named.contains(r#"class="movie-card""#));
}

#[test]
fn card_starts_in_resting_visual() {
    let html = render_card("Avatar");
    assert!(html.contains(&CardVisual::RESTING.style()));
    assert!(!html.contains(&CardVisual::EMPHASIZED.style()));
}

#[test]
fn card_without_title_is_blank() {
    let mut dom = VirtualDom::new_with_props(MovieCard, MovieCardProps::builder().build());
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert_eq!(card_titles(&html), vec![String::new()]);
    assert_eq!(html.matches(r#"class="movie-card""#).count(), 1);
}

#[test]
fn markup_characters_are_escaped_not_interpreted() {
    let title = "Tom & Jerry <3 \"x\"";
    let html = render_card(title);
    assert!(html.contains("Tom &amp; Jerry &lt;3"));
    assert!(!html.contains("<3"));
    assert_eq!(card_titles(&html), vec![title]);

    let html = render_card("Amélie {x} </p>");
    assert_eq!(card_titles(&html), vec!["Amélie {x} </p>"]);
}

#[test]
fn whitespace_titles_are_not_trimmed() {
    let html = render_card("  The Matrix  ");
    assert_eq!(card_titles(&html), vec!["  The Matrix  "]);
}

#[test]
fn rendering_twice_is_identical() {
    let movies = Catalog::sample().into_movies();
    assert_eq!(render_page(movies.clone()), render_page(movies));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// One card per entry, in list order, titles untouched
    #[test]
    fn card_per_entry_in_order(titles in prop::collection::vec("\\PC{0,24}", 0..16)) {
        let movies: Vec<MovieEntry> = titles.iter().cloned().map(MovieEntry::from).collect();
        let html = render_page(movies);
        prop_assert_eq!(card_titles(&html), titles);
    }

    /// No counters or randomness leak into the markup
    #[test]
    fn render_is_idempotent(titles in prop::collection::vec("\\PC{0,12}", 0..8)) {
        let movies: Vec<MovieEntry> = titles.into_iter().map(MovieEntry::from).collect();
        prop_assert_eq!(render_page(movies.clone()), render_page(movies));
    }
}
