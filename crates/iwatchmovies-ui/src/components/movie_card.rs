//! Movie Card Component
//!
//! One title on a fixed-size dark card. Hovering lifts the card above its
//! neighbours; leaving restores the resting look exactly.

use dioxus::prelude::*;

use crate::theme::colors::{SHADOW_2XL, SHADOW_LG};

/// The hover-dependent part of a card's look
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardVisual {
    pub scale: f32,
    pub z_index: i32,
    pub shadow: &'static str,
    pub cursor: &'static str,
}

impl CardVisual {
    /// Look of a card with no pointer over it
    pub const RESTING: CardVisual = CardVisual {
        scale: 1.0,
        z_index: 0,
        shadow: SHADOW_LG,
        cursor: "default",
    };

    /// Look of a card under the pointer
    pub const EMPHASIZED: CardVisual = CardVisual {
        scale: 1.08,
        z_index: 1,
        shadow: SHADOW_2XL,
        cursor: "pointer",
    };

    pub fn for_hover(hovered: bool) -> Self {
        if hovered {
            Self::EMPHASIZED
        } else {
            Self::RESTING
        }
    }

    /// Inline style declarations for this visual
    pub fn style(&self) -> String {
        format!(
            "transform: scale({}); z-index: {}; box-shadow: {}; cursor: {};",
            self.scale, self.z_index, self.shadow, self.cursor
        )
    }
}

impl Default for CardVisual {
    fn default() -> Self {
        Self::RESTING
    }
}

/// Pointer movements a card reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerMove {
    Enter,
    Leave,
}

impl PointerMove {
    /// Hover flag after this movement
    pub fn hovered(self) -> bool {
        matches!(self, PointerMove::Enter)
    }
}

/// Properties for the MovieCard component
#[derive(Clone, PartialEq, Props)]
pub struct MovieCardProps {
    /// Title shown on the card, verbatim. Missing means empty.
    #[props(default, into)]
    pub title: String,
}

/// Fixed-size card displaying a single movie title
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MovieCard { title: "The Dark Knight" }
/// }
/// ```
#[component]
pub fn MovieCard(props: MovieCardProps) -> Element {
    let mut hovered = use_signal(|| false);
    let style = CardVisual::for_hover(hovered()).style();

    rsx! {
        div {
            class: "movie-card",
            style: "{style}",
            onmouseenter: move |_| hovered.set(PointerMove::Enter.hovered()),
            onmouseleave: move |_| hovered.set(PointerMove::Leave.hovered()),
            p { class: "movie-card__title", "{props.title}" }
        }
    }
}
