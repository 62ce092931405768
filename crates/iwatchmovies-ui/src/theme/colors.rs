//! Color and shadow constants.
//!
//! Values follow the Chakra UI default palette the design was drawn in.

// === GRAY (Backgrounds) ===
pub const GRAY_900: &str = "#171923";
pub const GRAY_800: &str = "#1A202C";

// === ACCENT ===
pub const RED_500: &str = "#E53E3E";

// === TEXT ===
pub const WHITE: &str = "#FFFFFF";

// === SHADOWS ===
pub const SHADOW_LG: &str =
    "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)";
pub const SHADOW_2XL: &str = "0 25px 50px -12px rgba(0, 0, 0, 0.25)";
