//! Visual styling for the palette.
//!
//! Themes are plain `const` style tables selected by name.

pub mod theme;

pub use theme::{DEFAULT_THEME, SLATE, Theme, by_name, default_theme, lookup, names};
