//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the terminal UI.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, builtin_themes, by_name, default_theme, names};
