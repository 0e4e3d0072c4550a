mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use types::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

/// Built-in theme definitions in display order.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	BUILT_IN_DEFINITIONS
}

/// Canonical names of the built-in themes.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILT_IN_DEFINITIONS.iter().map(|definition| definition.name)
}

/// Look up a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	types::find(BUILT_IN_DEFINITIONS, name).map(|definition| definition.theme)
}

#[must_use]
pub fn default_theme() -> Theme {
	Theme::default()
}
