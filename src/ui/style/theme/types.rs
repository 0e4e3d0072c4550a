use ratatui::style::{Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
}

impl Default for Theme {
	fn default() -> Self {
		super::builtins::SLATE
	}
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn title_style(&self) -> Style {
		self.header.add_modifier(Modifier::BOLD)
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	/// Style of a record's name line.
	#[must_use]
	pub fn name_style(&self) -> Style {
		Style::new().add_modifier(Modifier::BOLD)
	}

	/// Style of a record's actor line.
	#[must_use]
	pub fn subtitle_style(&self) -> Style {
		self.empty
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn answers_to(&self, normalized: &str) -> bool {
		self.name == normalized || self.aliases.iter().any(|alias| *alias == normalized)
	}
}

pub(super) fn find<'a>(
	definitions: &'a [ThemeDefinition],
	name: &str,
) -> Option<&'a ThemeDefinition> {
	let normalized = name.trim().to_ascii_lowercase();
	definitions
		.iter()
		.find(|definition| definition.answers_to(&normalized))
}
