use std::path::PathBuf;

use anyhow::{Result, anyhow, ensure};
use roster::images::ImageBox;
use roster::{DEFAULT_ENDPOINT, DecodeMode, UiConfig, default_theme, ui::style};
use serde::Deserialize;

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	source: SourceSection,
	ui: UiSection,
	logging: LoggingSection,
}

/// Where the roster comes from and how strictly it is decoded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SourceSection {
	endpoint: Option<String>,
	lenient_decode: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	placeholder: Option<String>,
	initial_query: Option<String>,
	theme: Option<String>,
	image_width_px: Option<u32>,
	image_height_px: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	file: Option<PathBuf>,
	filter: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.source.endpoint = Some(endpoint);
		}
		if cli.lenient {
			self.source.lenient_decode = Some(true);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.ui.placeholder = Some(placeholder);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(path) = cli.log_file.clone() {
			self.logging.file = Some(path);
		}
		if let Some(filter) = cli.log_filter.clone() {
			self.logging.filter = Some(filter);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	///
	/// The endpoint is passed through untouched; a malformed URL is reported
	/// by the fetch itself.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let endpoint = self
			.source
			.endpoint
			.map(|endpoint| endpoint.trim().to_string())
			.filter(|endpoint| !endpoint.is_empty())
			.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
		let decode_mode = if self.source.lenient_decode.unwrap_or(false) {
			DecodeMode::Lenient
		} else {
			DecodeMode::Strict
		};

		let theme = match self.ui.theme.as_deref() {
			Some(name) => style::by_name(name).ok_or_else(|| {
				anyhow!(
					"unknown theme `{name}` (available: {})",
					style::names().collect::<Vec<_>>().join(", ")
				)
			})?,
			None => default_theme(),
		};

		let defaults = UiConfig::default();
		let image_box = ImageBox {
			width_px: self.ui.image_width_px.unwrap_or(defaults.image_box.width_px),
			height_px: self.ui.image_height_px.unwrap_or(defaults.image_box.height_px),
		};
		ensure!(
			image_box.width_px > 0 && image_box.height_px > 0,
			"image dimensions must be positive"
		);

		let mut ui = defaults.with_image_box(image_box);
		if let Some(title) = self.ui.title {
			ui = ui.with_title(title);
		}
		if let Some(placeholder) = self.ui.placeholder {
			ui = ui.with_placeholder(placeholder);
		}
		if let Some(query) = self.ui.initial_query {
			ui = ui.with_initial_query(query);
		}

		Ok(ResolvedConfig {
			endpoint,
			decode_mode,
			theme_name: self.ui.theme,
			theme,
			ui,
			log_file: self.logging.file,
			log_filter: self.logging.filter,
		})
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;
	use config::{Config, File, FileFormat};

	use super::*;

	fn from_toml(toml: &str) -> RawConfig {
		Config::builder()
			.add_source(File::from_str(toml, FileFormat::Toml))
			.build()
			.unwrap()
			.try_deserialize()
			.unwrap()
	}

	#[test]
	fn cli_overrides_take_precedence() {
		let cli = CliArgs::parse_from([
			"roster",
			"--endpoint",
			"http://localhost/api",
			"--lenient",
			"--title",
			"Hogwarts",
			"--placeholder",
			"Find...",
			"--query",
			"ron",
			"--theme",
			"light",
			"--log-file",
			"/tmp/roster.log",
			"--log-filter",
			"roster=debug",
		]);

		let mut config = from_toml("[source]\nendpoint = \"http://file/api\"\n[ui]\ntitle = \"File\"\n");
		config.apply_cli_overrides(&cli);

		assert_eq!(config.source.endpoint, cli.endpoint);
		assert_eq!(config.source.lenient_decode, Some(true));
		assert_eq!(config.ui.title, cli.title);
		assert_eq!(config.ui.placeholder, cli.placeholder);
		assert_eq!(config.ui.initial_query, cli.initial_query);
		assert_eq!(config.ui.theme, cli.theme);
		assert_eq!(config.logging.file, cli.log_file);
		assert_eq!(config.logging.filter, cli.log_filter);
	}

	#[test]
	fn defaults_describe_the_stock_screen() {
		let resolved = RawConfig::default().resolve().unwrap();
		assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
		assert_eq!(resolved.decode_mode, DecodeMode::Strict);
		assert_eq!(resolved.ui.title, "Harry Potter");
		assert_eq!(resolved.ui.placeholder, "Search...");
		assert_eq!(resolved.ui.image_box, ImageBox::default());
		assert!(resolved.log_file.is_none());
	}

	#[test]
	fn file_values_are_resolved() {
		let resolved = from_toml(
			r#"
			[source]
			endpoint = "  http://localhost:9000/characters  "
			lenient_decode = true

			[ui]
			theme = "Solarized"
			initial_query = "potter"
			image_width_px = 200
			"#,
		)
		.resolve()
		.unwrap();

		assert_eq!(resolved.endpoint, "http://localhost:9000/characters");
		assert_eq!(resolved.decode_mode, DecodeMode::Lenient);
		assert_eq!(resolved.theme, style::theme::SOLARIZED);
		assert_eq!(resolved.ui.initial_query, "potter");
		assert_eq!(resolved.ui.image_box.width_px, 200);
		assert_eq!(resolved.ui.image_box.height_px, 300);
	}

	#[test]
	fn blank_endpoint_falls_back_to_default() {
		let resolved = from_toml("[source]\nendpoint = \"\"\n").resolve().unwrap();
		assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
	}

	#[test]
	fn unknown_theme_is_rejected() {
		let err = from_toml("[ui]\ntheme = \"neon\"\n").resolve().unwrap_err();
		assert!(err.to_string().contains("neon"));
	}

	#[test]
	fn zero_sized_image_box_is_rejected() {
		assert!(from_toml("[ui]\nimage_height_px = 0\n").resolve().is_err());
	}
}
