use std::path::PathBuf;

use roster::{DecodeMode, Theme, UiConfig};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub endpoint: String,
	pub decode_mode: DecodeMode,
	pub theme_name: Option<String>,
	pub theme: Theme,
	pub ui: UiConfig,
	pub log_file: Option<PathBuf>,
	pub log_filter: Option<String>,
}

impl ResolvedConfig {
	/// Human readable summary of the effective configuration.
	pub fn summary(&self) -> String {
		let mut lines = vec![
			"Effective configuration:".to_string(),
			format!("  Endpoint: {}", self.endpoint),
			format!(
				"  Decode mode: {}",
				match self.decode_mode {
					DecodeMode::Strict => "strict",
					DecodeMode::Lenient => "lenient",
				}
			),
			format!("  Title: {}", self.ui.title),
			format!("  Placeholder: {}", self.ui.placeholder),
			format!(
				"  UI theme: {}",
				self.theme_name.as_deref().unwrap_or("slate (default)")
			),
			format!(
				"  Image box: {}x{} px",
				self.ui.image_box.width_px, self.ui.image_box.height_px
			),
		];
		if !self.ui.initial_query.is_empty() {
			lines.push(format!("  Initial query: {}", self.ui.initial_query));
		}
		match &self.log_file {
			Some(path) => lines.push(format!("  Log file: {}", path.display())),
			None => lines.push("  Log file: (default)".to_string()),
		}
		if let Some(filter) = &self.log_filter {
			lines.push(format!("  Log filter: {filter}"));
		}
		lines.join("\n")
	}

	pub fn print_summary(&self) {
		println!("{}", self.summary());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			endpoint: "http://localhost/api".into(),
			decode_mode: DecodeMode::Lenient,
			theme_name: Some("light".into()),
			theme: Theme::default(),
			ui: UiConfig::default().with_initial_query("ron"),
			log_file: Some(PathBuf::from("/tmp/roster.log")),
			log_filter: None,
		};

		let summary = config.summary();
		assert!(summary.contains("Endpoint: http://localhost/api"));
		assert!(summary.contains("Decode mode: lenient"));
		assert!(summary.contains("UI theme: light"));
		assert!(summary.contains("Image box: 300x300 px"));
		assert!(summary.contains("Initial query: ron"));
		assert!(summary.contains("/tmp/roster.log"));
	}
}
