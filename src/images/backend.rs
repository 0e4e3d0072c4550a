//! Terminal graphics capability detection and caching.
//!
//! Probing exchanges escape sequences with the terminal, so it has to run
//! after the alternate screen is entered and before the input thread starts
//! reading events. The result is memoised for the image worker.

use std::env;
use std::sync::OnceLock;

use ratatui_image::picker::{Picker, ProtocolType};

const PROTOCOL_ENV: &str = "ROSTER_IMAGE_PROTOCOL";
const FALLBACK_FONT_SIZE: (u16, u16) = (10, 20);

/// Shared graphics state describing the chosen protocol.
pub struct GraphicsBackend {
	picker: Picker,
	warning: Option<String>,
}

impl GraphicsBackend {
	pub fn picker(&self) -> &Picker {
		&self.picker
	}

	/// Set when detection fell back to half blocks.
	pub fn warning(&self) -> Option<&str> {
		self.warning.as_deref()
	}

	/// Width and height of one terminal cell in pixels.
	pub fn font_size(&self) -> (u16, u16) {
		self.picker.font_size()
	}
}

static GRAPHICS: OnceLock<GraphicsBackend> = OnceLock::new();

/// Probe the running terminal once. Later calls are no-ops.
pub fn initialize() {
	if GRAPHICS.get().is_some() {
		return;
	}
	let backend = detect_backend();
	if let Some(warning) = backend.warning() {
		tracing::warn!("{warning}");
	}
	let _ = GRAPHICS.set(backend);
}

/// The cached backend, if [`initialize`] ran.
pub fn backend() -> Option<&'static GraphicsBackend> {
	GRAPHICS.get()
}

/// Cell size in pixels, assuming a common terminal font when undetected.
pub fn font_size_or_default() -> (u16, u16) {
	backend()
		.map(GraphicsBackend::font_size)
		.unwrap_or(FALLBACK_FONT_SIZE)
}

fn detect_backend() -> GraphicsBackend {
	if let Some(picker) = picker_from_env() {
		tracing::debug!(protocol = ?picker.protocol_type(), "graphics protocol forced by environment");
		return GraphicsBackend {
			picker,
			warning: None,
		};
	}

	match Picker::from_query_stdio() {
		Ok(picker) => {
			tracing::debug!(
				protocol = ?picker.protocol_type(),
				font_size = ?picker.font_size(),
				"graphics protocol detected"
			);
			GraphicsBackend {
				picker,
				warning: None,
			}
		}
		Err(error) => GraphicsBackend {
			picker: Picker::from_fontsize(FALLBACK_FONT_SIZE),
			warning: Some(format!(
				"Image protocol detection failed ({error}); falling back to unicode half blocks"
			)),
		},
	}
}

fn picker_from_env() -> Option<Picker> {
	let requested = env::var(PROTOCOL_ENV).ok()?;
	let protocol = parse_protocol(&requested)?;
	let mut picker = Picker::from_fontsize(FALLBACK_FONT_SIZE);
	picker.set_protocol_type(protocol);
	Some(picker)
}

fn parse_protocol(raw: &str) -> Option<ProtocolType> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"halfblocks" | "halfblock" => Some(ProtocolType::Halfblocks),
		"sixel" => Some(ProtocolType::Sixel),
		"kitty" => Some(ProtocolType::Kitty),
		"iterm2" | "iterm" => Some(ProtocolType::Iterm2),
		_ => None,
	}
}
