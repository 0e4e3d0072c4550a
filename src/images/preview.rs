use image::DynamicImage;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::Protocol;
use ratatui_image::{Image, Resize};

use super::ImageError;

/// Pixel box a portrait is fitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageBox {
	pub width_px: u32,
	pub height_px: u32,
}

impl Default for ImageBox {
	fn default() -> Self {
		Self {
			width_px: 300,
			height_px: 300,
		}
	}
}

impl ImageBox {
	/// Size of the box in terminal cells for the given cell size in pixels.
	#[must_use]
	pub fn cells(&self, font_size: (u16, u16)) -> Rect {
		let (font_width, font_height) = font_size;
		let width = cells_for(self.width_px, font_width);
		let height = cells_for(self.height_px, font_height);
		Rect::new(0, 0, width, height)
	}
}

fn cells_for(pixels: u32, cell: u16) -> u16 {
	let cell = u32::from(cell.max(1));
	let count = pixels.div_ceil(cell).max(1);
	u16::try_from(count).unwrap_or(u16::MAX)
}

/// Pre-encoded image ready for instant terminal rendering.
///
/// Encoding happens on the image worker so that drawing a frame never
/// blocks on it.
#[derive(Clone)]
pub struct ImagePreview {
	protocol: Protocol,
	pub dimensions: (u32, u32),
}

impl std::fmt::Debug for ImagePreview {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ImagePreview")
			.field("dimensions", &self.dimensions)
			.finish_non_exhaustive()
	}
}

impl ImagePreview {
	/// Encode `image` to fit inside `area` cells, keeping its aspect ratio.
	pub fn encode(
		image: DynamicImage,
		picker: &Picker,
		area: Rect,
	) -> Result<Self, ImageError> {
		let dimensions = (image.width(), image.height());
		let protocol = picker
			.new_protocol(image, area, Resize::Fit(None))
			.map_err(|err| ImageError::Encode(err.to_string()))?;
		Ok(Self {
			protocol,
			dimensions,
		})
	}

	/// Render centred within `area`.
	pub fn render(&self, frame: &mut Frame, area: Rect) {
		let centered = center_rect(self.protocol.area(), area);
		frame.render_widget(Image::new(&self.protocol), centered);
	}
}

/// Place `inner` in the middle of `outer`, clipped to it.
pub(crate) fn center_rect(inner: Rect, outer: Rect) -> Rect {
	let width = inner.width.min(outer.width);
	let height = inner.height.min(outer.height);
	Rect {
		x: outer.x + (outer.width - width) / 2,
		y: outer.y + (outer.height - height) / 2,
		width,
		height,
	}
}
