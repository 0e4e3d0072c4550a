use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::images::{ImageState, center_rect};
use crate::types::CharacterRecord;
use crate::ui::style::Theme;

/// Argument bundle for the portrait pane.
pub struct PortraitContext<'a> {
	pub record: Option<&'a CharacterRecord>,
	pub state: Option<&'a ImageState>,
	/// Fixed box the image is fitted into, in cells.
	pub image_cells: Rect,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Render the selected record's portrait inside a bordered pane.
pub fn render_portrait(frame: &mut Frame, area: Rect, portrait: PortraitContext<'_>) {
	let PortraitContext {
		record,
		state,
		image_cells,
		throbber_state,
		theme,
	} = portrait;

	let title = record.map(|record| record.name.as_str()).unwrap_or_default();
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.empty_style())
		.title(Line::from(format!(" {title} ")).style(theme.header_style()));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if record.is_none() || inner.width == 0 || inner.height == 0 {
		return;
	}
	let image_area = center_rect(image_cells, inner);

	match state {
		Some(ImageState::Loaded(preview)) => preview.render(frame, image_area),
		Some(ImageState::Loading) => {
			let spinner = Throbber::default()
				.style(theme.empty_style())
				.throbber_style(theme.empty_style());
			let line = Line::from(vec![
				spinner.to_symbol_span(throbber_state),
				Span::styled("Loading", theme.empty_style()),
			]);
			let middle = Rect {
				y: image_area.y + image_area.height / 2,
				height: 1,
				..image_area
			};
			frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), middle);
		}
		Some(ImageState::Failed) | None => {}
	}
}
