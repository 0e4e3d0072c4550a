use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::{Clear, Paragraph};

use super::App;
use super::components::{
	PortraitContext, ProgressState, PromptContext, RosterContext, render_portrait, render_prompt,
	render_roster, render_title,
};
use crate::images::backend;

/// The list keeps at least this many columns before the portrait pane is dropped.
const MIN_LIST_WIDTH: u16 = 24;
const PORTRAIT_BORDER: u16 = 2;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
			])
			.split(area);

		render_title(frame, layout[0], &self.ui.title, &self.theme);

		let (progress_text, progress_complete) = self.progress_status();
		render_prompt(
			frame,
			PromptContext {
				search_input: &self.search_input,
				area: layout[1],
				theme: &self.theme,
			},
			ProgressState {
				progress_text: &progress_text,
				progress_complete,
				throbber_state: &self.throbber_state,
			},
		);

		let image_cells = self.ui.image_box.cells(backend::font_size_or_default());
		let portrait_width = image_cells.width.saturating_add(PORTRAIT_BORDER);
		let body = layout[3];
		if body.width >= MIN_LIST_WIDTH.saturating_add(portrait_width) {
			let columns = Layout::default()
				.direction(Direction::Horizontal)
				.constraints([Constraint::Min(MIN_LIST_WIDTH), Constraint::Length(portrait_width)])
				.split(body);
			self.render_list(frame, columns[0]);
			let portrait_height = image_cells
				.height
				.saturating_add(PORTRAIT_BORDER)
				.min(columns[1].height);
			let portrait_area = Rect {
				height: portrait_height,
				..columns[1]
			};
			self.render_selected_portrait(frame, portrait_area, image_cells);
		} else {
			self.render_list(frame, body);
		}
	}

	fn render_list(&mut self, frame: &mut Frame, area: Rect) {
		let records = self.store.filtered().collect();
		self.visible = render_roster(
			frame,
			area,
			&mut self.list_state,
			RosterContext {
				records,
				query: self.store.query(),
				images: &self.images,
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);

		if self.store.filtered_len() == 0 {
			let label = if self.fetch_in_flight() {
				&self.ui.loading_label
			} else {
				&self.ui.empty_label
			};
			let empty = Paragraph::new(label.as_str())
				.alignment(Alignment::Center)
				.style(self.theme.empty_style());
			frame.render_widget(Clear, area);
			frame.render_widget(empty, area);
		}
	}

	fn render_selected_portrait(&self, frame: &mut Frame, area: Rect, image_cells: Rect) {
		let record = self.current_selection();
		let state = record.and_then(|record| self.images.state(&record.id));
		render_portrait(
			frame,
			area,
			PortraitContext {
				record,
				state,
				image_cells,
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);
	}
}
