use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the search row.
pub struct PromptContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Status shown at the right edge of the search row.
pub struct ProgressState<'a> {
	pub progress_text: &'a str,
	pub progress_complete: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the page title across the full width.
pub fn render_title(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
	let title = Paragraph::new(title.to_string())
		.alignment(Alignment::Center)
		.style(theme.title_style());
	frame.render_widget(title, area);
}

/// Render the search field with the progress label at its right edge.
pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_>, progress: ProgressState<'_>) {
	let PromptContext {
		search_input,
		area,
		theme,
	} = prompt;

	const MARKER: &str = "> ";
	let marker_width = MARKER.width() as u16;
	if area.width <= marker_width {
		return;
	}
	let marker_area = Rect {
		width: marker_width,
		..area
	};
	let input_area = Rect {
		x: area.x + marker_width,
		width: area.width - marker_width,
		..area
	};

	frame.render_widget(Paragraph::new(MARKER).style(theme.prompt_style()), marker_area);
	search_input.render(frame, input_area);
	render_progress(frame, input_area, progress, theme);
}

fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	let ProgressState {
		progress_text,
		progress_complete,
		throbber_state,
	} = progress;
	if area.width == 0 || area.height == 0 || progress_text.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if !progress_complete {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans
		.push(Span::styled(progress_text.to_string(), muted_style));

	let line_width = line.width() as u16;
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	// Keep two columns between the typed query and the label.
	let row = area.top();
	let last_char_x = (area.left()..area.right())
		.filter(|&x| {
			buffer
				.cell((x, row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.last();
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, &line, max_width);
}
