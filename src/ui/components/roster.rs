use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{HighlightSpacing, List, ListItem, ListState};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::images::{ImageState, ImageTracker};
use crate::search::Needle;
use crate::types::CharacterRecord;
use crate::ui::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const ROW_HEIGHT: u16 = 2;
const LOADED_GLYPH: &str = "▣ ";
const BLANK_GLYPH: &str = "  ";

/// Argument bundle describing the rows a list render should use.
pub struct RosterContext<'a> {
	pub records: Vec<&'a CharacterRecord>,
	pub query: &'a str,
	pub images: &'a ImageTracker,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Render the filtered roster and return the positions that ended up on screen.
pub fn render_roster(
	frame: &mut Frame,
	area: Rect,
	list_state: &mut ListState,
	roster: RosterContext<'_>,
) -> Range<usize> {
	let RosterContext {
		records,
		query,
		images,
		throbber_state,
		theme,
	} = roster;
	let total = records.len();

	let items: Vec<ListItem<'_>> = records
		.into_iter()
		.map(|record| {
			let glyph = image_glyph(images.state(&record.id), throbber_state, theme);
			let name = name_line(glyph, &record.name, query, theme);
			let actor = Line::from(vec![
				Span::raw(BLANK_GLYPH),
				Span::styled(record.actor.clone(), theme.subtitle_style()),
			]);
			ListItem::new(Text::from(vec![name, actor]))
		})
		.collect();

	let list = List::new(items)
		.highlight_spacing(HighlightSpacing::Always)
		.highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(list, area, list_state);

	let start = list_state.offset().min(total);
	let end = (start + rows_visible(area.height)).min(total);
	start..end
}

/// Number of two-line rows that fit in `height` cells, counting a partial one.
#[must_use]
pub fn rows_visible(height: u16) -> usize {
	usize::from(height.div_ceil(ROW_HEIGHT))
}

fn image_glyph<'a>(
	state: Option<&ImageState>,
	throbber_state: &ThrobberState,
	theme: &Theme,
) -> Span<'a> {
	match state {
		Some(ImageState::Loading) => {
			let spinner = Throbber::default()
				.style(theme.empty_style())
				.throbber_style(theme.empty_style());
			let symbol = spinner.to_symbol_span(throbber_state);
			Span::styled(format!("{} ", symbol.content), symbol.style)
		}
		Some(ImageState::Loaded(_)) => Span::styled(LOADED_GLYPH, theme.empty_style()),
		Some(ImageState::Failed) | None => Span::raw(BLANK_GLYPH),
	}
}

fn name_line<'a>(glyph: Span<'a>, name: &str, query: &str, theme: &Theme) -> Line<'a> {
	let base = theme.name_style();
	let mut spans = vec![glyph];
	match match_span(name, query) {
		Some((start, end)) => {
			spans.push(Span::styled(name[..start].to_string(), base));
			spans.push(Span::styled(
				name[start..end].to_string(),
				base.patch(theme.highlight_style()),
			));
			spans.push(Span::styled(name[end..].to_string(), base));
		}
		None => spans.push(Span::styled(name.to_string(), base)),
	}
	Line::from(spans)
}

/// Byte range of the first case-insensitive occurrence of `query` in `name`.
#[must_use]
pub fn match_span(name: &str, query: &str) -> Option<(usize, usize)> {
	let needle = Needle::new(query);
	if needle.is_empty() {
		return None;
	}
	let target = query.to_lowercase();
	for (start, _) in name.char_indices() {
		let mut lowered = String::new();
		for (offset, ch) in name[start..].char_indices() {
			lowered.extend(ch.to_lowercase());
			if lowered.len() >= target.len() {
				if lowered == target {
					return Some((start, start + offset + ch.len_utf8()));
				}
				break;
			}
		}
	}
	None
}
