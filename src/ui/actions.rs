use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::types::SearchOutcome;

impl<'a> App<'a> {
	/// Apply a key press. Returns an outcome once the session should end.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.cancelled()),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.cancelled());
			}
			KeyCode::Enter => {
				return Some(SearchOutcome {
					accepted: true,
					selection: self.current_selection().cloned(),
					query: self.search_input.text().to_string(),
				});
			}
			KeyCode::Up => self.move_selection_by(-1),
			KeyCode::Down => self.move_selection_by(1),
			KeyCode::PageUp => self.move_selection_by(-self.page_len()),
			KeyCode::PageDown => self.move_selection_by(self.page_len()),
			KeyCode::Home if key.modifiers.contains(KeyModifiers::CONTROL) => self.select_edge(false),
			KeyCode::End if key.modifiers.contains(KeyModifiers::CONTROL) => self.select_edge(true),
			_ => {
				if self.search_input.input(key) {
					self.sync_query();
				}
			}
		}
		None
	}

	fn cancelled(&self) -> SearchOutcome {
		SearchOutcome::cancelled(self.search_input.text())
	}

	fn page_len(&self) -> isize {
		let rows = self.visible.len().max(1);
		isize::try_from(rows).unwrap_or(1)
	}

	fn move_selection_by(&mut self, delta: isize) {
		let len = self.store.filtered_len();
		if len == 0 {
			return;
		}
		let current = self.list_state.selected().unwrap_or(0);
		let target = current.saturating_add_signed(delta).min(len - 1);
		self.list_state.select(Some(target));
	}

	fn select_edge(&mut self, last: bool) {
		let len = self.store.filtered_len();
		if len == 0 {
			return;
		}
		self.list_state.select(Some(if last { len - 1 } else { 0 }));
	}
}
