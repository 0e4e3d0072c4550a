use std::ops::Range;
use std::sync::mpsc::{Receiver, TryRecvError};

use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use super::config::UiConfig;
use super::input::SearchInput;
use super::style::Theme;
use crate::images::{ImageRuntime, ImageTracker};
use crate::net::FetchResult;
use crate::store::{CharacterStore, StoreEvent};
use crate::types::CharacterRecord;

/// State of the roster screen.
pub struct App<'a> {
	pub store: CharacterStore,
	pub search_input: SearchInput<'a>,
	pub list_state: ListState,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) images: ImageTracker,
	pub(crate) visible: Range<usize>,
	store_events: Receiver<StoreEvent>,
	fetch_updates: Option<Receiver<FetchResult>>,
	image_runtime: Option<ImageRuntime>,
}

impl<'a> App<'a> {
	pub fn new(ui: UiConfig) -> Self {
		let mut store = CharacterStore::new();
		let store_events = store.subscribe();
		let mut search_input = SearchInput::new(ui.initial_query.clone(), ui.placeholder.clone());
		let theme = Theme::default();
		search_input.set_placeholder_style(theme.empty_style());
		if !ui.initial_query.is_empty() {
			store.set_query(ui.initial_query.clone());
		}

		Self {
			store,
			search_input,
			list_state: ListState::default(),
			ui,
			theme,
			throbber_state: ThrobberState::default(),
			images: ImageTracker::new(),
			visible: 0..0,
			store_events,
			fetch_updates: None,
			image_runtime: None,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input.set_placeholder_style(theme.empty_style());
	}

	/// Attach the channel the fetch thread reports on.
	pub fn set_fetch_updates(&mut self, updates: Receiver<FetchResult>) {
		self.fetch_updates = Some(updates);
	}

	pub fn set_image_runtime(&mut self, runtime: ImageRuntime) {
		self.image_runtime = Some(runtime);
	}

	/// Whether the fetch has been launched and not yet reported back.
	#[must_use]
	pub fn fetch_in_flight(&self) -> bool {
		self.fetch_updates.is_some()
	}

	/// Move a finished fetch result into the store.
	pub fn pump_fetch_updates(&mut self) {
		let Some(updates) = &self.fetch_updates else {
			return;
		};
		match updates.try_recv() {
			Ok(result) => {
				self.store.apply_fetch(result);
				self.fetch_updates = None;
			}
			Err(TryRecvError::Empty) => {}
			Err(TryRecvError::Disconnected) => {
				tracing::warn!("fetch thread exited without reporting a result");
				self.fetch_updates = None;
			}
		}
	}

	/// React to store notifications.
	pub fn pump_store_events(&mut self) {
		let mut changed = false;
		for event in self.store_events.try_iter() {
			tracing::trace!(?event, "store changed");
			changed = true;
		}
		if changed {
			self.ensure_selection();
		}
	}

	pub fn pump_image_results(&mut self) {
		let Some(runtime) = &self.image_runtime else {
			return;
		};
		while let Ok(result) = runtime.try_recv() {
			self.images.apply(result);
		}
	}

	/// Start loading portraits for rows that were on screen in the last frame.
	pub fn request_visible_images(&mut self) {
		for position in self.visible.clone() {
			let Some(record) = self.store.filtered_get(position) else {
				continue;
			};
			if let Some(request) = self.images.begin(record)
				&& let Some(runtime) = &self.image_runtime
			{
				runtime.request(request);
			}
		}
	}

	/// Push the search field's text into the store.
	pub(crate) fn sync_query(&mut self) {
		let query = self.search_input.text().to_string();
		self.store.set_query(query);
		self.list_state.select(Some(0));
		*self.list_state.offset_mut() = 0;
		self.ensure_selection();
	}

	pub(crate) fn ensure_selection(&mut self) {
		let len = self.store.filtered_len();
		match self.list_state.selected() {
			_ if len == 0 => self.list_state.select(None),
			None => self.list_state.select(Some(0)),
			Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	#[must_use]
	pub fn current_selection(&self) -> Option<&CharacterRecord> {
		let selected = self.list_state.selected()?;
		self.store.filtered_get(selected)
	}

	/// Status label for the search row and whether loading has finished.
	pub(crate) fn progress_status(&self) -> (String, bool) {
		if self.fetch_in_flight() {
			return (self.ui.loading_label.clone(), false);
		}
		let status = format!(
			"{} of {}",
			self.store.filtered_len(),
			self.store.full().len()
		);
		(status, true)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;

	use super::*;
	use crate::net::FetchError;

	fn harry_and_ron() -> Vec<CharacterRecord> {
		vec![
			CharacterRecord::new("1", "", "Harry Potter", "Daniel Radcliffe"),
			CharacterRecord::new("2", "https://example.test/ron.jpg", "Ron Weasley", "Rupert Grint"),
		]
	}

	#[test]
	fn fetch_result_populates_store_and_selection() {
		let mut app = App::new(UiConfig::default());
		let (tx, rx) = mpsc::channel();
		app.set_fetch_updates(rx);
		assert!(app.fetch_in_flight());
		assert_eq!(app.progress_status(), ("Loading characters".to_string(), false));

		tx.send(Ok(harry_and_ron())).unwrap();
		app.pump_fetch_updates();
		app.pump_store_events();

		assert!(!app.fetch_in_flight());
		assert_eq!(app.store.filtered_len(), 2);
		assert_eq!(app.current_selection().map(|r| r.id.as_str()), Some("1"));
		assert_eq!(app.progress_status(), ("2 of 2".to_string(), true));
	}

	#[test]
	fn failed_fetch_stops_the_spinner_quietly() {
		let mut app = App::new(UiConfig::default());
		let (tx, rx) = mpsc::channel();
		app.set_fetch_updates(rx);
		let err = serde_json::from_slice::<Vec<CharacterRecord>>(b"oops").unwrap_err();
		tx.send(Err(FetchError::Decode(err))).unwrap();

		app.pump_fetch_updates();
		app.pump_store_events();

		assert!(!app.fetch_in_flight());
		assert_eq!(app.store.filtered_len(), 0);
		assert!(app.current_selection().is_none());
		assert_eq!(app.progress_status(), ("0 of 0".to_string(), true));
	}

	#[test]
	fn vanished_fetch_thread_is_not_fatal() {
		let mut app = App::new(UiConfig::default());
		let (tx, rx) = mpsc::channel::<FetchResult>();
		app.set_fetch_updates(rx);
		drop(tx);
		app.pump_fetch_updates();
		assert!(!app.fetch_in_flight());
	}

	#[test]
	fn initial_query_filters_once_data_arrives() {
		let mut app = App::new(UiConfig::default().with_initial_query("weasley"));
		assert_eq!(app.search_input.text(), "weasley");
		app.store.apply_fetch(Ok(harry_and_ron()));
		app.pump_store_events();
		assert_eq!(app.current_selection().map(|r| r.id.as_str()), Some("2"));
	}

	#[test]
	fn visible_rows_start_image_tracking() {
		let mut app = App::new(UiConfig::default());
		app.store.replace_all(harry_and_ron());
		app.visible = 0..2;
		app.request_visible_images();

		assert!(matches!(
			app.images.state("1"),
			Some(crate::images::ImageState::Failed)
		));
		assert!(matches!(
			app.images.state("2"),
			Some(crate::images::ImageState::Loading)
		));
	}
}
