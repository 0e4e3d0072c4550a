//! Authoritative character list plus the filtered view the UI renders.
//!
//! [`CharacterStore`] lives on the UI thread. The network fetch runs elsewhere
//! and hands its result over through [`CharacterStore::apply_fetch`]; query
//! edits go through [`CharacterStore::set_query`]. Every change is announced to
//! subscribers as a [`StoreEvent`].

use std::sync::mpsc::{self, Receiver, Sender};

use crate::net::FetchError;
use crate::search::matching_indices;
use crate::types::CharacterRecord;

/// Change notifications published by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
	/// A fetch landed and replaced the full list.
	Loaded { total: usize },
	/// The query changed and the filtered view was recomputed.
	Filtered { query: String, matches: usize },
}

#[derive(Debug, Default)]
pub struct CharacterStore {
	full: Vec<CharacterRecord>,
	filtered: Vec<usize>,
	query: String,
	loaded: bool,
	subscribers: Vec<Sender<StoreEvent>>,
}

impl CharacterStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register for change notifications.
	pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
		let (tx, rx) = mpsc::channel();
		self.subscribers.push(tx);
		rx
	}

	/// Consume the result of the one-shot fetch.
	///
	/// Failures are logged and leave the current lists untouched. A success
	/// replaces the full list and re-derives the filtered view for whatever
	/// query is active, which is empty unless the user typed while the fetch
	/// was in flight.
	pub fn apply_fetch(&mut self, result: Result<Vec<CharacterRecord>, FetchError>) {
		match result {
			Ok(records) => self.replace_all(records),
			Err(err) => {
				tracing::error!(error = %err, "failed to load characters");
			}
		}
	}

	/// Replace the authoritative list.
	pub fn replace_all(&mut self, records: Vec<CharacterRecord>) {
		tracing::info!(count = records.len(), "character roster loaded");
		self.full = records;
		self.loaded = true;
		self.refilter();
		self.notify(StoreEvent::Loaded {
			total: self.full.len(),
		});
	}

	/// Update the query and recompute the filtered view.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
		self.refilter();
		tracing::debug!(query = %self.query, matches = self.filtered.len(), "query updated");
		self.notify(StoreEvent::Filtered {
			query: self.query.clone(),
			matches: self.filtered.len(),
		});
	}

	fn refilter(&mut self) {
		self.filtered = matching_indices(&self.full, &self.query);
	}

	fn notify(&mut self, event: StoreEvent) {
		self.subscribers
			.retain(|subscriber| subscriber.send(event.clone()).is_ok());
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Whether a fetch has landed successfully.
	#[must_use]
	pub fn is_loaded(&self) -> bool {
		self.loaded
	}

	#[must_use]
	pub fn full(&self) -> &[CharacterRecord] {
		&self.full
	}

	/// Records currently matching the query, in roster order.
	pub fn filtered(&self) -> impl Iterator<Item = &CharacterRecord> + '_ {
		self.filtered.iter().filter_map(|&index| self.full.get(index))
	}

	#[must_use]
	pub fn filtered_len(&self) -> usize {
		self.filtered.len()
	}

	/// The record at `position` within the filtered view.
	#[must_use]
	pub fn filtered_get(&self, position: usize) -> Option<&CharacterRecord> {
		let index = *self.filtered.get(position)?;
		self.full.get(index)
	}

	/// Owned copy of the filtered view.
	#[must_use]
	pub fn filtered_records(&self) -> Vec<CharacterRecord> {
		self.filtered().cloned().collect()
	}
}
