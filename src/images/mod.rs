//! Asynchronous portrait loading.
//!
//! Each record's image goes through `Loading -> Loaded` or `Loading -> Failed`
//! exactly once. [`ImageTracker`] keeps that state per record id on the UI
//! thread, while [`ImageRuntime`] downloads, decodes and pre-encodes images on
//! a background thread.

pub mod backend;
mod preview;
mod worker;

use std::collections::HashMap;

pub use preview::{ImageBox, ImagePreview};
pub(crate) use preview::center_rect;
pub use worker::{ImageRequest, ImageResult, ImageRuntime};

use crate::types::CharacterRecord;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
	#[error("image request failed: {0}")]
	Request(#[from] reqwest::Error),
	#[error("image server answered {0}")]
	Status(reqwest::StatusCode),
	#[error("could not decode image: {0}")]
	Decode(#[from] image::ImageError),
	#[error("could not encode image for the terminal: {0}")]
	Encode(String),
	#[error("terminal graphics were not initialised")]
	NoGraphics,
}

/// Load state of a single record's portrait.
#[derive(Debug, Clone)]
pub enum ImageState {
	Loading,
	Loaded(ImagePreview),
	Failed,
}

impl ImageState {
	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}
}

/// Per-record image states keyed by record id.
#[derive(Debug, Default)]
pub struct ImageTracker {
	states: HashMap<String, ImageState>,
}

impl ImageTracker {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn state(&self, id: &str) -> Option<&ImageState> {
		self.states.get(id)
	}

	/// Start tracking `record`'s image.
	///
	/// Returns a request for the worker the first time a record with a usable
	/// URL is seen. Records without a URL fail on the spot; records already
	/// tracked are left alone, so a failed image is never retried.
	pub fn begin(&mut self, record: &CharacterRecord) -> Option<ImageRequest> {
		if self.states.contains_key(&record.id) {
			return None;
		}
		if !record.has_image() || reqwest::Url::parse(record.image.trim()).is_err() {
			self.states.insert(record.id.clone(), ImageState::Failed);
			return None;
		}
		self.states.insert(record.id.clone(), ImageState::Loading);
		Some(ImageRequest {
			id: record.id.clone(),
			url: record.image.trim().to_string(),
		})
	}

	/// Settle a pending load. Results for ids that are not loading are ignored.
	pub fn apply(&mut self, result: ImageResult) {
		let Some(state) = self.states.get_mut(&result.id) else {
			return;
		};
		if !state.is_loading() {
			return;
		}
		*state = match result.preview {
			Some(preview) => ImageState::Loaded(preview),
			None => ImageState::Failed,
		};
	}

	/// Number of images still waiting on the worker.
	#[must_use]
	pub fn pending(&self) -> usize {
		self.states.values().filter(|state| state.is_loading()).count()
	}
}
