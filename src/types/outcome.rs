use serde::Serialize;

use super::CharacterRecord;

/// Captures the outcome of a browsing session.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
	pub accepted: bool,
	pub selection: Option<CharacterRecord>,
	pub query: String,
}

impl SearchOutcome {
	/// Outcome for a session the user dismissed.
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			selection: None,
			query: query.into(),
		}
	}

	/// Return the confirmed character, if the user accepted one.
	#[must_use]
	pub fn selected(&self) -> Option<&CharacterRecord> {
		if self.accepted {
			self.selection.as_ref()
		} else {
			None
		}
	}
}
