use anyhow::{Context, Result, anyhow};
use roster::net::fetch_blocking;
use roster::{CharacterClient, CharacterRecord, CharacterStore, SearchOutcome, Theme, UiConfig};

use crate::settings::ResolvedConfig;

/// Coordinates the fetch and either the interactive screen or a one-shot
/// batch listing.
pub(crate) struct RosterWorkflow {
	client: CharacterClient,
	ui: UiConfig,
	theme: Theme,
}

impl RosterWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let ResolvedConfig {
			endpoint,
			decode_mode,
			theme,
			ui,
			..
		} = config;
		Self {
			client: CharacterClient::new(endpoint, decode_mode),
			ui,
			theme,
		}
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		roster::run(self.client, self.ui, self.theme)
	}

	/// Fetch once, filter by the initial query and return the matches.
	pub(crate) fn run_batch(self) -> Result<Vec<CharacterRecord>> {
		let result = fetch_blocking(&self.client).context("failed to start fetch runtime")?;
		let records = result.map_err(|err| {
			anyhow!(
				"failed to fetch characters from {}: {err}",
				self.client.endpoint()
			)
		})?;

		let mut store = CharacterStore::new();
		store.replace_all(records);
		store.set_query(self.ui.initial_query.as_str());
		tracing::info!(
			matches = store.filtered_len(),
			total = store.full().len(),
			"batch filter complete"
		);
		Ok(store.filtered_records())
	}
}
