use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use tokio::runtime::{Builder, Runtime};

use super::{CharacterClient, FetchError};
use crate::types::CharacterRecord;

/// Result delivered by the fetch thread.
pub type FetchResult = Result<Vec<CharacterRecord>, FetchError>;

pub(crate) fn current_thread_runtime() -> io::Result<Runtime> {
	Builder::new_current_thread().enable_all().build()
}

/// Run the fetch on a background thread.
///
/// The returned receiver yields exactly one [`FetchResult`]. If the receiver
/// is dropped first the result is discarded.
pub fn spawn_fetch(client: CharacterClient) -> io::Result<Receiver<FetchResult>> {
	let runtime = current_thread_runtime()?;
	let (tx, rx) = mpsc::channel();

	thread::Builder::new()
		.name("roster-fetch".into())
		.spawn(move || {
			let result = runtime.block_on(client.fetch());
			if tx.send(result).is_err() {
				tracing::debug!("fetch result dropped; receiver already gone");
			}
		})?;

	Ok(rx)
}

/// Run the fetch on the calling thread.
pub fn fetch_blocking(client: &CharacterClient) -> io::Result<FetchResult> {
	let runtime = current_thread_runtime()?;
	Ok(runtime.block_on(client.fetch()))
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;
	use crate::types::DecodeMode;

	#[test]
	fn worker_delivers_failures_over_the_channel() {
		let client = CharacterClient::new("::invalid::", DecodeMode::Strict);
		let rx = spawn_fetch(client).unwrap();
		let result = rx.recv_timeout(Duration::from_secs(5)).unwrap();
		assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
	}

	#[test]
	fn blocking_fetch_reports_invalid_url() {
		let client = CharacterClient::new("", DecodeMode::Lenient);
		let result = fetch_blocking(&client).unwrap();
		assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
	}
}
