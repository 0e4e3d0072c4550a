use reqwest::Url;

use super::FetchError;
use crate::types::{CharacterRecord, DecodeMode, decode_characters};

/// Public endpoint serving the roster.
pub const DEFAULT_ENDPOINT: &str = "https://hp-api.onrender.com/api/characters";

/// HTTP client bound to one roster endpoint.
#[derive(Debug, Clone)]
pub struct CharacterClient {
	client: reqwest::Client,
	endpoint: String,
	mode: DecodeMode,
}

impl Default for CharacterClient {
	fn default() -> Self {
		Self::new(DEFAULT_ENDPOINT, DecodeMode::default())
	}
}

impl CharacterClient {
	#[must_use]
	pub fn new(endpoint: impl Into<String>, mode: DecodeMode) -> Self {
		Self::with_client(reqwest::Client::new(), endpoint, mode)
	}

	/// Reuse an existing [`reqwest::Client`], sharing its connection pool.
	#[must_use]
	pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>, mode: DecodeMode) -> Self {
		Self {
			client,
			endpoint: endpoint.into(),
			mode,
		}
	}

	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	#[must_use]
	pub fn decode_mode(&self) -> DecodeMode {
		self.mode
	}

	/// Issue the GET and decode the body.
	///
	/// The response status is not inspected: an error page fails the decode
	/// like any other malformed body.
	pub async fn fetch(&self) -> Result<Vec<CharacterRecord>, FetchError> {
		let url = self.url()?;
		tracing::debug!(%url, "requesting character roster");

		let response = self.client.get(url).send().await?;
		let status = response.status();
		if !status.is_success() {
			tracing::warn!(%status, "roster endpoint answered with a non-success status");
		}
		let body = response.bytes().await?;
		let records = decode_characters(&body, self.mode)?;
		Ok(records)
	}

	fn url(&self) -> Result<Url, FetchError> {
		Url::parse(&self.endpoint).map_err(|err| FetchError::InvalidUrl {
			url: self.endpoint.clone(),
			reason: err.to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_client_targets_public_endpoint() {
		let client = CharacterClient::default();
		assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
		assert_eq!(client.decode_mode(), DecodeMode::Strict);
	}

	#[tokio::test]
	async fn malformed_endpoint_is_reported_without_a_request() {
		let client = CharacterClient::new("not a url", DecodeMode::Strict);
		let err = client.fetch().await.unwrap_err();
		assert!(
			matches!(&err, FetchError::InvalidUrl { url, .. } if url == "not a url"),
			"unexpected error: {err}"
		);
	}

	#[tokio::test]
	async fn unreachable_host_is_a_transport_error() {
		// Port 9 (discard) on localhost is closed on any sane test machine.
		let client = CharacterClient::new("http://127.0.0.1:9/api/characters", DecodeMode::Strict);
		let err = client.fetch().await.unwrap_err();
		assert!(matches!(err, FetchError::Transport(_)), "unexpected error: {err}");
	}
}
