/// Ways the roster fetch can fail. Callers treat all of them the same way.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
	#[error("invalid endpoint URL `{url}`: {reason}")]
	InvalidUrl { url: String, reason: String },
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("could not decode character list: {0}")]
	Decode(#[from] serde_json::Error),
}
