//! Log setup for the binary.
//!
//! The terminal belongs to the UI, so events go to a file. The filter comes
//! from `ROSTER_LOG` when set, otherwise from configuration.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::app_dirs;

pub const FILTER_ENV: &str = "ROSTER_LOG";
pub const DEFAULT_FILTER: &str = "roster=info";
const LOG_FILE_NAME: &str = "roster.log";

/// Default log location inside the cache directory.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(app_dirs::get_cache_dir()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber writing to `path`.
pub fn initialize(path: &Path, filter: Option<&str>) -> Result<()> {
	let file = open_log_file(path)?;
	let filter = build_filter(filter);

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_ansi(false)
				.with_target(true)
				.with_writer(Mutex::new(file)),
		)
		.try_init()
		.context("a global log subscriber is already installed")?;

	tracing::debug!(path = %path.display(), "logging initialised");
	Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

fn build_filter(configured: Option<&str>) -> EnvFilter {
	EnvFilter::try_from_env(FILTER_ENV)
		.or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_FILTER)))
		.unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
