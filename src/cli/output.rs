use anyhow::Result;
use roster::{CharacterRecord, SearchOutcome};
use serde_json::json;

use super::OutputFormat;

fn plain_line(record: &CharacterRecord) -> String {
	format!("{} ({})", record.name, record.actor)
}

/// Plain-text rendering of the session outcome.
pub(crate) fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", outcome.query);
	}
	match outcome.selected() {
		Some(record) => plain_line(record),
		None => "No selection".to_string(),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": outcome.selected(),
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_outcome(format: OutputFormat, outcome: &SearchOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", format_outcome_plain(outcome)),
		OutputFormat::Json => println!("{}", format_outcome_json(outcome)?),
	}
	Ok(())
}

/// Render batch-mode matches, one per line or as a JSON array.
pub(crate) fn format_matches(format: OutputFormat, records: &[CharacterRecord]) -> Result<String> {
	match format {
		OutputFormat::Plain => Ok(records
			.iter()
			.map(plain_line)
			.collect::<Vec<_>>()
			.join("\n")),
		OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
	}
}

pub(crate) fn print_matches(format: OutputFormat, records: &[CharacterRecord]) -> Result<()> {
	let rendered = format_matches(format, records)?;
	if !rendered.is_empty() {
		println!("{rendered}");
	}
	Ok(())
}
