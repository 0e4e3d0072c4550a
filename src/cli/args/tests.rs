use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_start_the_interactive_screen() {
	let parsed = CliArgs::parse_from(["roster"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(!parsed.batch);
	assert!(!parsed.lenient);
	assert!(parsed.endpoint.is_none());
	assert!(parsed.initial_query.is_none());
}

#[test]
fn batch_flags_parse() {
	let parsed = CliArgs::parse_from([
		"roster",
		"--batch",
		"-q",
		"weasley",
		"-o",
		"json",
		"--endpoint",
		"http://localhost:8080/api/characters",
		"--lenient",
	]);
	assert!(parsed.batch);
	assert!(parsed.lenient);
	assert_eq!(parsed.initial_query.as_deref(), Some("weasley"));
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(
		parsed.endpoint.as_deref(),
		Some("http://localhost:8080/api/characters")
	);
}

#[test]
fn config_flag_accumulates() {
	let parsed = CliArgs::parse_from(["roster", "-c", "a.toml", "--config", "b.toml"]);
	assert_eq!(parsed.config.len(), 2);
}
