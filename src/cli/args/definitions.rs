use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `roster` binary.
#[derive(Parser, Debug)]
#[command(
	name = "roster",
	version,
	long_version = long_version(),
	about = "Browse the Harry Potter character roster and filter it by name",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ROSTER_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Fetch the roster from this URL (default: the public hp-api endpoint)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long,
		help = "Ignore unknown fields in the payload instead of rejecting it (default: disabled)"
	)]
	pub(crate) lenient: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the page title (default: Harry Potter)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Set the search field placeholder (default: Search...)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "PATH",
		help = "Write logs to this file (default: roster.log in the cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "log-filter",
		value_name = "FILTER",
		help = "Log filter directive, overridden by ROSTER_LOG (default: roster=info)"
	)]
	pub(crate) log_filter: Option<String>,
	#[arg(
		short = 'b',
		long,
		help = "Fetch, print the characters matching the initial query and exit (default: disabled)"
	)]
	pub(crate) batch: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
