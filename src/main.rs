mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, parse_cli, print_matches, print_outcome};
use roster::logging;
use settings::ResolvedConfig;
use workflow::RosterWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in roster::ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	init_logging(&resolved);
	run_roster(&cli, resolved)
}

/// Logging failures never stop the program; the UI still works without a log.
fn init_logging(settings: &ResolvedConfig) {
	let path = match settings.log_file.clone() {
		Some(path) => path,
		None => match logging::default_log_path() {
			Ok(path) => path,
			Err(err) => {
				eprintln!("warning: logging disabled: {err:#}");
				return;
			}
		},
	};
	if let Err(err) = logging::initialize(&path, settings.log_filter.as_deref()) {
		eprintln!("warning: logging disabled: {err:#}");
	}
}

/// Run either the batch listing or the interactive screen and print the
/// result in the chosen format.
fn run_roster(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let workflow = RosterWorkflow::from_config(settings);

	if cli.batch {
		let matches = workflow.run_batch()?;
		return print_matches(cli.output, &matches);
	}

	let outcome = workflow.run()?;
	print_outcome(cli.output, &outcome)
}
