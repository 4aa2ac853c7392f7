mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, parse_cli, print_listing, print_outcome};
use settings::ResolvedConfig;
use workflow::PickWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	match autopick::logging::initialize(resolved.log_level.as_deref()) {
		Ok(path) => log::debug!("logging to {}", path.display()),
		Err(err) => eprintln!("warning: logging disabled: {err:#}"),
	}

	if cli.print_config {
		resolved.print_summary();
	}

	run_pick(&cli, resolved)
}

/// Run the picker, or a one-shot search with `--list`, and print the result
/// in the chosen format.
fn run_pick(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let workflow = PickWorkflow::from_config(settings)?;

	if cli.list {
		let listing = workflow.list()?;
		return print_listing(cli.output, &listing);
	}

	let outcome = workflow.run()?;
	print_outcome(cli.output, &outcome)
}
