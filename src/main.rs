mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use ignr::SessionOutcome;
use settings::sanitize_names;
use workflow::Workflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in ignr::ui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = Workflow::from_config(resolved)?;

	if cli.list {
		for name in workflow.list()? {
			println!("{name}");
		}
		return Ok(());
	}

	let names = sanitize_names(cli.select.clone());
	if !names.is_empty() {
		return run_headless(&cli, &workflow, &names);
	}

	let outcome = workflow.run_interactive()?;
	report(cli.output, &outcome)
}

/// Combine `names` without the UI, then write or print the result.
fn run_headless(cli: &CliArgs, workflow: &Workflow, names: &[String]) -> Result<()> {
	let combined = workflow.combine(names)?;
	if cli.stdout {
		print!("{}", combined.text);
		return Ok(());
	}
	let outcome = workflow.export(combined)?;
	report(cli.output, &outcome)
}

fn report(format: OutputFormat, outcome: &SessionOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => print_json(outcome)?,
	}
	Ok(())
}
