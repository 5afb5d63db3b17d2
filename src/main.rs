mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::PaletteWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in palette_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let _log_guard = logging::initialize(&resolved.logging)?;
	tracing::info!(source = %resolved.source, "palette starting");

	let outcome = PaletteWorkflow::from_config(resolved)?.run()?;

	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
