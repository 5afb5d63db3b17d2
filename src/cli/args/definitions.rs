use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `palette` binary.
#[derive(Parser, Debug)]
#[command(
	name = "palette",
	version,
	long_version = long_version(),
	about = "Keyboard-driven command palette for admin resources",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PALETTE_CONFIG",
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
		short = 'u',
		long = "base-url",
		value_name = "URL",
		conflicts_with = "data_dir",
		help = "Fetch collections from <URL>/<category>.json (default: http://localhost:3000)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		short = 'd',
		long = "data-dir",
		value_name = "DIR",
		help = "Read collections from <DIR>/<category>.json instead of HTTP"
	)]
	pub(crate) data_dir: Option<PathBuf>,
	#[arg(
		short = 'q',
		long,
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
		long = "toggle-key",
		value_name = "CHORD",
		action = ArgAction::Append,
		help = "Chord that shows and hides the palette, repeatable (default: ctrl+k, super+k)"
	)]
	pub(crate) toggle_key: Vec<String>,
	#[arg(
		long = "hidden",
		help = "Start with the palette hidden (default: visible)"
	)]
	pub(crate) hidden: bool,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to FILE (default: palette.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "print-config",
		help = "Print the effective configuration before starting"
	)]
	pub(crate) print_config: bool,
	#[arg(long = "list-themes", help = "List the available themes and exit")]
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
