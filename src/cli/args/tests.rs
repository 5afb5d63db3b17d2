use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_parse_without_arguments() {
	let parsed = CliArgs::try_parse_from(["palette"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.toggle_key.is_empty());
	assert!(!parsed.hidden);
	assert!(parsed.base_url.is_none());
}

#[test]
fn toggle_keys_accumulate() {
	let parsed = CliArgs::try_parse_from([
		"palette",
		"--toggle-key",
		"ctrl+p",
		"--toggle-key",
		"alt+space",
		"--output",
		"json",
	])
	.expect("parses");
	assert_eq!(parsed.toggle_key, ["ctrl+p", "alt+space"]);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn base_url_and_data_dir_conflict() {
	let result = CliArgs::try_parse_from([
		"palette",
		"--base-url",
		"http://localhost:3000",
		"--data-dir",
		"/tmp",
	]);
	assert!(result.is_err());
}
