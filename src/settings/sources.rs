use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, Environment, File};

use crate::app_dirs;
use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "PALETTE";

/// Merged configuration plus the files that actually contributed to it.
pub(super) struct LoadedSources {
	pub(super) config: Config,
	pub(super) files: Vec<PathBuf>,
}

/// Layer the default files, `--config` files and `PALETTE__*` variables, later
/// sources winning. Default files that do not exist are skipped.
pub(super) fn build_config(cli: &CliArgs) -> Result<LoadedSources> {
	let mut builder = Config::builder();
	let mut files = Vec::new();

	if !cli.no_config {
		for path in default_config_files().into_iter().filter(|path| path.is_file()) {
			builder = builder.add_source(File::from(path.clone()));
			files.push(path);
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
		files.push(path.clone());
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("keys.toggle"),
	);

	let config = builder
		.build()
		.map_err(|err| anyhow!("failed to read configuration: {err}"))?;
	Ok(LoadedSources { config, files })
}

/// Candidate locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".palette.toml"));
		files.push(current_dir.join("palette.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_end_with_the_working_directory_pair() {
		let files = default_config_files();
		let names: Vec<_> = files
			.iter()
			.rev()
			.take(2)
			.filter_map(|path| path.file_name()?.to_str())
			.collect();
		assert_eq!(names, ["palette.toml", ".palette.toml"]);
	}

	#[test]
	fn explicit_files_are_reported() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("extra.toml");
		std::fs::write(&path, "[ui]\ntheme = \"light\"\n").expect("write");

		let path_arg = path.to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["palette", "--no-config", "--config", &path_arg]);
		let loaded = build_config(&cli).expect("builds");
		assert_eq!(loaded.files, [path]);
		assert_eq!(
			loaded.config.get_string("ui.theme").expect("theme"),
			"light"
		);
	}
}
