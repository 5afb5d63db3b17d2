use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod sections;

use sections::{KeysSection, LoggingSection, SourceSection, UiSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	source: SourceSection,
	ui: UiSection,
	keys: KeysSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		// A flag for one source replaces whichever source the files chose.
		if let Some(url) = cli.base_url.clone() {
			self.source.base_url = Some(url);
			self.source.data_dir = None;
		}
		if let Some(dir) = cli.data_dir.clone() {
			self.source.data_dir = Some(dir);
			self.source.base_url = None;
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if cli.hidden {
			self.ui.start_visible = Some(false);
		}
		if !cli.toggle_key.is_empty() {
			self.keys.toggle = Some(cli.toggle_key.clone());
		}
		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}
	}

	/// Validate the merged values and fill in defaults.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			base_url: detect_source(
				cli.base_url.is_some(),
				self.source.base_url.is_some(),
				"PALETTE__SOURCE__BASE_URL",
				"--base-url",
				"source.base_url",
			),
			data_dir: detect_source(
				cli.data_dir.is_some(),
				self.source.data_dir.is_some(),
				"PALETTE__SOURCE__DATA_DIR",
				"--data-dir",
				"source.data_dir",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"PALETTE__UI__THEME",
				"--theme",
				"ui.theme",
			),
			toggle: detect_source(
				!cli.toggle_key.is_empty(),
				self.keys.toggle.is_some(),
				"PALETTE__KEYS__TOGGLE",
				"--toggle-key",
				"keys.toggle",
			),
			log_filter: detect_source(
				false,
				self.logging.filter.is_some(),
				"PALETTE__LOGGING__FILTER",
				"",
				"logging.filter",
			),
		};

		let source = self.source.resolve(&sources).map_err(Error::new)?;
		let (theme_name, palette) = self.ui.resolve(self.keys, &sources).map_err(Error::new)?;
		let logging = self.logging.resolve(&sources)?;

		Ok(ResolvedConfig {
			config_files: Vec::new(),
			source,
			theme_name,
			palette,
			logging,
		})
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

/// Paths in config files may start with `~`.
fn expand_home(path: PathBuf) -> PathBuf {
	let Ok(rest) = path.strip_prefix("~") else {
		return path;
	};
	match env::var_os("HOME") {
		Some(home) => PathBuf::from(home).join(rest),
		None => path,
	}
}

#[cfg(test)]
mod tests;
