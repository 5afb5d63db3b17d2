use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use palette_tui::style::{self, DEFAULT_THEME};
use palette_tui::{KeyBinding, PaletteOptions};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::expand_home;
use crate::app_dirs;
use crate::settings::resolved::{
	ConfigError, ConfigSources, DEFAULT_BASE_URL, DEFAULT_LOG_FILE, DEFAULT_LOG_FILTER,
	LoggingSettings, SourceSettings,
};

/// Where collections come from, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourceSection {
	pub(super) base_url: Option<String>,
	pub(super) data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) start_visible: Option<bool>,
	pub(super) placeholder: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct KeysSection {
	pub(super) toggle: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) file: Option<PathBuf>,
	pub(super) filter: Option<String>,
}

impl SourceSection {
	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<SourceSettings, ConfigError> {
		match (self.base_url, self.data_dir) {
			(Some(url), Some(dir)) => Err(ConfigError::rejected(
				"source",
				format!("base_url = {url}, data_dir = {}", dir.display()),
				sources.source_for_data_dir(),
				"set either source.base_url or source.data_dir, not both",
			)),
			(Some(url), None) => {
				let trimmed = url.trim();
				if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
					return Err(ConfigError::rejected(
						"source.base_url",
						url.clone(),
						sources.source_for_base_url(),
						"must start with http:// or https://",
					));
				}
				Ok(SourceSettings::Http {
					base_url: trimmed.trim_end_matches('/').to_string(),
				})
			}
			(None, Some(dir)) => {
				if dir.as_os_str().is_empty() {
					return Err(ConfigError::rejected(
						"source.data_dir",
						String::new(),
						sources.source_for_data_dir(),
						"must not be empty",
					));
				}
				Ok(SourceSettings::Directory {
					root: expand_home(dir),
				})
			}
			(None, None) => Ok(SourceSettings::Http {
				base_url: DEFAULT_BASE_URL.to_string(),
			}),
		}
	}
}

impl UiSection {
	pub(super) fn resolve(
		self,
		keys: KeysSection,
		sources: &ConfigSources,
	) -> Result<(String, PaletteOptions), ConfigError> {
		let defaults = PaletteOptions::default();

		let requested = self
			.theme
			.map(|name| name.trim().to_ascii_lowercase())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		// Aliases such as `dark` are reported under the theme they select.
		let (canonical, theme) = style::lookup(&requested).ok_or_else(|| {
			ConfigError::rejected(
				"ui.theme",
				requested.clone(),
				sources.source_for_theme(),
				format!("unknown theme; available: {}", style::names().join(", ")),
			)
		})?;
		let theme_name = canonical.to_string();

		let toggle_keys = match keys.toggle {
			None => defaults.toggle_keys,
			Some(chords) => parse_chords(&chords, sources)?,
		};

		let placeholder = self
			.placeholder
			.filter(|text| !text.trim().is_empty())
			.unwrap_or(defaults.placeholder);

		Ok((
			theme_name,
			PaletteOptions {
				placeholder,
				initial_query: self.initial_query.unwrap_or_default(),
				start_visible: self.start_visible.unwrap_or(defaults.start_visible),
				toggle_keys,
				theme,
			},
		))
	}
}

fn parse_chords(chords: &[String], sources: &ConfigSources) -> Result<Vec<KeyBinding>, ConfigError> {
	let chords: Vec<&str> = chords
		.iter()
		.map(|chord| chord.trim())
		.filter(|chord| !chord.is_empty())
		.collect();
	if chords.is_empty() {
		return Err(ConfigError::rejected(
			"keys.toggle",
			"[]",
			sources.source_for_toggle(),
			"at least one chord is required",
		));
	}
	chords
		.into_iter()
		.map(|chord| {
			KeyBinding::from_str(chord).map_err(|err| {
				ConfigError::rejected("keys.toggle", chord, sources.source_for_toggle(), err.to_string())
			})
		})
		.collect()
}

impl LoggingSection {
	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<LoggingSettings> {
		let filter = self
			.filter
			.map(|filter| filter.trim().to_string())
			.filter(|filter| !filter.is_empty())
			.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
		if let Err(err) = EnvFilter::try_new(&filter) {
			return Err(ConfigError::rejected(
				"logging.filter",
				filter,
				sources.source_for_log_filter(),
				err.to_string(),
			)
			.into());
		}

		let file = match self.file {
			Some(file) => expand_home(file),
			None => app_dirs::get_data_dir()?.join(DEFAULT_LOG_FILE),
		};

		Ok(LoggingSettings { file, filter })
	}
}
