use std::fmt;

/// Where a configuration value came from, for error messages.
#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) base_url: Option<SettingSource>,
	pub(crate) data_dir: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) toggle: Option<SettingSource>,
	pub(crate) log_filter: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_base_url(&self) -> SettingSource {
		Self::or_key(&self.base_url, "source.base_url")
	}

	pub(crate) fn source_for_data_dir(&self) -> SettingSource {
		Self::or_key(&self.data_dir, "source.data_dir")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		Self::or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_toggle(&self) -> SettingSource {
		Self::or_key(&self.toggle, "keys.toggle")
	}

	pub(crate) fn source_for_log_filter(&self) -> SettingSource {
		Self::or_key(&self.log_filter, "logging.filter")
	}

	fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
		source.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
