use thiserror::Error;

use super::SettingSource;

/// A configuration value that failed validation, with the place it was set.
#[derive(Debug, Error)]
#[error("invalid {key} from {origin}: {reason} (got `{value}`)")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn rejected(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}
