use std::fmt;
use std::path::PathBuf;

use palette_tui::PaletteOptions;

mod errors;
mod sources;
mod summary;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub(crate) const DEFAULT_LOG_FILE: &str = "palette.log";
pub(crate) const DEFAULT_LOG_FILTER: &str = "info";

/// Where collections are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSettings {
	/// `GET <base_url>/<category>.json`.
	Http { base_url: String },
	/// `<root>/<category>.json` on disk.
	Directory { root: PathBuf },
}

impl fmt::Display for SourceSettings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Http { base_url } => write!(f, "http {base_url}"),
			Self::Directory { root } => write!(f, "directory {}", root.display()),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
	pub file: PathBuf,
	/// `EnvFilter` directive used when `RUST_LOG` is unset.
	pub filter: String,
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Files that contributed, lowest precedence first.
	pub config_files: Vec<PathBuf>,
	pub source: SourceSettings,
	pub theme_name: String,
	pub palette: PaletteOptions,
	pub logging: LoggingSettings,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
