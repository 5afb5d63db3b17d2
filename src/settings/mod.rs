//! Configuration loading and resolution.
//!
//! [`load`] merges config files, environment variables and CLI flags into a
//! [`ResolvedConfig`] that is validated before the palette starts.

mod raw;
mod resolved;
mod sources;

use anyhow::{Result, anyhow};

pub use resolved::{LoggingSettings, ResolvedConfig, SourceSettings};

use crate::cli::CliArgs;
use raw::RawConfig;
use sources::{LoadedSources, build_config};

/// Load and validate the effective configuration.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let LoadedSources { config, files } = build_config(cli)?;
	let mut raw: RawConfig = config
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	let mut resolved = raw.resolve(cli)?;
	resolved.config_files = files;
	Ok(resolved)
}
