//! File-backed tracing setup.
//!
//! The terminal belongs to the palette while it runs, so every event goes to a
//! log file through a non-blocking writer instead of stderr.

use std::fs::{self, OpenOptions};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::settings::LoggingSettings;

/// Install the global subscriber. Keep the returned guard alive until exit or
/// buffered lines are lost.
pub fn initialize(settings: &LoggingSettings) -> Result<WorkerGuard> {
	if let Some(dir) = settings.file.parent()
		&& !dir.as_os_str().is_empty()
	{
		fs::create_dir_all(dir)
			.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&settings.file)
		.with_context(|| format!("failed to open log file {}", settings.file.display()))?;

	let (writer, guard) = tracing_appender::non_blocking(file);
	let filter = env_filter(&settings.filter)?;

	let file_layer = fmt::layer()
		.with_writer(writer)
		.with_ansi(false)
		.with_target(true)
		.with_level(true)
		.with_thread_ids(false);

	tracing_subscriber::registry()
		.with(filter)
		.with(file_layer)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	tracing::debug!(log_file = %settings.file.display(), "logging initialized");
	Ok(guard)
}

/// `RUST_LOG` wins over the configured directive.
fn env_filter(configured: &str) -> Result<EnvFilter> {
	match EnvFilter::try_from_default_env() {
		Ok(filter) => Ok(filter),
		Err(_) => EnvFilter::try_new(configured)
			.with_context(|| format!("invalid log filter `{configured}`")),
	}
}
