use std::sync::Arc;

use anyhow::Result;
use palette_core::{CollectionFetcher, CollectionSource, DirectorySource, HttpSource};
use palette_tui::{PaletteOptions, PaletteOutcome};

use crate::settings::{ResolvedConfig, SourceSettings};

/// Everything needed to run one palette session.
pub(crate) struct PaletteWorkflow {
	source: Arc<dyn CollectionSource>,
	options: PaletteOptions,
}

impl PaletteWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		Ok(Self {
			source: build_source(&config.source),
			options: config.palette,
		})
	}

	/// Start every fetch, then hand the terminal to the palette.
	pub(crate) fn run(self) -> Result<PaletteOutcome> {
		tracing::info!(source = %self.source.describe(), "requesting collections");
		let fetcher = CollectionFetcher::spawn(self.source);
		let outcome = palette_tui::run(self.options, fetcher)?;
		tracing::info!(
			accepted = outcome.accepted,
			query = %outcome.query,
			target = ?outcome.target(),
			"session finished"
		);
		Ok(outcome)
	}
}

fn build_source(settings: &SourceSettings) -> Arc<dyn CollectionSource> {
	match settings {
		SourceSettings::Http { base_url } => Arc::new(HttpSource::new(base_url.clone())),
		SourceSettings::Directory { root } => Arc::new(DirectorySource::new(root.clone())),
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	#[test]
	fn sources_follow_the_settings() {
		let http = build_source(&SourceSettings::Http {
			base_url: "http://localhost:3000".into(),
		});
		assert!(http.describe().contains("http://localhost:3000"));

		let dir = build_source(&SourceSettings::Directory {
			root: PathBuf::from("/srv/fixtures"),
		});
		assert!(dir.describe().contains("/srv/fixtures"));
	}
}
