use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::Category;

/// Reasons a collection could not be loaded.
///
/// None of these reach the user; a failed category simply contributes no
/// results.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("request to {url} failed: {source}")]
	Transport {
		url: String,
		#[source]
		source: Box<ureq::Error>,
	},
	#[error("{url} answered with HTTP {status}")]
	Status { url: String, status: u16 },
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("invalid JSON in the {category} collection: {source}")]
	Json {
		category: Category,
		#[source]
		source: serde_json::Error,
	},
	#[error("the {category} payload has no `{category}` array")]
	Shape { category: Category },
}
