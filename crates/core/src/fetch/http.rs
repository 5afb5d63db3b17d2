use ureq::Agent;

use super::{CollectionSource, parse_collection};
use crate::{Category, CollectionItem, FetchError};

/// Reads `<base_url>/<category>.json` over HTTP.
pub struct HttpSource {
	base_url: String,
	agent: Agent,
}

impl HttpSource {
	pub fn new(base_url: impl Into<String>) -> Self {
		let base_url = base_url.into().trim_end_matches('/').to_string();
		Self {
			base_url,
			agent: Agent::new_with_defaults(),
		}
	}

	#[must_use]
	pub fn url_for(&self, category: Category) -> String {
		format!("{}/{}", self.base_url, category.endpoint())
	}
}

impl CollectionSource for HttpSource {
	fn fetch(&self, category: Category) -> Result<Vec<CollectionItem>, FetchError> {
		let url = self.url_for(category);
		let mut response = self.agent.get(&url).call().map_err(|error| match error {
			ureq::Error::StatusCode(status) => FetchError::Status {
				url: url.clone(),
				status,
			},
			other => FetchError::Transport {
				url: url.clone(),
				source: Box::new(other),
			},
		})?;
		let body = response
			.body_mut()
			.read_to_string()
			.map_err(|source| FetchError::Transport {
				url: url.clone(),
				source: Box::new(source),
			})?;
		parse_collection(category, &body)
	}

	fn describe(&self) -> String {
		self.base_url.clone()
	}
}
