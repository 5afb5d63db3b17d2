use std::fs;
use std::path::PathBuf;

use super::{CollectionSource, parse_collection};
use crate::{Category, CollectionItem, FetchError};

/// Reads `<dir>/<category>.json` from disk, for offline use and fixtures.
pub struct DirectorySource {
	root: PathBuf,
}

impl DirectorySource {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	#[must_use]
	pub fn path_for(&self, category: Category) -> PathBuf {
		self.root.join(category.endpoint())
	}
}

impl CollectionSource for DirectorySource {
	fn fetch(&self, category: Category) -> Result<Vec<CollectionItem>, FetchError> {
		let path = self.path_for(category);
		let text = fs::read_to_string(&path).map_err(|source| FetchError::Io {
			path: path.clone(),
			source,
		})?;
		parse_collection(category, &text)
	}

	fn describe(&self) -> String {
		self.root.display().to_string()
	}
}
