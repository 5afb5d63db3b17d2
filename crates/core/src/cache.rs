//! In-memory store of fetched collections.
//!
//! The cache holds the first successful payload of every category for the
//! lifetime of the process. Entries are never replaced or invalidated, and a
//! failed fetch leaves the category empty.

use std::collections::HashMap;
use std::sync::Arc;

use crate::fetch::FetchUpdate;
use crate::{Category, CollectionItem};

/// Load state of a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStatus {
	Pending,
	Loaded,
	Failed,
}

#[derive(Debug, Clone, Default)]
pub struct CollectionCache {
	entries: HashMap<Category, Arc<[CollectionItem]>>,
	failed: HashMap<Category, String>,
}

impl CollectionCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store `items` unless the category already has a payload. Returns whether
	/// the payload was stored.
	pub fn insert(&mut self, category: Category, items: Vec<CollectionItem>) -> bool {
		if self.entries.contains_key(&category) {
			return false;
		}
		self.failed.remove(&category);
		self.entries.insert(category, items.into());
		true
	}

	/// Fold a fetch result into the cache.
	pub fn record(&mut self, update: FetchUpdate) -> bool {
		let FetchUpdate { category, result } = update;
		match result {
			Ok(items) => {
				let count = items.len();
				let stored = self.insert(category, items);
				if stored {
					tracing::info!(%category, count, "collection loaded");
				} else {
					tracing::debug!(%category, "ignoring repeated collection payload");
				}
				stored
			}
			Err(error) => {
				tracing::warn!(%category, %error, "collection fetch failed");
				if !self.entries.contains_key(&category) {
					self.failed.insert(category, error.to_string());
				}
				false
			}
		}
	}

	/// Items of a loaded category, in collection order.
	#[must_use]
	pub fn get(&self, category: Category) -> Option<&[CollectionItem]> {
		self.entries.get(&category).map(AsRef::as_ref)
	}

	#[must_use]
	pub fn status(&self, category: Category) -> CategoryStatus {
		if self.entries.contains_key(&category) {
			CategoryStatus::Loaded
		} else if self.failed.contains_key(&category) {
			CategoryStatus::Failed
		} else {
			CategoryStatus::Pending
		}
	}

	/// Reason recorded for a failed category.
	#[must_use]
	pub fn failure(&self, category: Category) -> Option<&str> {
		self.failed.get(&category).map(String::as_str)
	}

	#[must_use]
	pub fn loaded_count(&self) -> usize {
		self.entries.len()
	}

	/// Whether every category has either loaded or failed.
	#[must_use]
	pub fn is_settled(&self) -> bool {
		Category::ALL
			.iter()
			.all(|category| self.status(*category) != CategoryStatus::Pending)
	}
}
