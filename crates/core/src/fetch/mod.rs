//! Loading collections off the UI thread.
//!
//! [`CollectionFetcher`] starts one worker per category and hands results back
//! over a channel. Each category is requested at most once per fetcher, and
//! workers are never cancelled: a worker whose receiver is gone finishes its
//! request and drops the result.

mod directory;
mod http;

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use serde_json::Value;

pub use directory::DirectorySource;
pub use http::HttpSource;

use crate::{Category, CollectionCache, CollectionItem, FetchError};

/// Somewhere collections can be read from.
pub trait CollectionSource: Send + Sync {
	fn fetch(&self, category: Category) -> Result<Vec<CollectionItem>, FetchError>;

	/// Human readable location, used in logs and the configuration summary.
	fn describe(&self) -> String;
}

/// Result of a single category fetch.
#[derive(Debug)]
pub struct FetchUpdate {
	pub category: Category,
	pub result: Result<Vec<CollectionItem>, FetchError>,
}

/// Parse a collection payload of the form `{ "<category>": [ ... ] }`.
pub fn parse_collection(category: Category, text: &str) -> Result<Vec<CollectionItem>, FetchError> {
	let payload: Value =
		serde_json::from_str(text).map_err(|source| FetchError::Json { category, source })?;
	let entries = payload
		.get(category.key())
		.and_then(Value::as_array)
		.ok_or(FetchError::Shape { category })?;
	Ok(entries.iter().filter_map(CollectionItem::from_json).collect())
}

pub struct CollectionFetcher {
	source: Arc<dyn CollectionSource>,
	requested: HashSet<Category>,
	tx: Sender<FetchUpdate>,
	rx: Receiver<FetchUpdate>,
}

impl CollectionFetcher {
	pub fn new(source: Arc<dyn CollectionSource>) -> Self {
		let (tx, rx) = mpsc::channel();
		Self {
			source,
			requested: HashSet::new(),
			tx,
			rx,
		}
	}

	/// Construct a fetcher and request every category in parallel.
	pub fn spawn(source: Arc<dyn CollectionSource>) -> Self {
		let mut fetcher = Self::new(source);
		fetcher.request_all();
		fetcher
	}

	pub fn request_all(&mut self) {
		for category in Category::ALL {
			self.request(category);
		}
	}

	/// Start a worker for `category` unless one was already started. Returns
	/// whether a new request was issued.
	pub fn request(&mut self, category: Category) -> bool {
		if !self.requested.insert(category) {
			return false;
		}

		let source = Arc::clone(&self.source);
		let tx = self.tx.clone();
		tracing::debug!(%category, source = %source.describe(), "fetching collection");
		thread::spawn(move || {
			let result = source.fetch(category);
			let _ = tx.send(FetchUpdate { category, result });
		});
		true
	}

	#[must_use]
	pub fn was_requested(&self, category: Category) -> bool {
		self.requested.contains(&category)
	}

	/// Move every finished fetch into `cache` without blocking. Returns the
	/// number of updates received.
	pub fn pump(&self, cache: &mut CollectionCache) -> usize {
		let mut received = 0;
		loop {
			match self.rx.try_recv() {
				Ok(update) => {
					cache.record(update);
					received += 1;
				}
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
		received
	}

	/// Block until the next fetch finishes. Used by tests and one-shot callers.
	pub fn recv(&self) -> Option<FetchUpdate> {
		self.rx.recv().ok()
	}

	#[must_use]
	pub fn source(&self) -> &Arc<dyn CollectionSource> {
		&self.source
	}
}
