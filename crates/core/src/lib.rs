//! Data layer for the palette: resource categories, fetched collections, the
//! keyed collection cache and the pure result aggregator.
//!
//! Nothing in this crate knows about terminals. The front-end feeds a query and
//! a [`CollectionCache`] into [`aggregate`] and renders whatever groups come
//! back.

pub mod aggregate;
pub mod cache;
pub mod category;
pub mod error;
pub mod fetch;
pub mod item;
pub mod statics;

pub use aggregate::{AggregateOutcome, aggregate, aggregate_with};
pub use cache::{CategoryStatus, CollectionCache};
pub use category::Category;
pub use error::FetchError;
pub use fetch::{
	CollectionFetcher, CollectionSource, DirectorySource, FetchUpdate, HttpSource,
	parse_collection,
};
pub use item::{CollectionItem, Icon, ItemAction, ResultGroup, ResultItem};
pub use statics::{FAVORITES, Favorite, NAVIGATION};
