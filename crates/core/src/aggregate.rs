//! Turning a query and the loaded collections into ordered result groups.
//!
//! Everything here is a pure function of its inputs so the front-end can call
//! it on every keystroke and tests can call it without a terminal.

use crate::statics::{admin_path, title_case};
use crate::{
	Category, CollectionCache, FAVORITES, Favorite, Icon, ItemAction, NAVIGATION, ResultGroup,
	ResultItem,
};

pub const FAVORITES_GROUP: &str = "favorites";
pub const RESULTS_GROUP: &str = "dynamic";
pub const NAVIGATION_GROUP: &str = "nav";

/// Case-insensitive substring test. An empty needle matches everything.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Aggregate with the built-in favorites and navigation sections.
#[must_use]
pub fn aggregate(query: &str, collections: &CollectionCache) -> Vec<ResultGroup> {
	aggregate_with(query, collections, FAVORITES, NAVIGATION)
}

/// Build the groups in their fixed order: favorites, results, navigation.
/// Groups that would be empty are left out.
#[must_use]
pub fn aggregate_with(
	query: &str,
	collections: &CollectionCache,
	favorites: &[Favorite],
	navigation: &[&str],
) -> Vec<ResultGroup> {
	let mut groups = Vec::with_capacity(3);

	let favorites = favorite_items(query, favorites);
	if !favorites.is_empty() {
		groups.push(ResultGroup {
			id: FAVORITES_GROUP,
			name: "Favorites",
			items: favorites,
		});
	}

	if !query.is_empty() {
		let results = dynamic_items(query, collections);
		if !results.is_empty() {
			groups.push(ResultGroup {
				id: RESULTS_GROUP,
				name: "Results",
				items: results,
			});
		}
	}

	let navigation = navigation_items(query, navigation);
	if !navigation.is_empty() {
		groups.push(ResultGroup {
			id: NAVIGATION_GROUP,
			name: "Navigation",
			items: navigation,
		});
	}

	groups
}

fn favorite_items(query: &str, favorites: &[Favorite]) -> Vec<ResultItem> {
	favorites
		.iter()
		.filter(|favorite| contains_ignore_case(favorite.title, query))
		.map(|favorite| ResultItem {
			id: favorite.id.to_string(),
			title: favorite.title.to_string(),
			kind: "favorite".to_string(),
			icon: Some(Icon::Star),
			action: None,
		})
		.collect()
}

fn dynamic_items(query: &str, collections: &CollectionCache) -> Vec<ResultItem> {
	let lowered = query.to_lowercase();
	let needle = lowered.as_str();
	Category::ALL
		.into_iter()
		.filter_map(|category| collections.get(category).map(|items| (category, items)))
		.flat_map(move |(category, items)| {
			items
				.iter()
				.filter(move |item| item.searchable().to_lowercase().contains(needle))
				.map(move |item| ResultItem {
					id: item.id.clone(),
					title: item.display_title().to_string(),
					kind: category.key().to_string(),
					icon: None,
					action: Some(ItemAction::Open {
						category,
						id: item.id.clone(),
					}),
				})
		})
		.collect()
}

fn navigation_items(query: &str, navigation: &[&str]) -> Vec<ResultItem> {
	navigation
		.iter()
		.filter(|section| contains_ignore_case(section, query))
		.map(|section| ResultItem {
			id: section.to_string(),
			title: title_case(section),
			kind: "nav".to_string(),
			icon: None,
			action: Some(ItemAction::Navigate {
				path: admin_path(section),
			}),
		})
		.collect()
}

/// Groups for a query together with the empty-state decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateOutcome {
	pub query: String,
	pub groups: Vec<ResultGroup>,
}

impl AggregateOutcome {
	pub fn compute(query: &str, collections: &CollectionCache) -> Self {
		Self::from_groups(query, aggregate(query, collections))
	}

	pub fn from_groups(query: impl Into<String>, groups: Vec<ResultGroup>) -> Self {
		Self {
			query: query.into(),
			groups,
		}
	}

	/// The "can't find anything" message shows only for a non-empty query
	/// with nothing to list.
	#[must_use]
	pub fn show_empty_message(&self) -> bool {
		!self.query.is_empty() && self.groups.is_empty()
	}

	#[must_use]
	pub fn item_count(&self) -> usize {
		self.groups.iter().map(|group| group.items.len()).sum()
	}

	#[must_use]
	pub fn group(&self, id: &str) -> Option<&ResultGroup> {
		self.groups.iter().find(|group| group.id == id)
	}
}

#[cfg(test)]
mod tests;
