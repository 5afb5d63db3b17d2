use super::*;
use crate::CollectionItem;

fn cache_with(entries: &[(Category, &[&str])]) -> CollectionCache {
	let mut cache = CollectionCache::new();
	for (category, names) in entries {
		let items = names
			.iter()
			.enumerate()
			.map(|(idx, name)| CollectionItem::new(format!("{}-{idx}", category.key()), *name))
			.collect();
		cache.insert(*category, items);
	}
	cache
}

fn group_ids(groups: &[ResultGroup]) -> Vec<&str> {
	groups.iter().map(|group| group.id).collect()
}

fn titles(group: &ResultGroup) -> Vec<&str> {
	group.items.iter().map(|item| item.title.as_str()).collect()
}

#[test]
fn empty_query_shows_favorites_and_navigation_only() {
	let cache = cache_with(&[(Category::Triggers, &["Trigger One"])]);
	let outcome = AggregateOutcome::compute("", &cache);

	assert_eq!(group_ids(&outcome.groups), [FAVORITES_GROUP, NAVIGATION_GROUP]);
	assert_eq!(titles(&outcome.groups[0]), ["Triggers", "Macros"]);
	assert_eq!(outcome.groups[1].items.len(), NAVIGATION.len());
	assert!(!outcome.show_empty_message());
}

#[test]
fn unmatched_query_yields_no_groups_and_the_empty_message() {
	let cache = cache_with(&[(Category::Views, &["Open tickets"])]);
	let outcome = AggregateOutcome::compute("zzzz", &cache);

	assert!(outcome.groups.is_empty());
	assert!(outcome.show_empty_message());
	assert_eq!(outcome.item_count(), 0);
}

#[test]
fn trig_matches_every_group() {
	let cache = cache_with(&[(Category::Triggers, &["Trigger One", "Notify requester"])]);
	let outcome = AggregateOutcome::compute("trig", &cache);

	let favorites = outcome.group(FAVORITES_GROUP).unwrap();
	assert_eq!(titles(favorites), ["Triggers"]);

	let results = outcome.group(RESULTS_GROUP).unwrap();
	assert_eq!(titles(results), ["Trigger One"]);
	assert_eq!(results.items[0].kind, "triggers");
	assert_eq!(
		results.items[0].action,
		Some(ItemAction::Open {
			category: Category::Triggers,
			id: "triggers-0".into(),
		})
	);

	let navigation = outcome.group(NAVIGATION_GROUP).unwrap();
	assert_eq!(navigation.items[0].id, "triggers");
	assert_eq!(navigation.items[0].title, "Triggers");
	assert_eq!(
		navigation.items[0].action,
		Some(ItemAction::Navigate {
			path: "/admin/triggers".into()
		})
	);
}

#[test]
fn matching_ignores_case() {
	let cache = cache_with(&[
		(Category::Triggers, &["Trigger One"]),
		(Category::TriggerCategories, &["TRIGGERED by email"]),
	]);
	assert_eq!(aggregate("TRIG", &cache), aggregate("trig", &cache));
	assert_eq!(aggregate("tRiG", &cache), aggregate("trig", &cache));
}

#[test]
fn results_follow_category_order_not_load_order() {
	let mut cache = CollectionCache::new();
	cache.insert(Category::Groups, vec![CollectionItem::new("g", "Escalation group")]);
	cache.insert(Category::Automations, vec![CollectionItem::new("a", "Escalate old")]);
	cache.insert(Category::Views, vec![CollectionItem::new("v", "Escalated")]);
	cache.insert(Category::Macros, vec![CollectionItem::new("m", "Escalate to tier 2")]);

	let groups = aggregate("escalat", &cache);
	let results = groups.iter().find(|g| g.id == RESULTS_GROUP).unwrap();
	let kinds: Vec<_> = results.items.iter().map(|item| item.kind.as_str()).collect();
	assert_eq!(kinds, ["views", "macros", "automations", "groups"]);
}

#[test]
fn collection_order_is_kept_within_a_category() {
	let cache = cache_with(&[(Category::Macros, &["Reply b", "Reply a", "Close", "Reply c"])]);
	let groups = aggregate("reply", &cache);
	let results = groups.iter().find(|g| g.id == RESULTS_GROUP).unwrap();
	assert_eq!(titles(results), ["Reply b", "Reply a", "Reply c"]);
}

#[test]
fn pending_categories_contribute_nothing() {
	let cache = CollectionCache::new();
	let groups = aggregate("users", &cache);
	assert_eq!(group_ids(&groups), [NAVIGATION_GROUP]);
}

#[test]
fn untitled_items_use_the_placeholder_but_never_match() {
	let mut cache = CollectionCache::new();
	cache.insert(
		Category::Views,
		vec![CollectionItem {
			id: "v1".into(),
			name: None,
			title: None,
		}],
	);
	let groups = aggregate("no title", &cache);
	assert!(groups.iter().all(|group| group.id != RESULTS_GROUP));
}

#[test]
fn title_field_is_searched_when_name_is_missing() {
	let mut cache = CollectionCache::new();
	cache.insert(
		Category::Groups,
		vec![CollectionItem {
			id: "g1".into(),
			name: None,
			title: Some("Billing".into()),
		}],
	);
	let groups = aggregate("bill", &cache);
	let results = groups.iter().find(|g| g.id == RESULTS_GROUP).unwrap();
	assert_eq!(titles(results), ["Billing"]);
}

#[test]
fn favorites_filter_independently_of_navigation() {
	let cache = CollectionCache::new();
	let groups = aggregate("sett", &cache);
	assert_eq!(group_ids(&groups), [NAVIGATION_GROUP]);
	assert_eq!(titles(&groups[0]), ["Settings"]);
}

#[test]
fn custom_static_lists_are_respected() {
	let cache = CollectionCache::new();
	let groups = aggregate_with("", &cache, &[], &["reports"]);
	assert_eq!(group_ids(&groups), [NAVIGATION_GROUP]);
	assert_eq!(titles(&groups[0]), ["Reports"]);
}
