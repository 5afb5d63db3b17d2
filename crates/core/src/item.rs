//! Fetched collection entries and the rows derived from them.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::Category;

/// Title shown for entries that carry neither a `name` nor a `title`.
pub const PLACEHOLDER_TITLE: &str = "No Title?";

/// A single entry from a fetched collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionItem {
	pub id: String,
	pub name: Option<String>,
	pub title: Option<String>,
}

impl CollectionItem {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: Some(name.into()),
			title: None,
		}
	}

	/// Build an item from a JSON object, ignoring fields the palette never
	/// reads. Non-object values yield `None`.
	pub fn from_json(value: &Value) -> Option<Self> {
		let object = value.as_object()?;
		let id = match object.get("id") {
			Some(Value::String(id)) => id.clone(),
			Some(Value::Number(id)) => id.to_string(),
			_ => String::new(),
		};
		let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_owned);
		Some(Self {
			id,
			name: text("name"),
			title: text("title"),
		})
	}

	/// Text matched against the query: `name`, then `title`, then nothing.
	/// Empty strings fall through to the next candidate.
	#[must_use]
	pub fn searchable(&self) -> &str {
		self.label().unwrap_or("")
	}

	/// Title rendered in the palette.
	#[must_use]
	pub fn display_title(&self) -> &str {
		self.label().unwrap_or(PLACEHOLDER_TITLE)
	}

	fn label(&self) -> Option<&str> {
		[self.name.as_deref(), self.title.as_deref()]
			.into_iter()
			.flatten()
			.find(|text| !text.is_empty())
	}
}

/// Glyph drawn in front of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
	Star,
}

impl Icon {
	#[must_use]
	pub const fn glyph(self) -> &'static str {
		match self {
			Icon::Star => "★",
		}
	}
}

/// What happens when a row is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemAction {
	/// Jump to a static admin section.
	Navigate { path: String },
	/// Open a fetched resource.
	Open { category: Category, id: String },
}

impl fmt::Display for ItemAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ItemAction::Navigate { path } => f.write_str(path),
			ItemAction::Open { category, id } => write!(f, "{category} {id}"),
		}
	}
}

/// A selectable row in the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
	pub id: String,
	pub title: String,
	/// Category key for fetched resources, `favorite` or `nav` otherwise.
	pub kind: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub icon: Option<Icon>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<ItemAction>,
}

/// A titled cluster of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultGroup {
	pub id: &'static str,
	pub name: &'static str,
	pub items: Vec<ResultItem>,
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn name_wins_over_title() {
		let item = CollectionItem::from_json(&json!({"id": "1", "name": "Alpha", "title": "Beta"}))
			.unwrap();
		assert_eq!(item.searchable(), "Alpha");
		assert_eq!(item.display_title(), "Alpha");
	}

	#[test]
	fn empty_name_falls_back_to_title() {
		let item =
			CollectionItem::from_json(&json!({"id": "1", "name": "", "title": "Beta"})).unwrap();
		assert_eq!(item.searchable(), "Beta");
	}

	#[test]
	fn missing_labels_use_placeholder() {
		let item = CollectionItem::from_json(&json!({"id": 7})).unwrap();
		assert_eq!(item.id, "7");
		assert_eq!(item.searchable(), "");
		assert_eq!(item.display_title(), PLACEHOLDER_TITLE);
	}

	#[test]
	fn non_objects_are_skipped() {
		assert!(CollectionItem::from_json(&json!("views")).is_none());
	}

	#[test]
	fn actions_render_their_target() {
		let nav = ItemAction::Navigate {
			path: "/admin/users".into(),
		};
		let open = ItemAction::Open {
			category: Category::Triggers,
			id: "42".into(),
		};
		assert_eq!(nav.to_string(), "/admin/users");
		assert_eq!(open.to_string(), "triggers 42");
	}
}
