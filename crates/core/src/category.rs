use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Remote resource collections the palette can search.
///
/// The declaration order is the display order of dynamic results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
	Views,
	Macros,
	Triggers,
	TriggerCategories,
	Automations,
	Groups,
}

impl Category {
	/// Every category in enumeration order.
	pub const ALL: [Category; 6] = [
		Category::Views,
		Category::Macros,
		Category::Triggers,
		Category::TriggerCategories,
		Category::Automations,
		Category::Groups,
	];

	/// Key used for the endpoint name, the payload field and the result tag.
	#[must_use]
	pub const fn key(self) -> &'static str {
		match self {
			Category::Views => "views",
			Category::Macros => "macros",
			Category::Triggers => "triggers",
			Category::TriggerCategories => "trigger_categories",
			Category::Automations => "automations",
			Category::Groups => "groups",
		}
	}

	/// File name of the collection endpoint, e.g. `triggers.json`.
	#[must_use]
	pub fn endpoint(self) -> String {
		format!("{}.json", self.key())
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl FromStr for Category {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Category::ALL
			.into_iter()
			.find(|category| category.key() == value)
			.ok_or_else(|| format!("unknown category `{value}`"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn enumeration_order_is_fixed() {
		let keys: Vec<_> = Category::ALL.iter().map(|c| c.key()).collect();
		assert_eq!(
			keys,
			[
				"views",
				"macros",
				"triggers",
				"trigger_categories",
				"automations",
				"groups"
			]
		);
	}

	#[test]
	fn keys_parse_back() {
		for category in Category::ALL {
			assert_eq!(category.key().parse::<Category>(), Ok(category));
		}
		assert!("users".parse::<Category>().is_err());
	}

	#[test]
	fn endpoint_uses_json_suffix() {
		assert_eq!(Category::TriggerCategories.endpoint(), "trigger_categories.json");
	}
}
