//! Pinned favorites and the static admin navigation list.

/// A pinned shortcut shown ahead of every other group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favorite {
	pub id: &'static str,
	pub title: &'static str,
}

pub const FAVORITES: &[Favorite] = &[
	Favorite {
		id: "triggers",
		title: "Triggers",
	},
	Favorite {
		id: "macros",
		title: "Macros",
	},
];

/// Admin sections reachable from the palette, in display order.
pub const NAVIGATION: &[&str] = &[
	"triggers",
	"macros",
	"users",
	"branding",
	"localization",
	"forms",
	"fields",
	"tags",
	"skills",
	"settings",
];

/// Admin path a navigation entry points to.
#[must_use]
pub fn admin_path(section: &str) -> String {
	format!("/admin/{section}")
}

/// Capitalize the first character, leaving the rest untouched.
#[must_use]
pub fn title_case(section: &str) -> String {
	let mut chars = section.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
