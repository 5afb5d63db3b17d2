mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE};
pub use types::Theme;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "slate";

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtins::BUILT_IN.iter().map(|entry| entry.name).collect()
}

/// Look a theme up by name or alias, ignoring case and surrounding spaces.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	lookup(name).map(|(_, theme)| theme)
}

/// Like [`by_name`], also returning the canonical name an alias resolves to.
#[must_use]
pub fn lookup(name: &str) -> Option<(&'static str, Theme)> {
	let wanted = name.trim().to_ascii_lowercase();
	builtins::BUILT_IN
		.iter()
		.find(|entry| entry.name == wanted || entry.aliases.contains(&wanted.as_str()))
		.map(|entry| (entry.name, entry.theme))
}

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
