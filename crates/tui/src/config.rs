use crate::keyboard::KeyBinding;
use crate::style::Theme;

/// Placeholder shown in the empty search field.
pub const DEFAULT_PLACEHOLDER: &str = "Go To...";

/// Front-end settings handed over by the binary after configuration has been
/// resolved.
#[derive(Debug, Clone)]
pub struct PaletteOptions {
	pub placeholder: String,
	pub initial_query: String,
	/// Whether the palette is open when the session starts.
	pub start_visible: bool,
	pub toggle_keys: Vec<KeyBinding>,
	pub theme: Theme,
}

impl Default for PaletteOptions {
	fn default() -> Self {
		Self {
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			initial_query: String::new(),
			start_visible: true,
			toggle_keys: KeyBinding::defaults(),
			theme: Theme::default(),
		}
	}
}
