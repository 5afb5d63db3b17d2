//! Key chords and the scoped input subscription.
//!
//! [`KeyboardController`] turns raw key events into palette commands based on
//! the current visibility. [`InputSubscription`] owns the background reader
//! that feeds it, and exists at most once per [`SubscriptionHub`].

mod subscription;

use std::fmt;
use std::str::FromStr;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

pub use subscription::{
	CrosstermEvents, EventSource, InputSubscription, SubscriptionError, SubscriptionHub,
};

/// Chords that toggle the palette unless configured otherwise.
pub const DEFAULT_TOGGLE_KEYS: &[&str] = &["ctrl+k", "super+k"];

const CHORD_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL
	.union(KeyModifiers::ALT)
	.union(KeyModifiers::SUPER)
	.union(KeyModifiers::META)
	.union(KeyModifiers::SHIFT);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyBindingError {
	#[error("key binding is empty")]
	Empty,
	#[error("unknown modifier `{0}`")]
	UnknownModifier(String),
	#[error("unknown key `{0}`")]
	UnknownKey(String),
	#[error("key binding `{0}` has no modifier")]
	MissingModifier(String),
}

/// A modifier plus key combination such as `ctrl+k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
	pub modifiers: KeyModifiers,
	pub code: KeyCode,
}

impl KeyBinding {
	pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
		Self { modifiers, code }
	}

	/// Whether `key` is this chord. Letters compare case-insensitively and
	/// shift only matters when the chord names it.
	#[must_use]
	pub fn matches(&self, key: &KeyEvent) -> bool {
		let mut pressed = key.modifiers & CHORD_MODIFIERS;
		let code_matches = match (self.code, key.code) {
			(KeyCode::Char(expected), KeyCode::Char(actual)) => {
				if !self.modifiers.contains(KeyModifiers::SHIFT) {
					pressed.remove(KeyModifiers::SHIFT);
				}
				expected.eq_ignore_ascii_case(&actual)
			}
			(expected, actual) => expected == actual,
		};
		code_matches && pressed == self.modifiers
	}

	/// Parse a list of chords, stopping at the first invalid one.
	pub fn parse_all<I, S>(chords: I) -> Result<Vec<Self>, KeyBindingError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		chords.into_iter().map(|chord| chord.as_ref().parse()).collect()
	}

	pub fn defaults() -> Vec<Self> {
		Self::parse_all(DEFAULT_TOGGLE_KEYS).unwrap_or_default()
	}
}

impl FromStr for KeyBinding {
	type Err = KeyBindingError;

	fn from_str(chord: &str) -> Result<Self, Self::Err> {
		let chord = chord.trim();
		if chord.is_empty() {
			return Err(KeyBindingError::Empty);
		}

		let mut parts: Vec<&str> = chord.split('+').map(str::trim).collect();
		let key = parts.pop().filter(|key| !key.is_empty()).ok_or(KeyBindingError::Empty)?;

		let mut modifiers = KeyModifiers::NONE;
		for part in parts {
			modifiers |= match part.to_ascii_lowercase().as_str() {
				"ctrl" | "control" => KeyModifiers::CONTROL,
				"alt" | "option" => KeyModifiers::ALT,
				"shift" => KeyModifiers::SHIFT,
				"super" | "cmd" | "command" | "meta" => KeyModifiers::SUPER,
				other => return Err(KeyBindingError::UnknownModifier(other.to_string())),
			};
		}
		if modifiers.is_empty() {
			return Err(KeyBindingError::MissingModifier(chord.to_string()));
		}

		let code = parse_key(key)?;
		Ok(Self { modifiers, code })
	}
}

fn parse_key(key: &str) -> Result<KeyCode, KeyBindingError> {
	let lowered = key.to_ascii_lowercase();
	let mut chars = lowered.chars();
	match (chars.next(), chars.next()) {
		(Some(ch), None) => Ok(KeyCode::Char(ch)),
		_ => match lowered.as_str() {
			"space" => Ok(KeyCode::Char(' ')),
			"enter" => Ok(KeyCode::Enter),
			"tab" => Ok(KeyCode::Tab),
			_ => lowered
				.strip_prefix('f')
				.and_then(|n| n.parse::<u8>().ok())
				.filter(|n| (1..=12).contains(n))
				.map(KeyCode::F)
				.ok_or_else(|| KeyBindingError::UnknownKey(key.to_string())),
		},
	}
}

impl fmt::Display for KeyBinding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (flag, label) in [
			(KeyModifiers::CONTROL, "Ctrl"),
			(KeyModifiers::ALT, "Alt"),
			(KeyModifiers::SUPER, "Super"),
			(KeyModifiers::SHIFT, "Shift"),
		] {
			if self.modifiers.contains(flag) {
				write!(f, "{label}+")?;
			}
		}
		match self.code {
			KeyCode::Char(' ') => f.write_str("Space"),
			KeyCode::Char(ch) => write!(f, "{}", ch.to_ascii_uppercase()),
			KeyCode::F(n) => write!(f, "F{n}"),
			KeyCode::Enter => f.write_str("Enter"),
			KeyCode::Tab => f.write_str("Tab"),
			other => write!(f, "{other:?}"),
		}
	}
}

/// What a key press means for the palette as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteCommand {
	Toggle,
	Dismiss,
	Quit,
}

#[derive(Debug, Clone)]
pub struct KeyboardController {
	toggle: Vec<KeyBinding>,
}

impl KeyboardController {
	pub fn new(toggle: Vec<KeyBinding>) -> Self {
		Self { toggle }
	}

	#[must_use]
	pub fn toggle_bindings(&self) -> &[KeyBinding] {
		&self.toggle
	}

	/// Map a key press to a command, or `None` when the key belongs to the
	/// search field or the result list.
	#[must_use]
	pub fn interpret(&self, key: &KeyEvent, visible: bool) -> Option<PaletteCommand> {
		if self.toggle.iter().any(|binding| binding.matches(key)) {
			return Some(PaletteCommand::Toggle);
		}
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				Some(PaletteCommand::Quit)
			}
			KeyCode::Esc if visible => Some(PaletteCommand::Dismiss),
			KeyCode::Char('q') if !visible && key.modifiers.is_empty() => Some(PaletteCommand::Quit),
			_ => None,
		}
	}
}

impl Default for KeyboardController {
	fn default() -> Self {
		Self::new(KeyBinding::defaults())
	}
}

#[cfg(test)]
mod tests;
