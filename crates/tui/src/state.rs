//! Query text and visibility, the only mutable UI state the palette owns.

/// Which part of the palette receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Search,
	Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
	query: String,
	visible: bool,
	focus_requested: bool,
}

impl InputState {
	pub fn new(query: impl Into<String>, visible: bool) -> Self {
		Self {
			query: query.into(),
			visible,
			focus_requested: visible,
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn has_query(&self) -> bool {
		!self.query.is_empty()
	}

	/// Replace the query. Any string is accepted, including the empty one.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	pub fn clear(&mut self) {
		self.query.clear();
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Flip visibility and return the new value. Becoming visible requests
	/// focus on the search field.
	pub fn toggle_visible(&mut self) -> bool {
		self.visible = !self.visible;
		if self.visible {
			self.focus_requested = true;
		}
		self.visible
	}

	/// Hide the palette. Returns whether anything changed.
	pub fn hide(&mut self) -> bool {
		std::mem::replace(&mut self.visible, false)
	}

	/// Consume a pending focus request.
	pub fn take_focus_request(&mut self) -> bool {
		std::mem::take(&mut self.focus_requested)
	}
}

impl Default for InputState {
	fn default() -> Self {
		Self::new(String::new(), true)
	}
}
