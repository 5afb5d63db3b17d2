use ratatui::style::Style;

/// Styles for every part of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Dimmed full-screen layer behind the palette.
	pub backdrop: Style,
	/// Body of the palette box.
	pub surface: Style,
	/// Border around the palette box.
	pub border: Style,
	/// Group headings.
	pub header: Style,
	/// Selected row.
	pub row_highlight: Style,
	/// Prompt glyph and clear button.
	pub prompt: Style,
	/// Kind labels, placeholder text and status line.
	pub muted: Style,
	/// The "nothing found" message.
	pub empty: Style,
	/// Favorite icons.
	pub icon: Style,
}

impl Theme {
	/// Row highlight used while focus sits in the search field.
	#[must_use]
	pub fn passive_highlight(&self) -> Style {
		match self.row_highlight.bg {
			Some(bg) => Style::new().bg(bg),
			None => self.row_highlight,
		}
	}
}
