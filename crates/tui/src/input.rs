//! Single-line search field built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
	placeholder_style: Style,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			placeholder: String::new(),
			placeholder_style: Style::default(),
		};
		input.set_text(initial);
		input
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map(String::as_str).unwrap_or("")
	}

	/// Replace the contents and park the cursor at the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let line: String = text.into().replace(['\n', '\r'], " ");
		let mut textarea = TextArea::new(vec![line]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
		self.apply_placeholder();
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>, style: Style) {
		self.placeholder = placeholder.into();
		self.placeholder_style = style;
		self.apply_placeholder();
	}

	/// Show or hide the cursor.
	pub fn set_focused(&mut self, focused: bool) {
		let style = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	/// Forward a key to the text area. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(key.code, KeyCode::Enter | KeyCode::Tab) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		if self.textarea.lines().len() > 1 {
			let joined = self.textarea.lines().join(" ");
			self.set_text(joined);
		}
		self.text() != before
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}

	fn apply_placeholder(&mut self) {
		if !self.placeholder.is_empty() {
			self.textarea
				.set_placeholder_text(self.placeholder.clone());
			self.textarea.set_placeholder_style(self.placeholder_style);
		}
	}
}
