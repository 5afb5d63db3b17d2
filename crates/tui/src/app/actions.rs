use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::App;
use crate::components::point_in_rect;
use crate::keyboard::PaletteCommand;
use crate::outcome::PaletteOutcome;
use crate::state::Focus;

impl App<'_> {
	/// Process a key press. Returns an outcome once the session should end.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<PaletteOutcome> {
		if let Some(command) = self.keyboard.interpret(&key, self.input.is_visible()) {
			return self.apply_command(command);
		}
		if !self.input.is_visible() {
			return None;
		}

		match key.code {
			KeyCode::Enter => return self.activate_selected(),
			KeyCode::Up => {
				self.results.move_up();
				self.set_focus(Focus::Results);
			}
			KeyCode::Down => {
				self.results.move_down();
				self.set_focus(Focus::Results);
			}
			KeyCode::Tab | KeyCode::BackTab => {
				let next = match self.focus {
					Focus::Search => Focus::Results,
					Focus::Results => Focus::Search,
				};
				self.set_focus(next);
			}
			_ => {
				self.set_focus(Focus::Search);
				if self.search_input.input(key) {
					self.sync_query_from_input();
				}
			}
		}
		None
	}

	pub fn apply_command(&mut self, command: PaletteCommand) -> Option<PaletteOutcome> {
		match command {
			PaletteCommand::Toggle => {
				let visible = self.input.toggle_visible();
				tracing::debug!(visible, "palette toggled");
				self.apply_focus_request();
			}
			PaletteCommand::Dismiss => {
				if self.input.hide() {
					tracing::debug!("palette dismissed");
				}
			}
			PaletteCommand::Quit => {
				tracing::info!(query = self.input.query(), "palette closed without a selection");
				return Some(PaletteOutcome::cancelled(self.input.query()));
			}
		}
		None
	}

	/// Process a mouse event. A left click on a row activates it.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<PaletteOutcome> {
		if !self.input.is_visible() {
			return None;
		}

		match mouse.kind {
			MouseEventKind::ScrollUp => self.results.move_up(),
			MouseEventKind::ScrollDown => self.results.move_down(),
			MouseEventKind::Down(MouseButton::Left) => {
				return self.handle_click(mouse.column, mouse.row);
			}
			_ => {}
		}
		None
	}

	fn handle_click(&mut self, column: u16, row: u16) -> Option<PaletteOutcome> {
		if let Some(button) = self.layout.clear_button
			&& self.input.has_query()
			&& point_in_rect(column, row, button)
		{
			self.clear_query();
			return None;
		}

		let on_palette = self
			.layout
			.palette
			.is_some_and(|area| point_in_rect(column, row, area));
		if !on_palette {
			self.apply_command(PaletteCommand::Dismiss);
			return None;
		}

		let flat = self.results.item_at_screen_row(row)?;
		self.results.select(flat);
		self.activate(flat)
	}

	pub fn activate_selected(&mut self) -> Option<PaletteOutcome> {
		let flat = self.results.selected()?;
		self.activate(flat)
	}

	/// Run the row's action. Rows without one stay open.
	pub fn activate(&mut self, flat: usize) -> Option<PaletteOutcome> {
		let item = self.item(flat)?.clone();
		match &item.action {
			Some(action) => {
				tracing::info!(action = %action, kind = %item.kind, id = %item.id, "result activated");
				Some(PaletteOutcome::activated(self.input.query(), item))
			}
			None => {
				tracing::debug!(kind = %item.kind, id = %item.id, "result has no action");
				None
			}
		}
	}

	fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.search_input.set_focused(focus == Focus::Search);
	}
}
