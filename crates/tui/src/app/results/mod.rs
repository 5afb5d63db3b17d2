//! Flattened row model for the grouped result list.
//!
//! Groups render as a header row followed by their items. Selection only ever
//! lands on item rows; it is tracked as a flat item index and mapped back to
//! list rows when drawing.

use palette_core::ResultGroup;
use ratatui::layout::Rect;
use ratatui::widgets::{ListState, ScrollbarState};

use crate::components::ScrollMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowKind {
	Header,
	Item { group: usize, item: usize },
}

#[derive(Debug, Default)]
pub(crate) struct ResultsState {
	pub list_state: ListState,
	pub scrollbar_state: ScrollbarState,
	/// Last area the list was drawn into.
	pub area: Option<Rect>,
	rows: Vec<RowKind>,
	/// List row of every item, indexed by flat item index.
	item_rows: Vec<usize>,
	selected: Option<usize>,
}

impl ResultsState {
	pub fn rebuild(&mut self, groups: &[ResultGroup], reset_selection: bool) {
		self.rows.clear();
		self.item_rows.clear();
		for (group_index, group) in groups.iter().enumerate() {
			self.rows.push(RowKind::Header);
			for item_index in 0..group.items.len() {
				self.item_rows.push(self.rows.len());
				self.rows.push(RowKind::Item {
					group: group_index,
					item: item_index,
				});
			}
		}

		if reset_selection {
			self.selected = None;
			*self.list_state.offset_mut() = 0;
		}
		self.ensure_selection();
	}

	/// Keep the selection on an existing item, defaulting to the first one.
	pub fn ensure_selection(&mut self) {
		let len = self.item_count();
		self.selected = match self.selected {
			_ if len == 0 => None,
			None => Some(0),
			Some(selected) => Some(selected.min(len - 1)),
		};
		self.sync_list_state();
	}

	pub fn item_count(&self) -> usize {
		self.item_rows.len()
	}

	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn select(&mut self, flat: usize) {
		if flat < self.item_count() {
			self.selected = Some(flat);
			self.sync_list_state();
		}
	}

	pub fn move_up(&mut self) {
		if let Some(selected) = self.selected
			&& selected > 0
		{
			self.select(selected - 1);
		}
	}

	pub fn move_down(&mut self) {
		if let Some(selected) = self.selected {
			self.select(selected + 1);
		}
	}

	/// Group and item index of a flat item index.
	pub fn position_of(&self, flat: usize) -> Option<(usize, usize)> {
		match self.rows.get(*self.item_rows.get(flat)?)? {
			RowKind::Item { group, item } => Some((*group, *item)),
			RowKind::Header => None,
		}
	}

	/// Flat item index under a screen row, if that row shows an item.
	pub fn item_at_screen_row(&self, row: u16) -> Option<usize> {
		let area = self.area?;
		if row < area.y || row >= area.y.saturating_add(area.height) {
			return None;
		}
		let list_row = self.list_state.offset() + usize::from(row - area.y);
		self.item_rows.iter().position(|&item_row| item_row == list_row)
	}

	/// Refresh scrollbar state for a viewport of `height` rows.
	pub fn update_scrollbar(&mut self, height: usize) -> ScrollMetrics {
		let metrics = ScrollMetrics::compute(self.rows.len(), height);
		self.scrollbar_state = if metrics.needs_scrollbar {
			ScrollbarState::new(metrics.content_length)
				.viewport_content_length(metrics.viewport_len)
				.position(metrics.scrollbar_position(self.list_state.offset()))
		} else {
			ScrollbarState::default()
		};
		metrics
	}

	fn sync_list_state(&mut self) {
		let row = self.selected.and_then(|flat| self.item_rows.get(flat).copied());
		self.list_state.select(row);
		// Keep the first group's header in view when returning to the top.
		if self.selected == Some(0) {
			*self.list_state.offset_mut() = 0;
		}
	}
}
