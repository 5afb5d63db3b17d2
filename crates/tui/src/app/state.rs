use palette_core::{AggregateOutcome, CollectionCache, CollectionFetcher, ResultItem};
use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;

use super::results::ResultsState;
use crate::config::PaletteOptions;
use crate::input::QueryInput;
use crate::keyboard::{KeyboardController, SubscriptionHub};
use crate::state::{Focus, InputState};
use crate::style::Theme;

/// Screen regions remembered from the last draw for mouse handling.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FrameLayout {
	pub palette: Option<Rect>,
	pub clear_button: Option<Rect>,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub input: InputState,
	pub search_input: QueryInput<'a>,
	pub theme: Theme,
	pub(crate) focus: Focus,
	pub(crate) collections: CollectionCache,
	pub(crate) fetcher: Option<CollectionFetcher>,
	pub(crate) outcome: AggregateOutcome,
	pub(crate) results: ResultsState,
	pub(crate) keyboard: KeyboardController,
	pub(crate) hub: SubscriptionHub,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) layout: FrameLayout,
}

impl<'a> App<'a> {
	pub fn new(options: PaletteOptions) -> Self {
		let PaletteOptions {
			placeholder,
			initial_query,
			start_visible,
			toggle_keys,
			theme,
		} = options;

		let mut search_input = QueryInput::new(initial_query.clone());
		search_input.set_placeholder(placeholder, theme.muted);

		let mut app = Self {
			input: InputState::new(initial_query, start_visible),
			search_input,
			theme,
			focus: Focus::Search,
			collections: CollectionCache::new(),
			fetcher: None,
			outcome: AggregateOutcome::from_groups("", Vec::new()),
			results: ResultsState::default(),
			keyboard: KeyboardController::new(toggle_keys),
			hub: SubscriptionHub::new(),
			throbber_state: ThrobberState::default(),
			layout: FrameLayout::default(),
		};
		app.apply_focus_request();
		app.refresh(true);
		app
	}

	/// Attach a fetcher whose results are pulled in on every tick.
	#[must_use]
	pub fn with_fetcher(mut self, fetcher: CollectionFetcher) -> Self {
		self.fetcher = Some(fetcher);
		self
	}

	/// Seed the cache directly, bypassing any fetcher.
	#[must_use]
	pub fn with_collections(mut self, collections: CollectionCache) -> Self {
		self.collections = collections;
		self.refresh(false);
		self
	}

	pub fn collections(&self) -> &CollectionCache {
		&self.collections
	}

	/// Groups derived for the current query.
	pub fn outcome(&self) -> &AggregateOutcome {
		&self.outcome
	}

	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Replace the query from outside the search field.
	pub fn set_query(&mut self, query: impl Into<String>) {
		let query = query.into();
		self.search_input.set_text(query.clone());
		self.input.set_query(query);
		self.refresh(true);
	}

	/// The clear action: empty the query and the field.
	pub fn clear_query(&mut self) {
		self.input.clear();
		self.search_input.set_text("");
		self.focus = Focus::Search;
		self.search_input.set_focused(true);
		self.refresh(true);
	}

	/// Pull finished fetches into the cache. Returns whether anything arrived.
	pub fn pump_collections(&mut self) -> bool {
		let Some(fetcher) = &self.fetcher else {
			return false;
		};
		if fetcher.pump(&mut self.collections) == 0 {
			return false;
		}
		self.refresh(false);
		true
	}

	/// Re-derive the groups from the query and the cache. Unless reset, the
	/// highlight follows the selected row by identity, so groups appearing
	/// above it do not move it onto another item.
	pub(crate) fn refresh(&mut self, reset_selection: bool) {
		let previous = if reset_selection {
			None
		} else {
			self.selected_identity()
		};
		self.outcome = AggregateOutcome::compute(self.input.query(), &self.collections);
		self.results.rebuild(&self.outcome.groups, reset_selection);
		if let Some((group, item)) = previous
			&& let Some(flat) = self.flat_index_of(group, &item)
		{
			self.results.select(flat);
		}
	}

	/// Group id and item id of the highlighted row.
	fn selected_identity(&self) -> Option<(&'static str, String)> {
		let (group, item) = self.results.position_of(self.results.selected()?)?;
		let group = self.outcome.groups.get(group)?;
		Some((group.id, group.items.get(item)?.id.clone()))
	}

	fn flat_index_of(&self, group_id: &str, item_id: &str) -> Option<usize> {
		let mut offset = 0;
		for group in &self.outcome.groups {
			if group.id == group_id {
				return group
					.items
					.iter()
					.position(|item| item.id == item_id)
					.map(|index| offset + index);
			}
			offset += group.items.len();
		}
		None
	}

	pub(crate) fn sync_query_from_input(&mut self) {
		let text = self.search_input.text().to_string();
		self.input.set_query(text);
		self.refresh(true);
	}

	pub(crate) fn apply_focus_request(&mut self) {
		if self.input.take_focus_request() {
			self.focus = Focus::Search;
		}
		self.search_input.set_focused(self.focus == Focus::Search);
	}

	/// Row at a flat item index across all groups.
	pub fn item(&self, flat: usize) -> Option<&ResultItem> {
		let (group, item) = self.results.position_of(flat)?;
		self.outcome.groups.get(group)?.items.get(item)
	}

	pub fn selected_item(&self) -> Option<&ResultItem> {
		self.results.selected().and_then(|flat| self.item(flat))
	}

	pub fn item_count(&self) -> usize {
		self.results.item_count()
	}
}
