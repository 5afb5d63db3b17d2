pub(crate) mod layout;

use palette_core::Category;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, BorderType, Clear, List};

use super::App;
use crate::components::{
	PromptContext, StatusContext, render_backdrop, render_empty_message, render_hint,
	render_prompt, render_scrollbar, render_separator, render_status, rows::group_list_items,
};
use crate::state::Focus;

impl App<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let screen = frame.area();
		render_backdrop(frame, screen, &self.theme);

		if !self.input.is_visible() {
			self.layout.palette = None;
			self.layout.clear_button = None;
			self.results.area = None;
			render_hint(frame, screen, self.keyboard.toggle_bindings(), &self.theme);
			return;
		}

		let palette = layout::palette_area(screen);
		self.layout.palette = Some(palette);
		frame.render_widget(Clear, palette);

		let block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(self.theme.border)
			.style(self.theme.surface);
		let inner = block.inner(palette);
		frame.render_widget(block, palette);

		let [prompt_area, separator_area, list_area, status_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(inner);

		self.layout.clear_button = render_prompt(
			frame,
			PromptContext {
				search_input: &self.search_input,
				has_query: self.input.has_query(),
				area: prompt_area,
				theme: &self.theme,
			},
		);
		render_separator(frame, separator_area, &self.theme);
		self.render_results(frame, list_area);
		render_status(
			frame,
			StatusContext {
				loading: self.fetcher.is_some() && !self.collections.is_settled(),
				loaded: self.collections.loaded_count(),
				total: Category::ALL.len(),
				throbber_state: &self.throbber_state,
				area: status_area,
				theme: &self.theme,
			},
		);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		if self.outcome.show_empty_message() {
			self.results.area = None;
			render_empty_message(frame, area, &self.theme);
			return;
		}

		let metrics = self.results.update_scrollbar(usize::from(area.height));
		let list_area = if metrics.needs_scrollbar {
			render_scrollbar(frame, area, &mut self.results.scrollbar_state, &self.theme)
		} else {
			area
		};

		let highlight = match self.focus {
			Focus::Results => self.theme.row_highlight,
			Focus::Search => self.theme.passive_highlight(),
		};
		let items = group_list_items(&self.outcome.groups, list_area.width, &self.theme);
		let list = List::new(items).highlight_style(highlight);
		self.results.area = Some(list_area);
		frame.render_stateful_widget(list, list_area, &mut self.results.list_state);
	}
}
