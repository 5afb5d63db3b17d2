use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

pub const PROMPT_SYMBOL: &str = "› ";
pub const CLEAR_BUTTON: &str = "[x]";

pub struct PromptContext<'a, 'b> {
	pub search_input: &'a QueryInput<'b>,
	pub has_query: bool,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Draw the prompt row. Returns the clear button's area when one is shown.
pub fn render_prompt(frame: &mut Frame, ctx: PromptContext<'_, '_>) -> Option<Rect> {
	let PromptContext {
		search_input,
		has_query,
		area,
		theme,
	} = ctx;
	if area.width == 0 || area.height == 0 {
		return None;
	}

	let prompt_width = PROMPT_SYMBOL.width() as u16;
	let button_width = if has_query {
		CLEAR_BUTTON.width() as u16 + 1
	} else {
		0
	};
	let [prompt_area, input_area, button_area] = Layout::horizontal([
		Constraint::Length(prompt_width),
		Constraint::Min(1),
		Constraint::Length(button_width),
	])
	.areas(area);

	frame.render_widget(Span::styled(PROMPT_SYMBOL, theme.prompt), prompt_area);
	search_input.render(frame, input_area);

	if !has_query || button_area.width == 0 {
		return None;
	}
	let button = Rect {
		x: button_area.x + 1,
		width: button_area.width.saturating_sub(1),
		..button_area
	};
	frame.render_widget(Paragraph::new(CLEAR_BUTTON).style(theme.prompt), button);
	Some(button)
}

/// Horizontal rule between the prompt and the results.
pub fn render_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.width == 0 {
		return;
	}
	let rule = "─".repeat(usize::from(area.width));
	frame.render_widget(Span::styled(rule, theme.border), area);
}
