use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::style::Theme;

const KEY_HINTS: &str = "↑↓ select · ↵ open · esc close";

pub struct StatusContext<'a> {
	pub loading: bool,
	pub loaded: usize,
	pub total: usize,
	pub throbber_state: &'a ThrobberState,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Bottom row: a spinner while collections load, the loaded count, and key
/// hints on the right.
pub fn render_status(frame: &mut Frame, ctx: StatusContext<'_>) {
	let StatusContext {
		loading,
		loaded,
		total,
		throbber_state,
		area,
		theme,
	} = ctx;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let mut left = Line::default();
	if loading {
		let spinner = Throbber::default()
			.style(theme.muted)
			.throbber_style(theme.muted);
		left.spans.push(spinner.to_symbol_span(throbber_state));
	}
	left.spans
		.push(Span::styled(format!("{loaded}/{total} collections"), theme.muted));
	let left_width = left.width() as u16;
	frame.render_widget(Paragraph::new(left), area);

	let hints_width = KEY_HINTS.chars().count() as u16;
	if area.width > hints_width + left_width + 2 {
		frame.render_widget(
			Paragraph::new(KEY_HINTS)
				.alignment(Alignment::Right)
				.style(theme.muted),
			area,
		);
	}
}
