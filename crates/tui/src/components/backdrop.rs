use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};

use crate::keyboard::KeyBinding;
use crate::style::Theme;

pub const EMPTY_MESSAGE: &str = "Hmmm.... can't find anything.";

/// Fill the whole screen with the dimmed backdrop.
pub fn render_backdrop(frame: &mut Frame, area: Rect, theme: &Theme) {
	frame.render_widget(Block::new().style(theme.backdrop), area);
}

/// Hint shown on the bare backdrop while the palette is hidden.
pub fn render_hint(frame: &mut Frame, area: Rect, bindings: &[KeyBinding], theme: &Theme) {
	let chord = bindings
		.first()
		.map(ToString::to_string)
		.unwrap_or_else(|| "the toggle key".to_string());
	let text = format!("Press {chord} to open the palette · q to quit");
	let [row] = Layout::vertical([Constraint::Length(1)])
		.flex(ratatui::layout::Flex::Center)
		.areas(area);
	frame.render_widget(
		Paragraph::new(text)
			.alignment(Alignment::Center)
			.style(theme.backdrop),
		row,
	);
}

pub fn render_empty_message(frame: &mut Frame, area: Rect, theme: &Theme) {
	let [row] = Layout::vertical([Constraint::Length(1)])
		.flex(ratatui::layout::Flex::Center)
		.areas(area);
	frame.render_widget(
		Paragraph::new(EMPTY_MESSAGE)
			.alignment(Alignment::Center)
			.style(theme.empty),
		row,
	);
}
