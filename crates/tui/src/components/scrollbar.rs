use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Precomputed scrolling metrics for a scrollable viewport.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollMetrics {
	/// Total number of rows in the content.
	pub content_length: usize,
	/// Number of rows visible in the viewport.
	pub viewport_len: usize,
	pub max_scroll: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Returns empty metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length).max(1);
		Self {
			content_length,
			viewport_len,
			max_scroll: content_length.saturating_sub(viewport_len),
			needs_scrollbar: content_length > viewport_len,
		}
	}

	/// Convert a scroll offset to a scrollbar position.
	#[must_use]
	pub fn scrollbar_position(&self, scroll: usize) -> usize {
		if self.max_scroll == 0 || self.content_length == 0 {
			0
		} else {
			scroll.min(self.max_scroll).saturating_mul(self.content_length.saturating_sub(1))
				/ self.max_scroll
		}
	}
}

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Draw a scrollbar on the right edge of `area` and return the area left for
/// content.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.muted);

	let bar = Rect {
		x: area.x + area.width.saturating_sub(1),
		width: 1.min(area.width),
		..area
	};
	frame.render_stateful_widget(scrollbar, bar, state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn metrics_flag_overflow() {
		let metrics = ScrollMetrics::compute(30, 10);
		assert!(metrics.needs_scrollbar);
		assert_eq!(metrics.max_scroll, 20);
		assert_eq!(metrics.scrollbar_position(20), 29);

		let metrics = ScrollMetrics::compute(5, 10);
		assert!(!metrics.needs_scrollbar);
		assert_eq!(metrics.scrollbar_position(3), 0);
	}

	#[test]
	fn points_on_the_edge_are_outside() {
		let area = Rect::new(2, 2, 4, 3);
		assert!(point_in_rect(2, 2, area));
		assert!(point_in_rect(5, 4, area));
		assert!(!point_in_rect(6, 4, area));
		assert!(!point_in_rect(1, 2, area));
	}
}
