use ratatui::layout::Rect;

const PALETTE_MAX_WIDTH: u16 = 72;
const PALETTE_MAX_HEIGHT: u16 = 20;
const PALETTE_MIN_HEIGHT: u16 = 6;

/// Centered box the palette is drawn in, leaving a visible backdrop margin
/// whenever the terminal is large enough.
pub(crate) fn palette_area(screen: Rect) -> Rect {
	let width = screen.width.saturating_sub(4).clamp(1, PALETTE_MAX_WIDTH).min(screen.width);
	let height = screen
		.height
		.saturating_sub(2)
		.clamp(PALETTE_MIN_HEIGHT, PALETTE_MAX_HEIGHT)
		.min(screen.height);
	let x = screen.x + (screen.width - width) / 2;
	let y = screen.y + (screen.height - height) / 3;
	Rect {
		x,
		y,
		width,
		height,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn palette_is_centered_and_capped() {
		let area = palette_area(Rect::new(0, 0, 120, 40));
		assert_eq!(area.width, PALETTE_MAX_WIDTH);
		assert_eq!(area.height, PALETTE_MAX_HEIGHT);
		assert_eq!(area.x, (120 - PALETTE_MAX_WIDTH) / 2);
	}

	#[test]
	fn palette_fits_tiny_screens() {
		let screen = Rect::new(0, 0, 10, 4);
		let area = palette_area(screen);
		assert!(area.width <= screen.width);
		assert!(area.height <= screen.height);
	}
}
