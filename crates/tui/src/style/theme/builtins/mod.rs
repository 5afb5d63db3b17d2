use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub(super) struct BuiltinTheme {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

pub const SLATE: Theme = Theme {
	backdrop: Style::new().bg(Color::Rgb(51, 65, 85)).fg(Color::Rgb(148, 163, 184)),
	surface: Style::new().bg(Color::Rgb(15, 23, 42)).fg(Color::Rgb(226, 232, 240)),
	border: Style::new().fg(Color::Rgb(100, 116, 139)),
	header: Style::new()
		.fg(Color::Rgb(203, 213, 225))
		.bg(Color::Rgb(30, 41, 59))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(22, 163, 74))
		.fg(Color::Rgb(255, 255, 255)),
	prompt: Style::new().fg(Color::Rgb(74, 222, 128)),
	muted: Style::new().fg(Color::Rgb(148, 163, 184)),
	empty: Style::new().fg(Color::Rgb(148, 163, 184)).add_modifier(Modifier::BOLD),
	icon: Style::new().fg(Color::Rgb(250, 204, 21)),
};

pub const LIGHT: Theme = Theme {
	backdrop: Style::new().bg(Color::Rgb(203, 213, 225)).fg(Color::Rgb(71, 85, 105)),
	surface: Style::new().bg(Color::Rgb(255, 255, 255)).fg(Color::Rgb(15, 23, 42)),
	border: Style::new().fg(Color::Rgb(148, 163, 184)),
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(241, 245, 249))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(22, 163, 74))
		.fg(Color::Rgb(255, 255, 255)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	muted: Style::new().fg(Color::Rgb(100, 116, 139)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)).add_modifier(Modifier::BOLD),
	icon: Style::new().fg(Color::Rgb(202, 138, 4)),
};

pub(super) const BUILT_IN: &[BuiltinTheme] = &[
	BuiltinTheme {
		name: "slate",
		aliases: &["dark", "default"],
		theme: SLATE,
	},
	BuiltinTheme {
		name: "light",
		aliases: &["day"],
		theme: LIGHT,
	},
];
