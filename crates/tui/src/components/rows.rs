//! Turning result groups into list rows.

use std::fmt::Write as _;

use palette_core::{AggregateOutcome, ResultGroup, ResultItem};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::style::Theme;

const ICON_COLUMN: usize = 2;
const ELLIPSIS: char = '…';

/// One header row per group followed by its items, in the same flat order
/// the results state uses for selection.
#[must_use]
pub fn group_list_items(
	groups: &[ResultGroup],
	width: u16,
	theme: &Theme,
) -> Vec<ListItem<'static>> {
	let width = usize::from(width);
	let mut rows = Vec::with_capacity(groups.iter().map(|group| group.items.len() + 1).sum());
	for group in groups {
		rows.push(ListItem::new(Line::from(Span::styled(
			group.name.to_uppercase(),
			theme.header,
		))));
		rows.extend(
			group
				.items
				.iter()
				.map(|item| ListItem::new(item_line(item, width, theme))),
		);
	}
	rows
}

fn item_line(item: &ResultItem, width: usize, theme: &Theme) -> Line<'static> {
	let icon = item.icon.map(|icon| icon.glyph()).unwrap_or("");
	let kind = item.kind.as_str();
	let kind_width = kind.width();

	// Leave room for the kind label plus one space of padding.
	let title_room = width
		.saturating_sub(ICON_COLUMN)
		.saturating_sub(kind_width + 1);
	let title = truncate(&item.title, title_room);
	let used = ICON_COLUMN + title.width();
	let gap = width.saturating_sub(used + kind_width).max(1);

	let icon_cell = format!("{icon}{}", " ".repeat(ICON_COLUMN.saturating_sub(icon.width())));
	let mut spans = vec![Span::styled(icon_cell, theme.icon), Span::raw(title)];
	if width > used + kind_width {
		spans.push(Span::raw(" ".repeat(gap)));
		spans.push(Span::styled(kind.to_string(), theme.muted));
	}
	Line::from(spans)
}

/// Cut `text` to at most `max` columns, ending in an ellipsis when shortened.
fn truncate(text: &str, max: usize) -> String {
	if text.width() <= max {
		return text.to_string();
	}
	if max == 0 {
		return String::new();
	}
	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let w = ch.width().unwrap_or(0);
		if used + w + 1 > max {
			break;
		}
		out.push(ch);
		used += w;
	}
	out.push(ELLIPSIS);
	out
}

/// Plain-text rendering of an outcome: group names followed by indented
/// items. Used by the list mode and for snapshots.
#[must_use]
pub fn outline(outcome: &AggregateOutcome) -> String {
	let mut out = String::new();
	if outcome.show_empty_message() {
		let _ = writeln!(out, "{}", super::EMPTY_MESSAGE);
		return out;
	}
	for group in &outcome.groups {
		let _ = writeln!(out, "{}", group.name);
		for item in &group.items {
			let icon = item.icon.map(|icon| icon.glyph()).unwrap_or(" ");
			match &item.action {
				Some(action) => {
					let _ = writeln!(out, "  {icon} {} ({}) -> {action}", item.title, item.kind);
				}
				None => {
					let _ = writeln!(out, "  {icon} {} ({})", item.title, item.kind);
				}
			}
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truncation_adds_an_ellipsis() {
		assert_eq!(truncate("Settings", 20), "Settings");
		assert_eq!(truncate("Localization", 6), "Local…");
		assert_eq!(truncate("abc", 0), "");
	}

	#[test]
	fn every_group_gets_a_header_row() {
		let outcome = AggregateOutcome::compute("", &palette_core::CollectionCache::new());
		let rows = group_list_items(&outcome.groups, 40, &Theme::default());
		assert_eq!(rows.len(), outcome.item_count() + outcome.groups.len());
	}
}
