use anyhow::Result;
use palette_tui::PaletteOutcome;

/// Print the activated target, or a note when the session was cancelled.
pub(crate) fn print_plain(outcome: &PaletteOutcome) {
	if !outcome.accepted {
		println!("Palette closed (query: '{}')", outcome.query);
		return;
	}

	match outcome.target() {
		Some(target) => println!("{target}"),
		None => println!("No selection"),
	}
}

pub(crate) fn format_outcome_json(outcome: &PaletteOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

pub(crate) fn print_json(outcome: &PaletteOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use palette_core::{ItemAction, ResultItem};
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_includes_the_selected_action() {
		let item = ResultItem {
			id: "users".into(),
			title: "Users".into(),
			kind: "nav".into(),
			icon: None,
			action: Some(ItemAction::Navigate {
				path: "/admin/users".into(),
			}),
		};
		let outcome = PaletteOutcome::activated("use", item);

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["query"], "use");
		assert_eq!(value["selection"]["action"]["type"], "navigate");
		assert_eq!(value["selection"]["action"]["path"], "/admin/users");
	}

	#[test]
	fn cancelled_sessions_have_no_selection() {
		let outcome = PaletteOutcome::cancelled("abc");
		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).expect("json")).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}
}
