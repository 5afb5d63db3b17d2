use palette_core::ResultItem;
use serde::Serialize;

/// How a palette session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteOutcome {
	/// `true` when a result was activated, `false` when the user quit.
	pub accepted: bool,
	pub query: String,
	pub selection: Option<ResultItem>,
}

impl PaletteOutcome {
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	pub fn activated(query: impl Into<String>, item: ResultItem) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection: Some(item),
		}
	}

	/// Where the activated row points, e.g. `/admin/users`.
	#[must_use]
	pub fn target(&self) -> Option<String> {
		self.selection
			.as_ref()
			.and_then(|item| item.action.as_ref())
			.map(ToString::to_string)
	}
}
