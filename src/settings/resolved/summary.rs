use super::{ResolvedConfig, SourceSettings};

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec!["Effective configuration:".to_string()];
	if config.config_files.is_empty() {
		lines.push("  Config files: (none)".to_string());
	} else {
		let files: Vec<String> = config
			.config_files
			.iter()
			.map(|path| path.display().to_string())
			.collect();
		lines.push(format!("  Config files: {}", files.join(", ")));
	}
	match &config.source {
		SourceSettings::Http { base_url } => lines.push(format!("  Base URL: {base_url}")),
		SourceSettings::Directory { root } => {
			lines.push(format!("  Data directory: {}", root.display()));
		}
	}
	lines.push(format!("  Theme: {}", config.theme_name));
	lines.push(format!(
		"  Start visible: {}",
		bool_to_word(config.palette.start_visible)
	));
	let chords: Vec<String> = config
		.palette
		.toggle_keys
		.iter()
		.map(ToString::to_string)
		.collect();
	lines.push(format!("  Toggle keys: {}", chords.join(", ")));
	lines.push(format!("  Placeholder: {}", config.palette.placeholder));
	if !config.palette.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.palette.initial_query));
	}
	lines.push(format!("  Log file: {}", config.logging.file.display()));
	lines.push(format!("  Log filter: {}", config.logging.filter));
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
