use std::fs;
use std::path::PathBuf;

use clap::Parser;
use palette_tui::style;
use tempfile::tempdir;

use super::RawConfig;
use super::sections::{KeysSection, SourceSection};
use crate::cli::CliArgs;
use crate::settings::{SourceSettings, load};

fn cli(args: &[&str]) -> CliArgs {
	let mut full = vec!["palette", "--no-config", "--log-file", "/tmp/palette-test.log"];
	full.extend_from_slice(args);
	CliArgs::parse_from(full)
}

#[test]
fn cli_overrides_take_precedence() {
	let args = cli(&[
		"--data-dir",
		"/srv/collections",
		"--initial-query",
		"trig",
		"--theme",
		"light",
		"--toggle-key",
		"ctrl+p",
		"--hidden",
	]);
	let mut config = RawConfig::default();
	config.source.base_url = Some("http://example.test".into());
	config.apply_cli_overrides(&args);

	assert_eq!(config.source.base_url, None);
	assert_eq!(config.source.data_dir, Some(PathBuf::from("/srv/collections")));
	assert_eq!(config.ui.initial_query.as_deref(), Some("trig"));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.ui.start_visible, Some(false));
	assert_eq!(config.keys.toggle, Some(vec!["ctrl+p".to_string()]));
	assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/palette-test.log")));
}

#[test]
fn defaults_point_at_the_local_server() {
	let args = cli(&[]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&args);
	let resolved = config.resolve(&args).expect("resolves");

	assert_eq!(
		resolved.source,
		SourceSettings::Http {
			base_url: "http://localhost:3000".into()
		}
	);
	assert_eq!(resolved.theme_name, style::DEFAULT_THEME);
	assert!(resolved.palette.start_visible);
	assert_eq!(resolved.palette.placeholder, "Go To...");
	assert_eq!(resolved.palette.toggle_keys.len(), 2);
	assert_eq!(resolved.logging.filter, "info");
}

#[test]
fn both_sources_are_rejected() {
	let args = cli(&[]);
	let config = RawConfig {
		source: SourceSection {
			base_url: Some("http://localhost:3000".into()),
			data_dir: Some(PathBuf::from("/tmp")),
		},
		..RawConfig::default()
	};
	let message = config.resolve(&args).unwrap_err().to_string();
	assert!(message.contains("not both"));
	assert!(message.contains("configuration key `source.data_dir`"));
}

#[test]
fn base_url_needs_a_scheme() {
	let args = cli(&["--base-url", "localhost:3000"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&args);
	let message = config.resolve(&args).unwrap_err().to_string();
	assert!(message.contains("source.base_url"));
	assert!(message.contains("CLI flag `--base-url`"));
	assert!(message.contains("(got `localhost:3000`)"));
}

#[test]
fn trailing_slashes_are_dropped_from_the_base_url() {
	let args = cli(&["--base-url", "https://support.example.com/api/"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&args);
	let resolved = config.resolve(&args).expect("resolves");
	assert_eq!(
		resolved.source,
		SourceSettings::Http {
			base_url: "https://support.example.com/api".into()
		}
	);
}

#[test]
fn theme_aliases_resolve_to_the_builtin_name() {
	let args = cli(&["--theme", "Dark"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&args);
	let resolved = config.resolve(&args).expect("resolves");
	assert_eq!(resolved.theme_name, "slate");
	assert_eq!(resolved.palette.theme, style::SLATE);
}

#[test]
fn unknown_themes_list_the_alternatives() {
	let args = cli(&["--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&args);
	let message = config.resolve(&args).unwrap_err().to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("slate"));
}

#[test]
fn bad_toggle_chords_are_reported() {
	let args = cli(&[]);
	let config = RawConfig {
		keys: KeysSection {
			toggle: Some(vec!["hyper+k".into()]),
		},
		..RawConfig::default()
	};
	let message = config.resolve(&args).unwrap_err().to_string();
	assert!(message.contains("keys.toggle"));
	assert!(message.contains("hyper+k"));

	let config = RawConfig {
		keys: KeysSection {
			toggle: Some(vec![" ".into()]),
		},
		..RawConfig::default()
	};
	let message = config.resolve(&args).unwrap_err().to_string();
	assert!(message.contains("at least one chord"));
}

#[test]
fn config_files_are_merged() {
	let dir = tempdir().expect("tempdir");
	let path = dir.path().join("palette.toml");
	fs::write(
		&path,
		r#"
[source]
data_dir = "/srv/fixtures"

[ui]
theme = "light"
start_visible = false
placeholder = "Jump to..."

[keys]
toggle = ["alt+p"]

[logging]
filter = "palette=debug"
"#,
	)
	.expect("write config");

	let path = path.to_string_lossy().into_owned();
	let args = cli(&["--config", &path]);
	let resolved = load(&args).expect("loads");

	assert_eq!(resolved.config_files, [PathBuf::from(&path)]);
	assert_eq!(
		resolved.source,
		SourceSettings::Directory {
			root: PathBuf::from("/srv/fixtures")
		}
	);
	assert_eq!(resolved.theme_name, "light");
	assert!(!resolved.palette.start_visible);
	assert_eq!(resolved.palette.placeholder, "Jump to...");
	assert_eq!(resolved.palette.toggle_keys[0].to_string(), "Alt+P");
	assert_eq!(resolved.logging.filter, "palette=debug");
	assert_eq!(resolved.logging.file, PathBuf::from("/tmp/palette-test.log"));
}

#[test]
fn missing_explicit_config_is_an_error() {
	let args = cli(&["--config", "/definitely/not/here/palette.toml"]);
	assert!(load(&args).is_err());
}
