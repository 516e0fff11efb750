use std::io::Write;
use std::time::Duration;

use assessment_finder::client::DEFAULT_ENDPOINT;
use clap::Parser;

use super::{DEFAULT_TIMEOUT_SECS, RawConfig};
use crate::cli::CliArgs;
use crate::settings::load;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
	let mut file = tempfile::Builder::new()
		.suffix(".toml")
		.tempfile()
		.expect("temp file");
	file.write_all(contents.as_bytes()).expect("write config");
	file
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"afind",
		"--endpoint",
		"http://localhost:8000",
		"--timeout",
		"5",
		"--title",
		"Finder",
		"--initial-query",
		"java",
		"--theme",
		"light",
		"--log-level",
		"debug",
	]);

	let mut config = RawConfig::default();
	config.service.endpoint = Some("https://file.example".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.service.endpoint.as_deref(), Some("http://localhost:8000"));
	assert_eq!(config.service.request_timeout_secs, Some(5));
	assert_eq!(config.ui.title.as_deref(), Some("Finder"));
	assert_eq!(config.ui.initial_query.as_deref(), Some("java"));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn defaults_fill_missing_values() {
	let cli = CliArgs::parse_from(["afind", "--no-config"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolves");

	assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
	assert_eq!(resolved.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
	assert_eq!(resolved.log_level, "info");
	assert!(resolved.title.is_none());
	assert!(resolved.initial_query.is_empty());
}

#[test]
fn config_file_values_are_loaded_and_cli_wins() {
	let file = write_config(
		r#"
[service]
endpoint = "http://file.example:9000"
request_timeout_secs = 30

[ui]
title = "From file"
"#,
	);
	let path = file.path().to_string_lossy().into_owned();
	let cli = CliArgs::parse_from(["afind", "--no-config", "--config", &path, "--timeout", "12"]);

	let resolved = load(&cli).expect("loads");

	assert_eq!(resolved.endpoint, "http://file.example:9000");
	assert_eq!(resolved.request_timeout, Duration::from_secs(12));
	assert_eq!(resolved.title.as_deref(), Some("From file"));
}

#[test]
fn missing_explicit_config_file_is_an_error() {
	let cli = CliArgs::parse_from(["afind", "--no-config", "--config", "/nonexistent/afind.toml"]);
	assert!(load(&cli).is_err());
}

#[test]
fn invalid_endpoint_from_file_names_its_origin() {
	let file = write_config("[service]\nendpoint = \"ftp://example\"\n");
	let path = file.path().to_string_lossy().into_owned();
	let cli = CliArgs::parse_from(["afind", "--no-config", "--config", &path]);

	let error = load(&cli).expect_err("rejected");
	let message = error.to_string();

	assert!(message.contains("service.endpoint"), "{message}");
	assert!(message.contains("ftp://example"), "{message}");
}

#[test]
fn zero_timeout_from_cli_is_rejected() {
	let cli = CliArgs::parse_from(["afind", "--no-config", "--timeout", "0"]);
	let mut raw = RawConfig::default();
	raw.apply_cli_overrides(&cli);
	let error = raw.resolve(&cli).expect_err("rejected");
	assert!(error.to_string().contains("--timeout"));
}
