use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Endpoint: {}", config.endpoint);
	let _ = writeln!(
		out,
		"  Request timeout: {}s",
		config.request_timeout.as_secs()
	);
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	if let Some(title) = &config.title {
		let _ = writeln!(out, "  Title: {title}");
	}
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	if let Some(file) = &config.log_file {
		let _ = writeln!(out, "  Log file: {}", file.display());
	}
	out
}
