use assessment_finder::ui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let endpoint = config.endpoint.as_str();
	let has_host = endpoint
		.strip_prefix("https://")
		.or_else(|| endpoint.strip_prefix("http://"))
		.is_some_and(|rest| !rest.trim_matches('/').is_empty());
	if !has_host {
		return Err(ConfigError::invalid(
			"service.endpoint",
			endpoint,
			sources.source_for_endpoint(),
			"must be an http:// or https:// URL",
		));
	}

	if config.request_timeout.is_zero() {
		return Err(ConfigError::invalid(
			"service.request_timeout_secs",
			"0",
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if let Some(theme) = &config.theme
		&& style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.as_str(),
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", style::names().join(", ")),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			endpoint: "http://localhost:8000".into(),
			request_timeout: Duration::from_secs(90),
			title: None,
			initial_query: String::new(),
			theme: None,
			log_level: "info".into(),
			log_file: None,
		}
	}

	#[test]
	fn accepts_http_and_https_endpoints() {
		let mut config = config();
		assert!(validate(&config, &ConfigSources::default()).is_ok());
		config.endpoint = "https://example.test/".into();
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn rejects_endpoint_without_scheme_or_host() {
		for endpoint in ["localhost:8000", "http://", "ftp://example.test"] {
			let mut config = config();
			config.endpoint = endpoint.into();
			let error = validate(&config, &ConfigSources::default()).expect_err(endpoint);
			assert_eq!(error.key, "service.endpoint");
		}
	}

	#[test]
	fn rejects_zero_timeout_with_origin() {
		let mut config = config();
		config.request_timeout = Duration::ZERO;
		let sources = ConfigSources {
			service_timeout: Some(SettingSource::Environment(
				"AFIND__SERVICE__REQUEST_TIMEOUT_SECS",
			)),
			..ConfigSources::default()
		};

		let error = validate(&config, &sources).expect_err("zero timeout");

		assert_eq!(
			error.origin,
			SettingSource::Environment("AFIND__SERVICE__REQUEST_TIMEOUT_SECS")
		);
	}

	#[test]
	fn rejects_unknown_theme() {
		let mut config = config();
		config.theme = Some("neon".into());
		let error = validate(&config, &ConfigSources::default()).expect_err("unknown theme");
		assert!(error.reason.contains("slate"));
	}

	#[test]
	fn theme_aliases_are_accepted() {
		let mut config = config();
		config.theme = Some("dark".into());
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
