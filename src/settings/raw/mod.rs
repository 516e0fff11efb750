use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Error, Result};
use assessment_finder::client::DEFAULT_ENDPOINT;
use assessment_finder::logging::DEFAULT_LEVEL;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

pub(super) const DEFAULT_TIMEOUT_SECS: u64 = 90;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) service: ServiceSection,
	pub(super) ui: UiSection,
	pub(super) logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ServiceSection {
	pub(super) endpoint: Option<String>,
	pub(super) request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.service.endpoint = Some(endpoint);
		}
		if let Some(timeout) = cli.timeout_secs {
			self.service.request_timeout_secs = Some(timeout);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			service_endpoint: detect_source(
				cli.endpoint.is_some(),
				self.service.endpoint.is_some(),
				"AFIND__SERVICE__ENDPOINT",
				"--endpoint",
				"service.endpoint",
			),
			service_timeout: detect_source(
				cli.timeout_secs.is_some(),
				self.service.request_timeout_secs.is_some(),
				"AFIND__SERVICE__REQUEST_TIMEOUT_SECS",
				"--timeout",
				"service.request_timeout_secs",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"AFIND__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let config = ResolvedConfig {
			endpoint: self
				.service
				.endpoint
				.map(|endpoint| endpoint.trim().to_string())
				.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
			request_timeout: Duration::from_secs(
				self.service
					.request_timeout_secs
					.unwrap_or(DEFAULT_TIMEOUT_SECS),
			),
			title: self.ui.title.filter(|title| !title.trim().is_empty()),
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme: self.ui.theme,
			log_level: self
				.logging
				.level
				.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
			log_file: self.logging.file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
