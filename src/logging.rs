//! Structured logging through `tracing`.
//!
//! The interactive UI owns the terminal, so sessions log to a file. One-shot
//! runs log to stderr, leaving stdout for results. `AFIND_LOG` takes
//! precedence over the configured level and accepts any `EnvFilter` directive.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

pub const LOG_ENV: &str = "AFIND_LOG";
pub const DEFAULT_LEVEL: &str = "info";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

#[derive(Debug, Error)]
pub enum LoggingError {
	#[error("invalid log level/filter '{value}'")]
	Filter {
		value: String,
		#[source]
		source: ParseError,
	},
	#[error("failed to open log file {path}")]
	File {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to install tracing subscriber: {0}")]
	Subscriber(String),
}

/// Build the level filter, preferring `AFIND_LOG` when it is set and valid.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
	if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
		return Ok(filter);
	}
	EnvFilter::try_new(level).map_err(|source| LoggingError::Filter {
		value: level.to_string(),
		source,
	})
}

/// Install the global subscriber.
pub fn initialize(level: &str, target: &LogTarget) -> Result<(), LoggingError> {
	let filter = build_filter(level)?;
	let builder = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.compact();

	let installed = match target {
		LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
		LogTarget::File(path) => {
			let file = open_log_file(path)?;
			builder
				.with_ansi(false)
				.with_writer(Mutex::new(file))
				.try_init()
		}
	};

	installed.map_err(|err| LoggingError::Subscriber(err.to_string()))
}

fn open_log_file(path: &Path) -> Result<fs::File, LoggingError> {
	let to_error = |source| LoggingError::File {
		path: path.to_path_buf(),
		source,
	};
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent).map_err(to_error)?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(to_error)
}
