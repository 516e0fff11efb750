use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `afind` binary.
#[derive(Parser, Debug)]
#[command(
	name = "afind",
	version,
	long_version = long_version(),
	about = "Discover assessments that match a hiring need",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "AFIND_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Base URL of the recommendation service (default: hosted service)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Per-request timeout in seconds (default: 90)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Run a single search without the interactive UI"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'i',
		long = "initial-query",
		value_name = "QUERY",
		help = "Pre-fill the interactive query input (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the heading shown above the query input"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log level or filter directive (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write interactive session logs here (default: data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "check-health",
		help = "Query the service health endpoint and exit (default: disabled)"
	)]
	pub(crate) check_health: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}
