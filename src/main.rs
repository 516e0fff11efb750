mod cli;
mod settings;
mod workflow;

use std::sync::Arc;

use anyhow::{Context, Result};
use assessment_finder::logging::{self, LogTarget};
use assessment_finder::ui::style;
use assessment_finder::{HttpRecommendationClient, app_dirs};
use cli::{CliArgs, parse_cli, print_health, print_outcome, print_presentation};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	init_logging(&cli, &resolved)?;
	run(&cli, resolved)
}

fn init_logging(cli: &CliArgs, config: &ResolvedConfig) -> Result<()> {
	let interactive = cli.query.is_none() && !cli.check_health;
	let target = if interactive {
		let path = match &config.log_file {
			Some(path) => path.clone(),
			None => app_dirs::default_log_file()?,
		};
		LogTarget::File(path)
	} else {
		LogTarget::Stderr
	};
	logging::initialize(&config.log_level, &target).context("failed to initialize logging")
}

fn run(cli: &CliArgs, config: ResolvedConfig) -> Result<()> {
	let client = HttpRecommendationClient::new(config.endpoint.clone(), config.request_timeout)
		.context("failed to build recommendation client")?;

	if cli.check_health {
		let health = client
			.health()
			.with_context(|| format!("health check against {} failed", client.endpoint()))?;
		return print_health(cli.output, &health);
	}

	let workflow = SearchWorkflow::new(config, Arc::new(client));
	match &cli.query {
		Some(query) => {
			let presentation = workflow.run_once(query)?;
			print_presentation(cli.output, query.trim(), &presentation)
		}
		None => {
			let outcome = workflow.run_interactive()?;
			print_outcome(cli.output, &outcome)
		}
	}
}
