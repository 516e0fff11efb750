use std::sync::Arc;

use anyhow::{Result, anyhow, bail};
use assessment_finder::controller::RequestState;
use assessment_finder::present::{ResultsPresentation, present};
use assessment_finder::ui::style;
use assessment_finder::{App, RecommendationClient, SearchController, SearchOutcome, UiLabels};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	client: Arc<dyn RecommendationClient>,
	config: ResolvedConfig,
}

impl SearchWorkflow {
	pub(crate) fn new(config: ResolvedConfig, client: Arc<dyn RecommendationClient>) -> Self {
		Self { client, config }
	}

	/// Run the terminal UI until the user accepts a card or cancels.
	pub(crate) fn run_interactive(self) -> Result<SearchOutcome> {
		let mut app = self.build_app()?;
		app.run()
	}

	/// Run a single search synchronously and return what would be shown.
	pub(crate) fn run_once(self, query: &str) -> Result<ResultsPresentation> {
		let mut controller = SearchController::new();
		let token = controller
			.run(self.client.as_ref(), query)
			.ok_or_else(|| anyhow!("query must not be blank"))?;
		info!(%token, "one-shot search finished");

		if let RequestState::Error(message) = controller.state() {
			bail!("{message}");
		}
		Ok(present(controller.state()))
	}

	fn build_app(self) -> Result<App<'static>> {
		let ResolvedConfig {
			title,
			initial_query,
			theme,
			..
		} = self.config;

		let labels = match title {
			Some(title) => UiLabels::default().with_title(title),
			None => UiLabels::default(),
		};
		let mut app = App::with_labels(self.client, labels);

		if let Some(name) = theme {
			let theme = style::by_name(&name).ok_or_else(|| anyhow!("unknown theme '{name}'"))?;
			app.set_theme(theme);
		}
		if !initial_query.is_empty() {
			app.set_initial_query(initial_query);
		}
		Ok(app)
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use assessment_finder::client::{ClientError, RecommendResponse};
	use assessment_finder::controller::GENERIC_ERROR_MESSAGE;
	use assessment_finder::{AssessmentRecord, SearchQuery};

	use super::*;

	struct FixedClient(Result<Vec<AssessmentRecord>, u16>);

	impl RecommendationClient for FixedClient {
		fn recommend(&self, _query: &SearchQuery) -> Result<RecommendResponse, ClientError> {
			match &self.0 {
				Ok(records) => Ok(RecommendResponse::new(records.clone())),
				Err(status) => Err(ClientError::Status { status: *status }),
			}
		}
	}

	fn workflow(client: FixedClient) -> SearchWorkflow {
		let config = ResolvedConfig {
			endpoint: "http://localhost:8000".into(),
			request_timeout: Duration::from_secs(1),
			title: None,
			initial_query: String::new(),
			theme: Some("light".into()),
			log_level: "info".into(),
			log_file: None,
		};
		SearchWorkflow::new(config, Arc::new(client))
	}

	#[test]
	fn one_shot_returns_cards() {
		let records = vec![AssessmentRecord::new("Java Coding Test", "https://x")];
		let presentation = workflow(FixedClient(Ok(records)))
			.run_once("java")
			.expect("search succeeds");
		assert_eq!(presentation.cards().len(), 1);
	}

	#[test]
	fn one_shot_rejects_blank_query() {
		let error = workflow(FixedClient(Ok(Vec::new())))
			.run_once("   ")
			.expect_err("blank query");
		assert!(error.to_string().contains("blank"));
	}

	#[test]
	fn one_shot_failure_surfaces_generic_message() {
		let error = workflow(FixedClient(Err(503)))
			.run_once("java")
			.expect_err("service failure");
		assert_eq!(error.to_string(), GENERIC_ERROR_MESSAGE);
	}

	#[test]
	fn interactive_app_applies_configured_theme() {
		let app = workflow(FixedClient(Ok(Vec::new())))
			.build_app()
			.expect("app builds");
		assert_eq!(app.theme, style::by_name("light").expect("light theme"));
	}
}
