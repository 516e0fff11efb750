use std::sync::Mutex;
use std::time::Duration;

use assessment_finder::classify::DisplayTag;
use assessment_finder::client::{ClientError, RecommendResponse};
use assessment_finder::controller::GENERIC_ERROR_MESSAGE;
use assessment_finder::present::{
	DESCRIPTION_FALLBACK, ResultsBody, TriggerState, present, trigger_state,
};
use assessment_finder::{
	AssessmentRecord, HttpRecommendationClient, RecommendationClient, RequestState,
	SearchController, SearchQuery,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Hands out one canned outcome and records every query it saw.
struct FakeService {
	outcome: Mutex<Option<Result<RecommendResponse, ClientError>>>,
	seen: Mutex<Vec<String>>,
}

impl FakeService {
	fn answering(outcome: Result<RecommendResponse, ClientError>) -> Self {
		Self {
			outcome: Mutex::new(Some(outcome)),
			seen: Mutex::new(Vec::new()),
		}
	}

	fn seen(&self) -> Vec<String> {
		self.seen.lock().expect("lock").clone()
	}
}

impl RecommendationClient for FakeService {
	fn recommend(&self, query: &SearchQuery) -> Result<RecommendResponse, ClientError> {
		self.seen
			.lock()
			.expect("lock")
			.push(query.as_str().to_string());
		self.outcome
			.lock()
			.expect("lock")
			.take()
			.unwrap_or_else(|| Ok(RecommendResponse::default()))
	}
}

fn java_record() -> AssessmentRecord {
	AssessmentRecord::new("Java Coding Test", "https://x")
		.with_test_types(["Knowledge & Skills"])
		.with_duration(40.0)
}

#[test]
fn happy_path_renders_one_knowledge_card() {
	let service = FakeService::answering(Ok(RecommendResponse::new(vec![java_record()])));
	let mut controller = SearchController::new();

	controller.run(&service, "Java developer with strong collaboration skills");

	assert_eq!(
		controller.state(),
		&RequestState::Success(vec![java_record()])
	);
	let presentation = present(controller.state());
	let cards = presentation.cards();
	assert_eq!(cards.len(), 1);
	assert_eq!(cards[0].badges[0].tag, DisplayTag::Knowledge);
	assert_eq!(cards[0].duration.as_deref(), Some("40 mins"));
	assert_eq!(presentation.summary.as_deref(), Some("Showing 1 assessment"));
	assert_eq!(
		service.seen(),
		vec!["Java developer with strong collaboration skills".to_string()]
	);
}

#[test]
fn three_records_pluralize_the_summary() {
	let records = vec![java_record(), java_record(), java_record()];
	let service = FakeService::answering(Ok(RecommendResponse::new(records)));
	let mut controller = SearchController::new();

	controller.run(&service, "java");

	let presentation = present(controller.state());
	assert_eq!(presentation.summary.as_deref(), Some("Showing 3 assessments"));
}

#[test]
fn structured_failure_shows_detail_and_reenables_trigger() {
	let service = FakeService::answering(Err(ClientError::Service {
		status: 400,
		detail: "Invalid input".to_string(),
	}));
	let mut controller = SearchController::new();

	controller.run(&service, "java");

	assert_eq!(controller.state(), &RequestState::Error("Invalid input".into()));
	assert_eq!(trigger_state("java", controller.state()), TriggerState::Ready);
	assert!(present(controller.state()).cards().is_empty());
}

#[test]
fn unstructured_failure_shows_generic_message() {
	let service = FakeService::answering(Err(ClientError::Status { status: 500 }));
	let mut controller = SearchController::new();

	controller.run(&service, "java");

	assert_eq!(
		controller.state(),
		&RequestState::Error(GENERIC_ERROR_MESSAGE.into())
	);
}

#[test]
fn missing_optional_fields_are_omitted_from_the_card() {
	let record: AssessmentRecord =
		serde_json::from_value(json!({ "name": "Verify G+", "url": "https://v" }))
			.expect("record decodes");
	let service = FakeService::answering(Ok(RecommendResponse::new(vec![record])));
	let mut controller = SearchController::new();

	controller.run(&service, "numerical reasoning");

	let presentation = present(controller.state());
	let card = &presentation.cards()[0];
	assert!(card.duration.is_none());
	assert!(card.adaptive.is_none());
	assert!(card.remote.is_none());
	assert_eq!(card.description, DESCRIPTION_FALLBACK);
}

#[test]
fn empty_and_missing_lists_render_identically() {
	let empty: RecommendResponse =
		serde_json::from_value(json!({ "recommended_assessments": [] })).expect("decodes");
	let missing: RecommendResponse = serde_json::from_value(json!({})).expect("decodes");

	let render = |response: RecommendResponse| {
		let service = FakeService::answering(Ok(response));
		let mut controller = SearchController::new();
		controller.run(&service, "java");
		present(controller.state())
	};

	let from_empty = render(empty);
	let from_missing = render(missing);
	assert_eq!(from_empty, from_missing);
	assert_eq!(from_empty.body, ResultsBody::Empty);
	assert_eq!(from_empty, present(&RequestState::Idle));
}

#[test]
fn blank_submission_never_reaches_the_service() {
	let service = FakeService::answering(Ok(RecommendResponse::new(vec![java_record()])));
	let mut controller = SearchController::new();

	assert!(controller.run(&service, " \t ").is_none());

	assert_eq!(controller.state(), &RequestState::Idle);
	assert!(service.seen().is_empty());
}

#[tokio::test]
async fn http_client_feeds_the_controller_end_to_end() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/recommend"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"recommended_assessments": [
				{ "name": "OPQ32r", "test_type": ["Personality & Behavior"], "url": "https://opq" },
				{ "name": "Verify Numerical", "test_type": ["Ability & Aptitude"], "duration": 18, "url": "https://num" }
			]
		})))
		.mount(&server)
		.await;

	let endpoint = server.uri();
	let state = tokio::task::spawn_blocking(move || {
		let client = HttpRecommendationClient::new(endpoint, Duration::from_secs(5))
			.expect("client builds");
		let mut controller = SearchController::new();
		controller.run(&client, "graduate analyst");
		controller.state().clone()
	})
	.await
	.expect("blocking task joins");

	let presentation = present(&state);
	let tags: Vec<DisplayTag> = presentation
		.cards()
		.iter()
		.map(|card| card.badges[0].tag)
		.collect();
	assert_eq!(tags, vec![DisplayTag::Personality, DisplayTag::Ability]);
	assert_eq!(presentation.summary.as_deref(), Some("Showing 2 assessments"));
}
