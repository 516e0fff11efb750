//! Derive what the results area should show from the current request state.
//!
//! Nothing here touches the terminal. The renderer and the one-shot printer
//! both consume [`ResultsPresentation`], which keeps the display rules
//! testable without a drawing backend.

use serde::Serialize;

use crate::classify::{ClassifiedLabel, classify_labels};
use crate::controller::RequestState;
use crate::types::AssessmentRecord;

pub const EMPTY_TITLE: &str = "No results yet";
pub const EMPTY_HINT: &str =
	"Enter a job description or requirement to discover relevant assessments";
pub const DESCRIPTION_FALLBACK: &str = "No description available.";
pub const VIEW_DETAILS_LABEL: &str = "View Details →";

/// Display-ready content for one recommended assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentCard {
	pub name: String,
	pub badges: Vec<ClassifiedLabel>,
	pub description: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub duration: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub adaptive: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub remote: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub link: Option<String>,
}

impl AssessmentCard {
	#[must_use]
	pub fn from_record(record: &AssessmentRecord) -> Self {
		Self {
			name: record.name.clone(),
			badges: classify_labels(&record.test_type),
			description: non_blank(record.description.as_deref())
				.unwrap_or(DESCRIPTION_FALLBACK)
				.to_string(),
			duration: record.visible_duration().map(format_duration),
			adaptive: non_blank(record.adaptive_support.as_deref())
				.map(|value| format!("Adaptive: {value}")),
			remote: non_blank(record.remote_support.as_deref())
				.map(|value| format!("Remote: {value}")),
			link: non_blank(Some(record.url.as_str())).map(str::to_string),
		}
	}
}

/// Main body of the results area.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsBody {
	/// Prompt the user to enter a query.
	Empty,
	/// One card per record, in the order the service returned them.
	Cards(Vec<AssessmentCard>),
}

/// Everything the results area needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPresentation {
	pub body: ResultsBody,
	pub error: Option<String>,
	pub busy: bool,
	pub summary: Option<String>,
}

impl ResultsPresentation {
	#[must_use]
	pub fn cards(&self) -> &[AssessmentCard] {
		match &self.body {
			ResultsBody::Cards(cards) => cards,
			ResultsBody::Empty => &[],
		}
	}
}

/// Build the presentation for `state`.
///
/// `Idle` and an empty `Success` are indistinguishable. While loading the
/// previous results are not shown; an error keeps the empty body and adds the
/// message.
#[must_use]
pub fn present(state: &RequestState) -> ResultsPresentation {
	match state {
		RequestState::Success(records) if !records.is_empty() => ResultsPresentation {
			body: ResultsBody::Cards(records.iter().map(AssessmentCard::from_record).collect()),
			error: None,
			busy: false,
			summary: Some(count_summary(records.len())),
		},
		RequestState::Error(message) => ResultsPresentation {
			body: ResultsBody::Empty,
			error: Some(message.clone()),
			busy: false,
			summary: None,
		},
		RequestState::Loading => ResultsPresentation {
			body: ResultsBody::Empty,
			error: None,
			busy: true,
			summary: None,
		},
		RequestState::Idle | RequestState::Success(_) => ResultsPresentation {
			body: ResultsBody::Empty,
			error: None,
			busy: false,
			summary: None,
		},
	}
}

/// "Showing N assessment(s)" with singular wording for exactly one.
#[must_use]
pub fn count_summary(count: usize) -> String {
	let noun = if count == 1 {
		"assessment"
	} else {
		"assessments"
	};
	format!("Showing {count} {noun}")
}

/// Render a positive duration, dropping the fraction for whole minutes.
#[must_use]
pub fn format_duration(minutes: f64) -> String {
	format!("{minutes} mins")
}

/// Whether the submit trigger can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
	Ready,
	/// Query is blank.
	Disabled,
	/// A request is in flight.
	Busy,
}

impl TriggerState {
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Busy => "Analyzing...",
			Self::Ready | Self::Disabled => "Discover Assessments",
		}
	}

	#[must_use]
	pub fn is_enabled(self) -> bool {
		matches!(self, Self::Ready)
	}
}

#[must_use]
pub fn trigger_state(query: &str, state: &RequestState) -> TriggerState {
	if state.is_loading() {
		TriggerState::Busy
	} else if query.trim().is_empty() {
		TriggerState::Disabled
	} else {
		TriggerState::Ready
	}
}

fn non_blank(value: Option<&str>) -> Option<&str> {
	value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::classify::DisplayTag;

	fn java_record() -> AssessmentRecord {
		AssessmentRecord::new("Java Coding Test", "https://x")
			.with_test_types(["Knowledge & Skills"])
			.with_duration(40.0)
	}

	#[test]
	fn idle_and_empty_success_render_identically() {
		assert_eq!(
			present(&RequestState::Idle),
			present(&RequestState::Success(Vec::new()))
		);
		assert_eq!(present(&RequestState::Idle).body, ResultsBody::Empty);
	}

	#[test]
	fn single_record_produces_one_card_and_singular_summary() {
		let presentation = present(&RequestState::Success(vec![java_record()]));

		let cards = presentation.cards();
		assert_eq!(cards.len(), 1);
		assert_eq!(cards[0].name, "Java Coding Test");
		assert_eq!(cards[0].badges[0].tag, DisplayTag::Knowledge);
		assert_eq!(cards[0].duration.as_deref(), Some("40 mins"));
		assert_eq!(cards[0].link.as_deref(), Some("https://x"));
		assert_eq!(presentation.summary.as_deref(), Some("Showing 1 assessment"));
	}

	#[test]
	fn many_records_use_plural_summary() {
		let records = vec![java_record(), java_record(), java_record()];
		let presentation = present(&RequestState::Success(records));
		assert_eq!(presentation.summary.as_deref(), Some("Showing 3 assessments"));
	}

	#[test]
	fn missing_optional_fields_are_omitted() {
		let record = AssessmentRecord::new("Verify G+", "https://v");
		let card = AssessmentCard::from_record(&record);

		assert_eq!(card.description, DESCRIPTION_FALLBACK);
		assert!(card.duration.is_none());
		assert!(card.adaptive.is_none());
		assert!(card.remote.is_none());
		assert!(card.badges.is_empty());
	}

	#[test]
	fn blank_strings_count_as_missing() {
		let record = AssessmentRecord::new("OPQ", "")
			.with_description("   ")
			.with_adaptive_support("")
			.with_remote_support("Yes")
			.with_duration(0.0);
		let card = AssessmentCard::from_record(&record);

		assert_eq!(card.description, DESCRIPTION_FALLBACK);
		assert!(card.adaptive.is_none());
		assert_eq!(card.remote.as_deref(), Some("Remote: Yes"));
		assert!(card.duration.is_none());
		assert!(card.link.is_none());
	}

	#[test]
	fn badges_follow_label_order() {
		let record = AssessmentRecord::new("Mixed", "https://m").with_test_types([
			"Personality & Behavior",
			"Simulations",
			"Ability & Aptitude",
		]);
		let tags: Vec<DisplayTag> = AssessmentCard::from_record(&record)
			.badges
			.into_iter()
			.map(|badge| badge.tag)
			.collect();

		assert_eq!(
			tags,
			vec![
				DisplayTag::Personality,
				DisplayTag::Unclassified,
				DisplayTag::Ability,
			]
		);
	}

	#[test]
	fn error_state_keeps_empty_body_and_surfaces_message() {
		let presentation = present(&RequestState::Error("Invalid input".to_string()));

		assert_eq!(presentation.body, ResultsBody::Empty);
		assert_eq!(presentation.error.as_deref(), Some("Invalid input"));
		assert!(presentation.summary.is_none());
		assert!(!presentation.busy);
	}

	#[test]
	fn loading_is_busy_without_results() {
		let presentation = present(&RequestState::Loading);
		assert!(presentation.busy);
		assert!(presentation.cards().is_empty());
	}

	#[test]
	fn fractional_durations_keep_their_fraction() {
		assert_eq!(format_duration(40.0), "40 mins");
		assert_eq!(format_duration(7.5), "7.5 mins");
	}

	#[test]
	fn trigger_is_busy_while_loading_and_disabled_for_blank_query() {
		assert_eq!(trigger_state("java", &RequestState::Loading), TriggerState::Busy);
		assert_eq!(trigger_state("   ", &RequestState::Idle), TriggerState::Disabled);
		assert_eq!(
			trigger_state("java", &RequestState::Error("x".into())),
			TriggerState::Ready
		);
		assert_eq!(TriggerState::Busy.label(), "Analyzing...");
		assert!(!TriggerState::Disabled.is_enabled());
	}
}
