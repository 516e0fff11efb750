use std::fmt::Write;

use anyhow::Result;
use assessment_finder::client::HealthStatus;
use assessment_finder::present::{AssessmentCard, EMPTY_TITLE, ResultsPresentation, VIEW_DETAILS_LABEL};
use assessment_finder::SearchOutcome;
use serde::Serialize;

use super::OutputFormat;

/// Print the outcome of an interactive session.
pub(crate) fn print_outcome(format: OutputFormat, outcome: &SearchOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", format_outcome_plain(outcome)),
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(outcome)?),
	}
	Ok(())
}

fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", outcome.query);
	}
	match &outcome.selection {
		Some(record) if !record.url.is_empty() => record.url.clone(),
		Some(record) => record.name.clone(),
		None => "No selection".to_string(),
	}
}

#[derive(Serialize)]
struct PresentationJson<'a> {
	query: &'a str,
	count: usize,
	assessments: &'a [AssessmentCard],
}

/// Print the cards of a one-shot search.
pub(crate) fn print_presentation(
	format: OutputFormat,
	query: &str,
	presentation: &ResultsPresentation,
) -> Result<()> {
	match format {
		OutputFormat::Plain => print!("{}", format_presentation_plain(presentation)),
		OutputFormat::Json => {
			let cards = presentation.cards();
			let payload = PresentationJson {
				query,
				count: cards.len(),
				assessments: cards,
			};
			println!("{}", serde_json::to_string_pretty(&payload)?);
		}
	}
	Ok(())
}

fn format_presentation_plain(presentation: &ResultsPresentation) -> String {
	let cards = presentation.cards();
	let mut out = String::new();
	let Some(summary) = &presentation.summary else {
		let _ = writeln!(out, "{EMPTY_TITLE}");
		return out;
	};

	let _ = writeln!(out, "{summary}");
	for (index, card) in cards.iter().enumerate() {
		let _ = writeln!(out);
		let _ = writeln!(out, "{}. {}", index + 1, card.name);
		if !card.badges.is_empty() {
			let badges: Vec<String> = card
				.badges
				.iter()
				.map(|badge| format!("[{}]", badge.label))
				.collect();
			let _ = writeln!(out, "   {}", badges.join(" "));
		}
		let _ = writeln!(out, "   {}", card.description);
		let meta: Vec<&str> = [&card.duration, &card.adaptive, &card.remote]
			.into_iter()
			.filter_map(|value| value.as_deref())
			.collect();
		if !meta.is_empty() {
			let _ = writeln!(out, "   {}", meta.join(" · "));
		}
		if let Some(link) = &card.link {
			let _ = writeln!(out, "   {VIEW_DETAILS_LABEL} {link}");
		}
	}
	out
}

/// Print the status reported by the health endpoint.
pub(crate) fn print_health(format: OutputFormat, health: &HealthStatus) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", health.status),
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(health)?),
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use assessment_finder::AssessmentRecord;
	use assessment_finder::controller::RequestState;
	use assessment_finder::present::present;
	use serde_json::Value;

	use super::*;

	#[test]
	fn plain_outcome_prints_selected_url() {
		let outcome = SearchOutcome {
			accepted: true,
			query: "java".into(),
			selection: Some(AssessmentRecord::new("Java Coding Test", "https://x")),
		};
		assert_eq!(format_outcome_plain(&outcome), "https://x");
	}

	#[test]
	fn cancelled_outcome_mentions_query() {
		let outcome = SearchOutcome {
			accepted: false,
			query: "java".into(),
			selection: None,
		};
		assert_eq!(format_outcome_plain(&outcome), "Search cancelled (query: 'java')");
	}

	#[test]
	fn json_outcome_includes_selection_fields() {
		let outcome = SearchOutcome {
			accepted: true,
			query: "java".into(),
			selection: Some(AssessmentRecord::new("Java Coding Test", "https://x").with_duration(40.0)),
		};
		let json = serde_json::to_string_pretty(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");

		assert_eq!(value["accepted"], true);
		assert_eq!(value["selection"]["url"], "https://x");
		assert_eq!(value["selection"]["duration"], 40.0);
	}

	#[test]
	fn plain_presentation_lists_cards() {
		let records = vec![
			AssessmentRecord::new("Java Coding Test", "https://x")
				.with_test_types(["Knowledge & Skills"])
				.with_duration(40.0)
				.with_remote_support("Yes"),
			AssessmentRecord::new("OPQ", ""),
		];
		let presentation = present(&RequestState::Success(records));

		insta::assert_snapshot!(format_presentation_plain(&presentation), @r"
		Showing 2 assessments

		1. Java Coding Test
		   [Knowledge & Skills]
		   No description available.
		   40 mins · Remote: Yes
		   View Details → https://x

		2. OPQ
		   No description available.
		");
	}

	#[test]
	fn empty_presentation_prints_empty_title() {
		let presentation = present(&RequestState::Success(Vec::new()));
		assert_eq!(format_presentation_plain(&presentation), format!("{EMPTY_TITLE}\n"));
	}
}
