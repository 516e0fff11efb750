//! Map free-text category labels onto the closed set of display tags.
//!
//! Labels are matched case-insensitively against an ordered rule table; the
//! first rule with a matching keyword decides the tag. Adding a category means
//! adding a row to [`RULES`].

use serde::Serialize;

/// Display category for a single `test_type` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayTag {
	Knowledge,
	Personality,
	Ability,
	Unclassified,
}

impl DisplayTag {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Knowledge => "knowledge",
			Self::Personality => "personality",
			Self::Ability => "ability",
			Self::Unclassified => "unclassified",
		}
	}
}

struct ClassificationRule {
	keywords: &'static [&'static str],
	tag: DisplayTag,
}

impl ClassificationRule {
	fn matches(&self, lowered: &str) -> bool {
		self.keywords.iter().any(|keyword| lowered.contains(keyword))
	}
}

const RULES: &[ClassificationRule] = &[
	ClassificationRule {
		keywords: &["knowledge", "skill"],
		tag: DisplayTag::Knowledge,
	},
	ClassificationRule {
		keywords: &["personality", "behavior"],
		tag: DisplayTag::Personality,
	},
	ClassificationRule {
		keywords: &["ability", "aptitude"],
		tag: DisplayTag::Ability,
	},
];

/// Classify one label. Only ASCII letters are case-folded.
#[must_use]
pub fn classify(label: &str) -> DisplayTag {
	let lowered = label.to_ascii_lowercase();
	RULES
		.iter()
		.find(|rule| rule.matches(&lowered))
		.map_or(DisplayTag::Unclassified, |rule| rule.tag)
}

/// A label paired with the tag it classified to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLabel {
	pub label: String,
	pub tag: DisplayTag,
}

/// Classify every label independently, preserving input order.
#[must_use]
pub fn classify_labels(labels: &[String]) -> Vec<ClassifiedLabel> {
	labels
		.iter()
		.map(|label| ClassifiedLabel {
			label: label.clone(),
			tag: classify(label),
		})
		.collect()
}
