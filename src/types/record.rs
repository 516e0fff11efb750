use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Ordered recommendations for one query, as returned by the service.
pub type SearchResult = Vec<AssessmentRecord>;

/// A single recommended assessment.
///
/// Field names follow the recommendation service's wire format. Optional
/// fields tolerate a missing key, an explicit `null` or a value of the wrong
/// shape, so one odd record never fails the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
	pub name: String,
	#[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, deserialize_with = "lenient_labels")]
	pub test_type: Vec<String>,
	#[serde(
		rename = "duration",
		default,
		deserialize_with = "lenient_minutes",
		skip_serializing_if = "Option::is_none"
	)]
	pub duration_minutes: Option<f64>,
	#[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
	pub adaptive_support: Option<String>,
	#[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
	pub remote_support: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub url: String,
}

impl AssessmentRecord {
	/// Create a record with only a name and link; everything else is absent.
	#[must_use]
	pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			description: None,
			test_type: Vec::new(),
			duration_minutes: None,
			adaptive_support: None,
			remote_support: None,
			url: url.into(),
		}
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	#[must_use]
	pub fn with_test_types<I, S>(mut self, labels: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.test_type = labels.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_duration(mut self, minutes: f64) -> Self {
		self.duration_minutes = Some(minutes);
		self
	}

	#[must_use]
	pub fn with_adaptive_support(mut self, value: impl Into<String>) -> Self {
		self.adaptive_support = Some(value.into());
		self
	}

	#[must_use]
	pub fn with_remote_support(mut self, value: impl Into<String>) -> Self {
		self.remote_support = Some(value.into());
		self
	}

	/// Duration worth showing, i.e. strictly positive.
	#[must_use]
	pub fn visible_duration(&self) -> Option<f64> {
		self.duration_minutes
			.filter(|minutes| minutes.is_finite() && *minutes > 0.0)
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keep string labels; drop `null`s and other non-string entries.
fn lenient_labels<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Option::<Value>::deserialize(deserializer)? {
		Some(Value::Array(items)) => items
			.into_iter()
			.filter_map(|item| match item {
				Value::String(label) => Some(label),
				_ => None,
			})
			.collect(),
		Some(Value::String(label)) => vec![label],
		_ => Vec::new(),
	})
}

/// Accept numbers and numeric strings; anything else is absent.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Option::<Value>::deserialize(deserializer)? {
		Some(Value::Number(number)) => number.as_f64(),
		Some(Value::String(text)) => text.trim().parse().ok(),
		_ => None,
	})
}

/// Strings pass through, scalars are stringified, containers are dropped.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Option::<Value>::deserialize(deserializer)? {
		Some(Value::String(text)) => Some(text),
		Some(Value::Number(number)) => Some(number.to_string()),
		Some(Value::Bool(flag)) => Some(if flag { "Yes" } else { "No" }.to_string()),
		_ => None,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_full_wire_record() {
		let json = r#"{
			"name": "Java Coding Test",
			"description": "Measures Java skills",
			"test_type": ["Knowledge & Skills"],
			"duration": 40,
			"adaptive_support": "No",
			"remote_support": "Yes",
			"url": "https://x"
		}"#;

		let record: AssessmentRecord = serde_json::from_str(json).expect("decode");
		assert_eq!(record.name, "Java Coding Test");
		assert_eq!(record.test_type, vec!["Knowledge & Skills"]);
		assert_eq!(record.duration_minutes, Some(40.0));
		assert_eq!(record.remote_support.as_deref(), Some("Yes"));
		assert_eq!(record.url, "https://x");
	}

	#[test]
	fn missing_and_null_optionals_decode_as_absent() {
		let json = r#"{"name": "OPQ", "test_type": null, "description": null, "url": "https://y"}"#;

		let record: AssessmentRecord = serde_json::from_str(json).expect("decode");
		assert!(record.test_type.is_empty());
		assert!(record.description.is_none());
		assert!(record.duration_minutes.is_none());
		assert!(record.adaptive_support.is_none());
	}

	#[test]
	fn zero_or_negative_duration_is_not_visible() {
		let zero = AssessmentRecord::new("a", "u").with_duration(0.0);
		let negative = AssessmentRecord::new("a", "u").with_duration(-5.0);
		let positive = AssessmentRecord::new("a", "u").with_duration(12.0);

		assert_eq!(zero.visible_duration(), None);
		assert_eq!(negative.visible_duration(), None);
		assert_eq!(positive.visible_duration(), Some(12.0));
	}

	#[test]
	fn malformed_optional_fields_degrade_instead_of_failing() {
		let json = r#"{
			"name": "Verify G+",
			"test_type": ["Skill", null, 7],
			"duration": "40",
			"adaptive_support": true,
			"remote_support": {"value": "Yes"},
			"url": "https://v"
		}"#;

		let record: AssessmentRecord = serde_json::from_str(json).expect("decode");
		assert_eq!(record.test_type, vec!["Skill"]);
		assert_eq!(record.duration_minutes, Some(40.0));
		assert_eq!(record.adaptive_support.as_deref(), Some("Yes"));
		assert!(record.remote_support.is_none());
	}

	#[test]
	fn unparseable_duration_is_absent() {
		let json = r#"{"name": "OPQ", "duration": "about an hour", "url": "https://o"}"#;
		let record: AssessmentRecord = serde_json::from_str(json).expect("decode");
		assert!(record.duration_minutes.is_none());
	}
}
