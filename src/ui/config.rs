/// Default heading shown above the query input.
pub const DEFAULT_TITLE: &str = "Assessment Intelligence";
pub const DEFAULT_SUBTITLE: &str = "AI-Powered Assessment Discovery • Semantic Search Engine";
pub const DEFAULT_PLACEHOLDER: &str = "Describe the role or requirement (e.g., 'Java developer with strong collaboration skills')...";

/// Text used by the UI for its fixed chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	pub title: String,
	pub subtitle: String,
	pub placeholder: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			subtitle: DEFAULT_SUBTITLE.to_string(),
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the heading, keeping the other labels.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}
