use serde::Serialize;

use super::AssessmentRecord;

/// Result returned when the interactive finder exits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
	/// `true` when the user accepted a card, `false` when they cancelled.
	pub accepted: bool,
	/// Raw text in the query input at exit.
	pub query: String,
	/// Card the user chose to view, if any.
	pub selection: Option<AssessmentRecord>,
}
