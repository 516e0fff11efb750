//! Search request lifecycle.
//!
//! [`SearchController`] owns the single [`RequestState`] cell. Every accepted
//! submission is stamped with a fresh [`RequestToken`]; only the response for
//! the most recently issued token may change the state, so a slow earlier
//! request can never overwrite the outcome of a later one.

use std::fmt;

use tracing::{debug, warn};

use crate::client::{ClientError, RecommendResponse, RecommendationClient};
use crate::types::{SearchQuery, SearchResult};

/// Message shown when the service gives no explanation of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to fetch recommendations. Please try again.";

/// Current phase of the search lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
	#[default]
	Idle,
	Loading,
	Success(SearchResult),
	Error(String),
}

impl RequestState {
	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	#[must_use]
	pub fn records(&self) -> Option<&SearchResult> {
		match self {
			Self::Success(records) => Some(records),
			_ => None,
		}
	}

	#[must_use]
	pub fn error_message(&self) -> Option<&str> {
		match self {
			Self::Error(message) => Some(message),
			_ => None,
		}
	}
}

/// Identity of one accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
	#[must_use]
	pub fn value(self) -> u64 {
		self.0
	}
}

impl fmt::Display for RequestToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A submission that was accepted and still needs a collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
	pub token: RequestToken,
	pub query: SearchQuery,
}

/// Explicit owner of the search [`RequestState`].
#[derive(Debug, Default)]
pub struct SearchController {
	state: RequestState,
	issued: u64,
}

impl SearchController {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn state(&self) -> &RequestState {
		&self.state
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.state.is_loading()
	}

	/// Token of the latest accepted submission, if any.
	#[must_use]
	pub fn latest_token(&self) -> Option<RequestToken> {
		(self.issued > 0).then_some(RequestToken(self.issued))
	}

	/// Accept `raw` as a new submission.
	///
	/// Blank input is ignored and returns `None` without touching the state.
	pub fn submit(&mut self, raw: &str) -> Option<PendingSearch> {
		let query = SearchQuery::parse(raw)?;
		self.issued = self.issued.saturating_add(1);
		let token = RequestToken(self.issued);
		self.state = RequestState::Loading;
		debug!(%token, query = %query, "search submitted");
		Some(PendingSearch { token, query })
	}

	/// Apply the collaborator outcome for `token`.
	///
	/// Returns `false` and leaves the state alone when `token` is not the
	/// latest issued one. Errors are logged and folded into
	/// [`RequestState::Error`]; they never reach the caller.
	pub fn resolve(
		&mut self,
		token: RequestToken,
		outcome: Result<RecommendResponse, ClientError>,
	) -> bool {
		if self.latest_token() != Some(token) {
			debug!(%token, latest = ?self.latest_token(), "discarding stale search response");
			return false;
		}

		self.state = match outcome {
			Ok(response) => {
				let records = response.into_records();
				debug!(%token, count = records.len(), "search succeeded");
				RequestState::Success(records)
			}
			Err(error) => {
				warn!(%token, %error, "search failed");
				let message = error.detail().unwrap_or(GENERIC_ERROR_MESSAGE);
				RequestState::Error(message.to_string())
			}
		};
		true
	}

	/// Submit `raw` and resolve it synchronously against `client`.
	///
	/// Returns the token that was issued, or `None` for blank input.
	pub fn run<C>(&mut self, client: &C, raw: &str) -> Option<RequestToken>
	where
		C: RecommendationClient + ?Sized,
	{
		let PendingSearch { token, query } = self.submit(raw)?;
		let outcome = client.recommend(&query);
		self.resolve(token, outcome);
		Some(token)
	}
}
