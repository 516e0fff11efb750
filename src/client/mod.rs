//! Boundary to the remote recommendation service.
//!
//! The rest of the crate only sees [`RecommendationClient`]; the HTTP
//! implementation lives in [`http`] and tests provide in-memory fakes.

mod error;
mod http;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use error::ClientError;
pub use http::{DEFAULT_ENDPOINT, HttpRecommendationClient};

use crate::types::{AssessmentRecord, SearchQuery, SearchResult};

/// Issue a single recommendation request.
///
/// Implementations block until the service answers or fails; callers that need
/// to stay responsive run them on the search worker thread.
pub trait RecommendationClient: Send + Sync {
	fn recommend(&self, query: &SearchQuery) -> Result<RecommendResponse, ClientError>;
}

impl<T: RecommendationClient + ?Sized> RecommendationClient for Arc<T> {
	fn recommend(&self, query: &SearchQuery) -> Result<RecommendResponse, ClientError> {
		(**self).recommend(query)
	}
}

impl<T: RecommendationClient + ?Sized> RecommendationClient for Box<T> {
	fn recommend(&self, query: &SearchQuery) -> Result<RecommendResponse, ClientError> {
		(**self).recommend(query)
	}
}

/// Body sent to the recommendation endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct RecommendRequest<'a> {
	pub query: &'a str,
}

/// Successful response body. A missing or `null` list means no matches.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecommendResponse {
	#[serde(default)]
	pub recommended_assessments: Option<Vec<AssessmentRecord>>,
}

impl RecommendResponse {
	#[must_use]
	pub fn new(records: Vec<AssessmentRecord>) -> Self {
		Self {
			recommended_assessments: Some(records),
		}
	}

	#[must_use]
	pub fn into_records(self) -> SearchResult {
		self.recommended_assessments.unwrap_or_default()
	}
}

/// Body returned by the service health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
	pub status: String,
}
