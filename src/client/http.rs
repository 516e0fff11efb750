use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use super::{ClientError, HealthStatus, RecommendRequest, RecommendResponse, RecommendationClient};
use crate::types::SearchQuery;

/// Hosted recommendation service used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://shl-assessment-recommendation-system-bz51.onrender.com";

const RECOMMEND_PATH: &str = "/recommend";
const HEALTH_PATH: &str = "/health";

/// Error body shape used by the service. `detail` is only trusted when it is
/// a plain string; validation errors report structured lists instead.
#[derive(Debug, Deserialize)]
struct ErrorBody {
	#[serde(default)]
	detail: Option<serde_json::Value>,
}

/// Blocking HTTP client for the recommendation service.
#[derive(Debug, Clone)]
pub struct HttpRecommendationClient {
	client: Client,
	endpoint: String,
}

impl HttpRecommendationClient {
	/// Build a client for `endpoint`. `timeout` bounds each whole request.
	pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
		let client = Client::builder().timeout(timeout).build()?;
		let endpoint = endpoint.into().trim_end_matches('/').to_string();
		Ok(Self { client, endpoint })
	}

	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Query the service health endpoint.
	pub fn health(&self) -> Result<HealthStatus, ClientError> {
		let response = self.client.get(self.url(HEALTH_PATH)).send()?;
		let status = response.status();
		let body = response.bytes()?;
		if !status.is_success() {
			return Err(error_from_body(status, &body));
		}
		Ok(serde_json::from_slice(&body)?)
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.endpoint, path)
	}
}

impl RecommendationClient for HttpRecommendationClient {
	fn recommend(&self, query: &SearchQuery) -> Result<RecommendResponse, ClientError> {
		let url = self.url(RECOMMEND_PATH);
		debug!(%url, query = %query, "requesting recommendations");

		let response = self
			.client
			.post(&url)
			.json(&RecommendRequest {
				query: query.as_str(),
			})
			.send()?;
		let status = response.status();
		let body = response.bytes()?;

		if !status.is_success() {
			return Err(error_from_body(status, &body));
		}

		let decoded: RecommendResponse = serde_json::from_slice(&body)?;
		debug!(
			count = decoded
				.recommended_assessments
				.as_ref()
				.map_or(0, Vec::len),
			"recommendations received"
		);
		Ok(decoded)
	}
}

fn error_from_body(status: StatusCode, body: &[u8]) -> ClientError {
	let status = status.as_u16();
	let detail = serde_json::from_slice::<ErrorBody>(body)
		.ok()
		.and_then(|parsed| match parsed.detail {
			Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => Some(detail),
			_ => None,
		});

	match detail {
		Some(detail) => ClientError::Service { status, detail },
		None => ClientError::Status { status },
	}
}
