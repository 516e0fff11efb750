use thiserror::Error;

/// Failures raised at the recommendation client boundary.
#[derive(Debug, Error)]
pub enum ClientError {
	/// The service answered with an error and explained why.
	#[error("recommendation service returned HTTP {status}: {detail}")]
	Service { status: u16, detail: String },

	/// The service answered with an error status but no usable explanation.
	#[error("recommendation service returned HTTP {status}")]
	Status { status: u16 },

	/// The request never produced a response.
	#[error("request to recommendation service failed: {0}")]
	Http(#[from] reqwest::Error),

	/// The response body could not be decoded.
	#[error("failed to decode recommendation response: {0}")]
	Decode(#[from] serde_json::Error),
}

impl ClientError {
	/// The service-provided explanation, when there is one.
	#[must_use]
	pub fn detail(&self) -> Option<&str> {
		match self {
			Self::Service { detail, .. } => Some(detail),
			_ => None,
		}
	}
}
