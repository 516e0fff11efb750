use crate::client::{ClientError, RecommendResponse};
use crate::controller::PendingSearch;
use crate::controller::RequestToken;

/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	/// Ask the recommendation service about an accepted submission.
	Query(PendingSearch),
	/// Stop the background worker thread.
	Shutdown,
}

/// Collaborator outcome tagged with the submission it answers.
#[derive(Debug)]
pub(crate) struct SearchResponse {
	/// Lets the controller discard answers to superseded submissions.
	pub token: RequestToken,
	pub outcome: Result<RecommendResponse, ClientError>,
}
