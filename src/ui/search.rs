use std::sync::mpsc::TryRecvError;

use tracing::debug;

use super::App;
use crate::systems::search::SearchResponse;

impl<'a> App<'a> {
	/// Submit the current query text if the trigger allows it.
	pub(crate) fn request_search(&mut self) {
		if !self.trigger().is_enabled() {
			debug!(trigger = ?self.trigger(), "submission ignored");
			return;
		}

		let Some(pending) = self.controller.submit(self.search_input.text()) else {
			return;
		};
		self.list_state.select(None);
		self.search.dispatch(pending);
	}

	/// Drain any search responses waiting on the receiver channel.
	pub(crate) fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(response) => self.handle_search_response(response),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a response if it answers the most recent submission.
	fn handle_search_response(&mut self, response: SearchResponse) {
		let SearchResponse { token, outcome } = response;
		if self.controller.resolve(token, outcome) {
			self.ensure_selection();
		}
	}
}
