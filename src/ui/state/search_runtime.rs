use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tracing::warn;

use crate::controller::PendingSearch;
use crate::systems::search::{SearchCommand, SearchResponse};

/// Channel endpoints connecting the UI to the background search worker.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResponse>,
}

impl SearchRuntime {
	pub(crate) fn new(tx: Sender<SearchCommand>, rx: Receiver<SearchResponse>) -> Self {
		Self { tx, rx }
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	/// Hand an accepted submission to the worker.
	pub(crate) fn dispatch(&self, pending: PendingSearch) {
		if self.tx.send(SearchCommand::Query(pending)).is_err() {
			warn!("search worker is gone; submission dropped");
		}
	}

	pub(crate) fn try_recv(&mut self) -> Result<SearchResponse, TryRecvError> {
		self.rx.try_recv()
	}
}
