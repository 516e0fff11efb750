use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::debug;

use super::commands::{SearchCommand, SearchResponse};
use crate::client::RecommendationClient;

/// Launches the background search worker thread and returns communication channels.
pub(crate) fn spawn(
	client: Arc<dyn RecommendationClient>,
) -> (Sender<SearchCommand>, Receiver<SearchResponse>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();

	thread::spawn(move || worker_loop(client.as_ref(), command_rx, result_tx));

	(command_tx, result_rx)
}

fn worker_loop(
	client: &dyn RecommendationClient,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResponse>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(client, &result_tx, command) {
			break;
		}
	}
	debug!("search worker stopped");
}

fn handle_command(
	client: &dyn RecommendationClient,
	result_tx: &Sender<SearchResponse>,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query(pending) => {
			let outcome = client.recommend(&pending.query);
			result_tx
				.send(SearchResponse {
					token: pending.token,
					outcome,
				})
				.is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}
