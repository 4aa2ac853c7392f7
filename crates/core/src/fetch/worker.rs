use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use serde_json::Value;

use super::Fetcher;
use crate::error::FetchError;
use crate::source::RequestDescriptor;

#[derive(Debug)]
pub(crate) enum RequestCommand {
	Fetch {
		id: u64,
		request: RequestDescriptor,
	},
	Shutdown,
}

#[derive(Debug)]
pub(crate) struct RequestResponse {
	pub(crate) id: u64,
	pub(crate) url: String,
	pub(crate) outcome: Result<Value, FetchError>,
}

/// Launch the request worker thread and return its channels.
pub(crate) fn spawn(
	fetcher: Arc<dyn Fetcher>,
) -> (
	Sender<RequestCommand>,
	Receiver<RequestResponse>,
	Arc<AtomicU64>,
) {
	let (command_tx, command_rx) = mpsc::channel();
	let (response_tx, response_rx) = mpsc::channel();
	let latest_request_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_request_id);

	thread::spawn(move || worker_loop(fetcher.as_ref(), command_rx, response_tx, thread_latest));

	(command_tx, response_rx, latest_request_id)
}

fn worker_loop(
	fetcher: &dyn Fetcher,
	command_rx: Receiver<RequestCommand>,
	response_tx: Sender<RequestResponse>,
	latest_request_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(fetcher, &response_tx, &latest_request_id, command) {
			break;
		}
	}
}

fn handle_command(
	fetcher: &dyn Fetcher,
	response_tx: &Sender<RequestResponse>,
	latest_request_id: &AtomicU64,
	command: RequestCommand,
) -> bool {
	match command {
		RequestCommand::Fetch { id, request } => {
			// A newer dispatch is already queued behind this one.
			if should_skip(id, latest_request_id) {
				log::debug!("skipping superseded request {id} to {}", request.url);
				return true;
			}
			let outcome = fetcher.fetch(&request);
			response_tx
				.send(RequestResponse {
					id,
					url: request.url,
					outcome,
				})
				.is_ok()
		}
		RequestCommand::Shutdown => false,
	}
}

fn should_skip(id: u64, latest_request_id: &AtomicU64) -> bool {
	latest_request_id.load(AtomicOrdering::Acquire) != id
}
