use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use super::Fetcher;
use super::worker::{self, RequestCommand, RequestResponse};
use crate::error::FetchError;
use crate::source::RequestDescriptor;

/// Controller-side handle on the request worker.
///
/// Every dispatch gets a fresh id; only the response carrying the newest id is
/// applied, so a slow response for an older query can never overwrite the
/// results of a newer one.
pub(crate) struct RequestRuntime {
	tx: Sender<RequestCommand>,
	rx: Receiver<RequestResponse>,
	latest_request_id: Arc<AtomicU64>,
	next_request_id: u64,
	current_request_id: Option<u64>,
	in_flight: bool,
}

impl RequestRuntime {
	pub(crate) fn spawn(fetcher: Arc<dyn Fetcher>) -> Self {
		let (tx, rx, latest_request_id) = worker::spawn(fetcher);
		Self {
			tx,
			rx,
			latest_request_id,
			next_request_id: 0,
			current_request_id: None,
			in_flight: false,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(RequestCommand::Shutdown);
	}

	pub(crate) fn issue(&mut self, request: RequestDescriptor) -> Result<u64, FetchError> {
		self.next_request_id = self.next_request_id.saturating_add(1);
		let id = self.next_request_id;
		self.current_request_id = Some(id);
		self.latest_request_id.store(id, AtomicOrdering::Release);
		match self.tx.send(RequestCommand::Fetch { id, request }) {
			Ok(()) => {
				self.in_flight = true;
				Ok(id)
			}
			Err(_) => {
				self.in_flight = false;
				Err(FetchError::Disconnected)
			}
		}
	}

	/// Forget the outstanding request so its response is dropped on arrival.
	pub(crate) fn invalidate(&mut self) {
		self.current_request_id = None;
		self.in_flight = false;
		self.latest_request_id.store(0, AtomicOrdering::Release);
	}

	pub(crate) fn matches_latest(&self, response_id: u64) -> bool {
		Some(response_id) == self.current_request_id
	}

	pub(crate) fn record_completion(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn try_recv(&self) -> Result<RequestResponse, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn recv_timeout(&self, timeout: Duration) -> Result<RequestResponse, RecvTimeoutError> {
		self.rx.recv_timeout(timeout)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use serde_json::{Value, json};

	use super::*;

	fn echo_runtime() -> RequestRuntime {
		RequestRuntime::spawn(Arc::new(
			|request: &RequestDescriptor| -> Result<Value, FetchError> { Ok(json!(request.url)) },
		))
	}

	#[test]
	fn ids_increase_and_only_latest_matches() {
		let mut runtime = echo_runtime();
		let first = runtime
			.issue(RequestDescriptor::new("a", &BTreeMap::new()))
			.unwrap();
		let second = runtime
			.issue(RequestDescriptor::new("b", &BTreeMap::new()))
			.unwrap();

		assert!(second > first);
		assert!(!runtime.matches_latest(first));
		assert!(runtime.matches_latest(second));
		assert!(runtime.is_in_flight());

		// The worker may answer `first` before it sees `second`.
		let response = loop {
			let response = runtime.recv_timeout(Duration::from_secs(5)).unwrap();
			if runtime.matches_latest(response.id) {
				break response;
			}
		};
		assert_eq!(response.id, second);
		assert_eq!(response.outcome.unwrap(), json!("b"));
		runtime.record_completion();
		assert!(!runtime.is_in_flight());
		runtime.shutdown();
	}

	#[test]
	fn invalidate_rejects_outstanding_response() {
		let mut runtime = echo_runtime();
		let id = runtime
			.issue(RequestDescriptor::new("a", &BTreeMap::new()))
			.unwrap();
		runtime.invalidate();
		assert!(!runtime.matches_latest(id));
		assert!(!runtime.is_in_flight());
		runtime.shutdown();
	}

	#[test]
	fn issuing_after_shutdown_reports_disconnect() {
		let mut runtime = echo_runtime();
		runtime.shutdown();
		// The worker exits on its own schedule; keep issuing until the channel closes.
		let mut result = Ok(0);
		for _ in 0..100 {
			result = runtime.issue(RequestDescriptor::new("a", &BTreeMap::new()));
			if result.is_err() {
				break;
			}
			std::thread::sleep(Duration::from_millis(10));
		}
		assert!(matches!(result, Err(FetchError::Disconnected)));
		assert!(!runtime.is_in_flight());
	}
}
