use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::Duration;

use serde_json::Value;

use super::Autocomplete;
use crate::error::{AutocompleteError, FetchError};
use crate::events::AutocompleteEvent;
use crate::fetch::{RequestResponse, RequestRuntime};
use crate::format::{ResultsDisplay, format_display};
use crate::source::{RequestDescriptor, ResolvedSource};

impl Autocomplete {
	/// Replace the query and search for it, as typing into the input does.
	pub fn input(&mut self, query: impl Into<String>) -> Result<(), AutocompleteError> {
		self.set_query(query);
		self.search()
	}

	/// Search for the current query.
	///
	/// Local sources are filtered before this returns. Remote sources arm the
	/// debounce timer; the request goes out from [`pump`](Self::pump) once the
	/// quiet interval passes. A blank query never reaches the network.
	pub fn search(&mut self) -> Result<(), AutocompleteError> {
		let query = self.query.clone().unwrap_or_default();
		if query.is_empty() && self.source.is_remote() {
			if self.debounce.cancel() {
				log::debug!("blank query cancelled pending remote search");
			}
			return Ok(());
		}

		let url = match self.source.resolve(&query)? {
			ResolvedSource::Local(items) => {
				let matches = filter_items(&items, &query, &self.results_display)?;
				drop(items);
				self.debounce.cancel();
				self.apply_results(matches);
				return Ok(());
			}
			ResolvedSource::Remote(url) => url,
		};

		let request = RequestDescriptor::new(url, &self.request_headers);
		let now = self.clock.now();
		if self.debounce.schedule(now, request) {
			log::trace!("superseded pending remote search");
		}
		Ok(())
	}

	/// Dispatch `request` immediately, bypassing the debounce timer.
	pub fn request(&mut self, request: RequestDescriptor) {
		let url = request.url.clone();
		let fetcher = &self.fetcher;
		let runtime = self
			.requests
			.get_or_insert_with(|| RequestRuntime::spawn(fetcher.clone()));
		match runtime.issue(request) {
			Ok(id) => log::debug!("dispatched request {id} to {url}"),
			Err(err) => {
				self.requests = None;
				self.fail(err.to_string());
			}
		}
	}

	/// Advance the controller: dispatch a due search, apply the newest remote
	/// response and handle pointer-downs received since the last call.
	pub fn pump(&mut self) {
		let now = self.clock.now();
		if let Some(request) = self.debounce.take_due(now) {
			self.request(request);
		}
		self.pump_responses();
		self.pump_pointer_events();
	}

	/// Time until the pending search is due, for hosts that sleep between
	/// pumps.
	pub fn next_deadline(&self) -> Option<Duration> {
		self.debounce.remaining(self.clock.now())
	}

	/// Block for at most `timeout` waiting for one remote response. Returns
	/// `true` only when a response was applied; stale responses are dropped
	/// and report `false`.
	pub fn wait_for_response(&mut self, timeout: Duration) -> bool {
		let Some(runtime) = &self.requests else {
			return false;
		};
		match runtime.recv_timeout(timeout) {
			Ok(response) => self.handle_response(response),
			Err(RecvTimeoutError::Timeout) => false,
			Err(RecvTimeoutError::Disconnected) => {
				self.worker_lost();
				false
			}
		}
	}

	fn pump_responses(&mut self) {
		loop {
			let Some(runtime) = &self.requests else {
				return;
			};
			match runtime.try_recv() {
				Ok(response) => {
					self.handle_response(response);
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					self.worker_lost();
					break;
				}
			}
		}
	}

	/// Apply a response if it answers the newest dispatch.
	fn handle_response(&mut self, response: RequestResponse) -> bool {
		let Some(runtime) = self.requests.as_mut() else {
			return false;
		};
		if !runtime.matches_latest(response.id) {
			log::debug!("dropping stale response {} from {}", response.id, response.url);
			return false;
		}
		runtime.record_completion();

		match response.outcome {
			Ok(raw) => {
				let results = self.extractor.extract(&raw);
				self.apply_results(results);
			}
			Err(err) => self.fail(err.to_string()),
		}
		true
	}

	/// The request worker exited, most likely because the fetcher panicked.
	/// The next dispatch spawns a fresh worker.
	fn worker_lost(&mut self) {
		let Some(runtime) = self.requests.take() else {
			return;
		};
		if runtime.is_in_flight() {
			self.fail(FetchError::Disconnected.to_string());
		} else {
			log::debug!("request worker exited while idle");
		}
	}

	pub(super) fn apply_results(&mut self, results: Vec<Value>) {
		let empty = results.is_empty();
		self.error = None;
		self.cursor.reset();
		self.results = Some(results.clone());
		self.emit(AutocompleteEvent::Results(results));
		if empty {
			self.emit(AutocompleteEvent::NoResults);
		}
	}

	/// Record a retrieval failure. Prior results stay as they were.
	fn fail(&mut self, reason: String) {
		log::warn!("remote search failed: {reason}");
		self.error = Some(reason.clone());
		self.emit(AutocompleteEvent::Error(reason));
	}

	/// Stop any pending or in-flight remote search from landing.
	pub(super) fn abandon_remote_search(&mut self) {
		self.debounce.cancel();
		if let Some(runtime) = self.requests.as_mut() {
			runtime.invalidate();
		}
	}
}

/// Items whose label contains `query`, case-sensitively. A blank query
/// matches everything.
fn filter_items(
	items: &[Value],
	query: &str,
	display: &ResultsDisplay,
) -> Result<Vec<Value>, AutocompleteError> {
	if query.is_empty() {
		return Ok(items.to_vec());
	}

	let mut matches = Vec::new();
	for item in items {
		if format_display(item, display)?.contains(query) {
			matches.push(item.clone());
		}
	}
	Ok(matches)
}
