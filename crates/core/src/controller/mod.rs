//! The search-and-selection controller.
//!
//! [`Autocomplete`] owns the query, the open results list, the highlighted
//! cursor and the committed value/display pair. All entry points run on the
//! host's single event loop; remote responses and pointer-downs arrive through
//! channels and are applied when the host calls [`Autocomplete::pump`].

mod interaction;
mod search;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::DEFAULT_NO_RESULTS_TEXT;
use crate::debounce::{Clock, DEBOUNCE_DELAY, DebounceTimer, SystemClock};
use crate::error::AutocompleteError;
use crate::events::{AutocompleteEvent, EventQueue};
use crate::fetch::{Fetcher, FileFetcher, RequestRuntime};
use crate::format::{ResultsDisplay, ResultsExtractor, format_display};
use crate::pointer::{PointerSubscription, Region};
use crate::selection::Cursor;
use crate::source::{RequestDescriptor, Source};

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Up,
	Down,
	Enter,
	Escape,
}

/// Coarse state of the results area, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsStatus<'a> {
	/// No search has produced a list.
	Unsearched,
	/// The newest remote request has not answered yet.
	Loading,
	/// The newest remote request failed.
	Failed(&'a str),
	/// A search completed with zero matches.
	Empty,
	/// A search completed with this many matches.
	Found(usize),
}

/// Builder for [`Autocomplete`].
pub struct AutocompleteBuilder {
	source: Source,
	extractor: ResultsExtractor,
	display: ResultsDisplay,
	request_headers: BTreeMap<String, String>,
	initial_display: Option<String>,
	initial_value: Option<Value>,
	no_results_text: String,
	fetcher: Arc<dyn Fetcher>,
	clock: Arc<dyn Clock>,
}

impl AutocompleteBuilder {
	fn new(source: Source) -> Self {
		Self {
			source,
			extractor: ResultsExtractor::default(),
			display: ResultsDisplay::default(),
			request_headers: BTreeMap::new(),
			initial_display: None,
			initial_value: None,
			no_results_text: DEFAULT_NO_RESULTS_TEXT.to_string(),
			fetcher: Arc::new(FileFetcher::new()),
			clock: Arc::new(SystemClock),
		}
	}

	pub fn with_results_property(mut self, property: impl Into<String>) -> Self {
		self.extractor = self.extractor.with_property(property);
		self
	}

	pub fn with_results_formatter<F>(mut self, formatter: F) -> Self
	where
		F: Fn(&Value) -> Vec<Value> + Send + Sync + 'static,
	{
		self.extractor = self.extractor.with_formatter(formatter);
		self
	}

	pub fn with_results_extractor(mut self, extractor: ResultsExtractor) -> Self {
		self.extractor = extractor;
		self
	}

	pub fn with_results_display(mut self, display: ResultsDisplay) -> Self {
		self.display = display;
		self
	}

	pub fn with_request_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.request_headers.insert(name.into(), value.into());
		self
	}

	pub fn with_request_headers(mut self, headers: BTreeMap<String, String>) -> Self {
		self.request_headers.extend(headers);
		self
	}

	pub fn with_initial_display(mut self, display: impl Into<String>) -> Self {
		self.initial_display = Some(display.into());
		self
	}

	pub fn with_initial_value(mut self, value: impl Into<Value>) -> Self {
		self.initial_value = Some(value.into());
		self
	}

	pub fn with_no_results_text(mut self, text: impl Into<String>) -> Self {
		self.no_results_text = text.into();
		self
	}

	pub fn with_fetcher(mut self, fetcher: impl Fetcher) -> Self {
		self.fetcher = Arc::new(fetcher);
		self
	}

	pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
		self.clock = Arc::new(clock);
		self
	}

	pub fn build(self) -> Autocomplete {
		let Self {
			source,
			extractor,
			display,
			request_headers,
			initial_display,
			initial_value,
			no_results_text,
			fetcher,
			clock,
		} = self;

		Autocomplete {
			source,
			extractor,
			results_display: display,
			request_headers,
			no_results_text,
			fetcher,
			clock,
			query: initial_display.clone(),
			results: None,
			cursor: Cursor::default(),
			value: initial_value,
			display: initial_display.clone(),
			selected_display: initial_display,
			error: None,
			focussed: false,
			debounce: DebounceTimer::new(DEBOUNCE_DELAY),
			requests: None,
			listener: None,
			bounds: None,
			events: EventQueue::default(),
		}
	}
}

/// Debounced, cancelable search-and-select controller.
pub struct Autocomplete {
	source: Source,
	extractor: ResultsExtractor,
	results_display: ResultsDisplay,
	request_headers: BTreeMap<String, String>,
	no_results_text: String,
	fetcher: Arc<dyn Fetcher>,
	clock: Arc<dyn Clock>,

	query: Option<String>,
	results: Option<Vec<Value>>,
	cursor: Cursor,
	value: Option<Value>,
	display: Option<String>,
	selected_display: Option<String>,
	error: Option<String>,
	focussed: bool,

	debounce: DebounceTimer<RequestDescriptor>,
	requests: Option<RequestRuntime>,
	listener: Option<PointerSubscription>,
	bounds: Option<Region>,
	events: EventQueue,
}

impl Autocomplete {
	pub fn builder(source: impl Into<Source>) -> AutocompleteBuilder {
		AutocompleteBuilder::new(source.into())
	}

	pub fn new(source: impl Into<Source>) -> Self {
		Self::builder(source).build()
	}

	pub fn source(&self) -> &Source {
		&self.source
	}

	/// Replace the source. The next search resolves the new one.
	pub fn set_source(&mut self, source: impl Into<Source>) {
		self.source = source.into();
	}

	pub fn set_results_display(&mut self, display: ResultsDisplay) {
		self.results_display = display;
	}

	pub fn set_results_extractor(&mut self, extractor: ResultsExtractor) {
		self.extractor = extractor;
	}

	pub fn request_headers(&self) -> &BTreeMap<String, String> {
		&self.request_headers
	}

	/// Label for `item` under the configured display rule.
	pub fn format_display(&self, item: &Value) -> Result<String, AutocompleteError> {
		format_display(item, &self.results_display)
	}

	pub fn query(&self) -> Option<&str> {
		self.query.as_deref()
	}

	/// Update the query text without searching.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = Some(query.into());
	}

	pub fn results(&self) -> Option<&[Value]> {
		self.results.as_deref()
	}

	/// Replace the open results list, resetting the cursor.
	pub fn set_results(&mut self, results: Option<Vec<Value>>) {
		self.results = results;
		self.cursor.reset();
	}

	pub fn is_open(&self) -> bool {
		self.results.is_some()
	}

	pub fn selected_index(&self) -> Option<usize> {
		self.cursor.index()
	}

	pub fn highlighted(&self) -> Option<&Value> {
		let index = self.cursor.index()?;
		self.results.as_ref()?.get(index)
	}

	/// Identity of the committed item.
	pub fn value(&self) -> Option<&Value> {
		self.value.as_ref()
	}

	/// Label of the committed item.
	pub fn display(&self) -> Option<&str> {
		self.display.as_deref()
	}

	/// Label recorded by the last commit (or the seeded initial display).
	pub fn selected_display(&self) -> Option<&str> {
		self.selected_display.as_deref()
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn is_focussed(&self) -> bool {
		self.focussed
	}

	pub fn is_loading(&self) -> bool {
		self.requests
			.as_ref()
			.is_some_and(RequestRuntime::is_in_flight)
	}

	/// Whether a remote search is waiting out its quiet interval.
	pub fn has_pending_search(&self) -> bool {
		self.debounce.is_pending()
	}

	pub fn status(&self) -> ResultsStatus<'_> {
		if self.is_loading() {
			return ResultsStatus::Loading;
		}
		if let Some(error) = &self.error {
			return ResultsStatus::Failed(error);
		}
		match &self.results {
			None => ResultsStatus::Unsearched,
			Some(results) if results.is_empty() => ResultsStatus::Empty,
			Some(results) => ResultsStatus::Found(results.len()),
		}
	}

	/// Text for the empty state, shown only after a search found nothing.
	pub fn empty_state_text(&self) -> Option<&str> {
		match self.status() {
			ResultsStatus::Empty => Some(self.no_results_text.as_str()),
			_ => None,
		}
	}

	pub fn bounds(&self) -> Option<Region> {
		self.bounds
	}

	/// Record the widget's interactive area. Pointer-downs inside it never
	/// dismiss the list.
	pub fn set_bounds(&mut self, bounds: Region) {
		self.bounds = Some(bounds);
	}

	/// Drain raised notifications in order.
	pub fn take_events(&mut self) -> Vec<AutocompleteEvent> {
		self.events.drain()
	}

	pub fn events(&self) -> impl Iterator<Item = &AutocompleteEvent> {
		self.events.iter()
	}

	fn emit(&mut self, event: AutocompleteEvent) {
		self.events.push(event);
	}
}

impl Drop for Autocomplete {
	fn drop(&mut self) {
		self.teardown();
	}
}

#[cfg(test)]
mod tests;
