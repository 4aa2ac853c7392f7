use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{Value, json};

use super::*;
use crate::debounce::ManualClock;
use crate::error::FetchError;
use crate::events::Selection;
use crate::pointer::{PointerBus, PointerEvent};

fn items() -> Vec<Value> {
	vec![
		json!({"id": 1, "name": "abc"}),
		json!({"id": 2, "name": "xabcx"}),
		json!({"id": 3, "name": "def"}),
	]
}

fn local() -> Autocomplete {
	Autocomplete::new(items())
}

fn names(results: Option<&[Value]>) -> Vec<&str> {
	results
		.unwrap_or_default()
		.iter()
		.filter_map(|item| item["name"].as_str())
		.collect()
}

/// Wait until the newest remote request has been applied.
fn settle(autocomplete: &mut Autocomplete) {
	for _ in 0..200 {
		autocomplete.pump();
		if !autocomplete.is_loading() {
			return;
		}
		autocomplete.wait_for_response(Duration::from_millis(25));
	}
	panic!("remote search never completed");
}

struct Recorder {
	calls: Arc<AtomicUsize>,
	requests: Arc<Mutex<Vec<RequestDescriptor>>>,
}

impl Recorder {
	fn new() -> Self {
		Self {
			calls: Arc::new(AtomicUsize::new(0)),
			requests: Arc::new(Mutex::new(Vec::new())),
		}
	}

	/// Fetcher that records each request and answers with `response(url)`.
	fn fetcher<F>(&self, response: F) -> impl Fetcher + use<F>
	where
		F: Fn(&str) -> Result<Value, FetchError> + Send + Sync + 'static,
	{
		let calls = Arc::clone(&self.calls);
		let requests = Arc::clone(&self.requests);
		move |request: &RequestDescriptor| -> Result<Value, FetchError> {
			calls.fetch_add(1, Ordering::SeqCst);
			requests.lock().unwrap().push(request.clone());
			response(&request.url)
		}
	}

	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	fn urls(&self) -> Vec<String> {
		self.requests
			.lock()
			.unwrap()
			.iter()
			.map(|request| request.url.clone())
			.collect()
	}
}

fn remote(recorder: &Recorder, clock: &ManualClock) -> Autocomplete {
	Autocomplete::builder(Source::url_builder(|query| format!("mem://search?q={query}")))
		.with_clock(clock.clone())
		.with_fetcher(recorder.fetcher(|url| Ok(json!([{ "id": url, "name": url }]))))
		.build()
}

#[test]
fn local_search_filters_by_substring() {
	let mut autocomplete = local();
	autocomplete.input("abc").unwrap();

	assert_eq!(names(autocomplete.results()), ["abc", "xabcx"]);
	assert!(autocomplete.is_open());
	let events = autocomplete.take_events();
	assert_eq!(events.len(), 1);
	assert_eq!(events[0].name(), "results");
}

#[test]
fn local_search_is_case_sensitive() {
	let mut autocomplete = local();
	autocomplete.input("ABC").unwrap();

	assert_eq!(autocomplete.results(), Some(&[][..]));
	assert_eq!(
		autocomplete.take_events(),
		vec![AutocompleteEvent::Results(Vec::new()), AutocompleteEvent::NoResults]
	);
	assert_eq!(autocomplete.empty_state_text(), Some("No Results."));
}

#[test]
fn blank_local_query_returns_everything() {
	let mut autocomplete = local();
	autocomplete.input("").unwrap();
	assert_eq!(names(autocomplete.results()), ["abc", "xabcx", "def"]);
}

#[test]
fn array_like_source_is_searched_like_a_collection() {
	let source = json!({
		"length": 3,
		"0": {"name": "apple"},
		"2": {"name": "apricot"},
	});
	let mut autocomplete = Autocomplete::new(source);
	autocomplete.input("ap").unwrap();
	assert_eq!(names(autocomplete.results()), ["apple", "apricot"]);
}

#[test]
fn unsupported_source_is_a_type_mismatch() {
	let mut autocomplete = Autocomplete::new(json!(42));
	let err = autocomplete.input("x").unwrap_err();
	assert!(matches!(
		err,
		AutocompleteError::TypeMismatch {
			option: "source",
			..
		}
	));
	assert!(autocomplete.take_events().is_empty());
}

#[test]
fn missing_display_field_is_reported() {
	let mut autocomplete = Autocomplete::new(vec![json!({"title": "x"})]);
	let err = autocomplete.input("x").unwrap_err();
	assert_eq!(
		err,
		AutocompleteError::MissingField {
			field: "name".to_string()
		}
	);
}

#[test]
fn custom_display_drives_filtering_and_labels() {
	let mut autocomplete = Autocomplete::builder(items())
		.with_results_display(ResultsDisplay::formatter(|item| {
			format!("#{}", item["id"])
		}))
		.build();
	autocomplete.input("#2").unwrap();
	assert_eq!(names(autocomplete.results()), ["xabcx"]);

	autocomplete.down();
	autocomplete.enter().unwrap();
	assert_eq!(autocomplete.display(), Some("#2"));
}

#[test]
fn remote_search_waits_for_quiet_interval() {
	let clock = ManualClock::new();
	let recorder = Recorder::new();
	let mut autocomplete = remote(&recorder, &clock);

	autocomplete.input("ab").unwrap();
	clock.advance(Duration::from_millis(499));
	autocomplete.pump();
	assert_eq!(recorder.calls(), 0);
	assert!(autocomplete.has_pending_search());
	assert_eq!(autocomplete.next_deadline(), Some(Duration::from_millis(1)));

	clock.advance(Duration::from_millis(1));
	settle(&mut autocomplete);
	assert_eq!(recorder.calls(), 1);
	assert_eq!(names(autocomplete.results()), ["mem://search?q=ab"]);
}

#[test]
fn rapid_edits_collapse_into_one_request() {
	let clock = ManualClock::new();
	let recorder = Recorder::new();
	let mut autocomplete = remote(&recorder, &clock);

	for query in ["a", "ab", "abc", "abcd"] {
		autocomplete.input(query).unwrap();
		clock.advance(Duration::from_millis(100));
		autocomplete.pump();
	}
	assert_eq!(recorder.calls(), 0);

	clock.advance(Duration::from_millis(500));
	settle(&mut autocomplete);
	assert_eq!(recorder.calls(), 1);
	assert_eq!(recorder.urls(), ["mem://search?q=abcd"]);
}

#[test]
fn blank_remote_query_never_requests() {
	let clock = ManualClock::new();
	let recorder = Recorder::new();
	let mut autocomplete = remote(&recorder, &clock);

	autocomplete.input("a").unwrap();
	autocomplete.input("").unwrap();
	assert!(!autocomplete.has_pending_search());

	clock.advance(Duration::from_secs(1));
	autocomplete.pump();
	assert_eq!(recorder.calls(), 0);
	assert!(!autocomplete.is_loading());
	assert_eq!(autocomplete.results(), None);
}

#[test]
fn blank_remote_query_skips_the_url_builder() {
	let built = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&built);
	let recorder = Recorder::new();
	let mut autocomplete = Autocomplete::builder(Source::url_builder(move |query| {
		counter.fetch_add(1, Ordering::SeqCst);
		format!("mem://{query}")
	}))
	.with_clock(ManualClock::new())
	.with_fetcher(recorder.fetcher(|_| Ok(json!([]))))
	.build();

	autocomplete.input("").unwrap();
	assert_eq!(built.load(Ordering::SeqCst), 0);

	autocomplete.input("a").unwrap();
	assert_eq!(built.load(Ordering::SeqCst), 1);
}

#[test]
fn remote_requests_always_accept_json() {
	let clock = ManualClock::new();
	let recorder = Recorder::new();
	let mut autocomplete = Autocomplete::builder(Source::url("mem://fixed"))
		.with_clock(clock.clone())
		.with_request_header("accept", "text/html")
		.with_request_header("X-Token", "secret")
		.with_fetcher(recorder.fetcher(|_| Ok(json!([]))))
		.build();

	autocomplete.input("q").unwrap();
	clock.advance(DEBOUNCE_DELAY);
	settle(&mut autocomplete);

	let requests = recorder.requests.lock().unwrap();
	assert_eq!(requests.len(), 1);
	assert_eq!(requests[0].header("Accept"), Some("application/json"));
	assert_eq!(requests[0].header("x-token"), Some("secret"));
	assert_eq!(requests[0].headers.len(), 2);
}

#[test]
fn empty_extracted_collection_raises_no_results() {
	let clock = ManualClock::new();
	let recorder = Recorder::new();
	let mut autocomplete = Autocomplete::builder(Source::url("mem://empty"))
		.with_clock(clock.clone())
		.with_results_property("data")
		.with_fetcher(recorder.fetcher(|_| Ok(json!({ "data": [] }))))
		.build();

	assert_eq!(autocomplete.empty_state_text(), None);
	autocomplete.input("zzz").unwrap();
	clock.advance(DEBOUNCE_DELAY);
	settle(&mut autocomplete);

	assert_eq!(autocomplete.results(), Some(&[][..]));
	assert_eq!(
		autocomplete.take_events(),
		vec![AutocompleteEvent::Results(Vec::new()), AutocompleteEvent::NoResults]
	);
	assert_eq!(autocomplete.status(), ResultsStatus::Empty);
	assert_eq!(autocomplete.empty_state_text(), Some(DEFAULT_NO_RESULTS_TEXT));
}

#[test]
fn results_formatter_shapes_remote_response() {
	let clock = ManualClock::new();
	let recorder = Recorder::new();
	let mut autocomplete = Autocomplete::builder(Source::url("mem://wrapped"))
		.with_clock(clock.clone())
		.with_results_formatter(|raw| {
			raw["hits"]
				.as_array()
				.map(|hits| hits.iter().map(|hit| json!({ "name": hit })).collect())
				.unwrap_or_default()
		})
		.with_fetcher(recorder.fetcher(|_| Ok(json!({ "hits": ["one", "two"] }))))
		.build();

	autocomplete.input("o").unwrap();
	clock.advance(DEBOUNCE_DELAY);
	settle(&mut autocomplete);
	assert_eq!(names(autocomplete.results()), ["one", "two"]);
}

#[test]
fn stale_response_is_dropped() {
	let clock = ManualClock::new();
	let (started_tx, started_rx) = mpsc::channel::<()>();
	let (gate_tx, gate_rx) = mpsc::channel::<()>();
	let gate_rx = Mutex::new(gate_rx);
	let started_tx = Mutex::new(started_tx);

	let fetcher = move |request: &RequestDescriptor| -> Result<Value, FetchError> {
		if request.url.ends_with("slow") {
			started_tx.lock().unwrap().send(()).unwrap();
			gate_rx.lock().unwrap().recv().unwrap();
		}
		Ok(json!([{ "name": request.url }]))
	};
	let mut autocomplete = Autocomplete::builder(Source::url_builder(|query| format!("mem://{query}")))
		.with_clock(clock.clone())
		.with_fetcher(fetcher)
		.build();

	autocomplete.input("slow").unwrap();
	clock.advance(DEBOUNCE_DELAY);
	autocomplete.pump();
	started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
	assert_eq!(autocomplete.status(), ResultsStatus::Loading);

	autocomplete.input("fast").unwrap();
	clock.advance(DEBOUNCE_DELAY);
	autocomplete.pump();
	gate_tx.send(()).unwrap();
	settle(&mut autocomplete);

	assert_eq!(names(autocomplete.results()), ["mem://fast"]);
	let results_events = autocomplete
		.take_events()
		.into_iter()
		.filter(|event| event.name() == "results")
		.count();
	assert_eq!(results_events, 1);
}

#[test]
fn waiting_on_a_stale_response_reports_nothing_applied() {
	let clock = ManualClock::new();
	let (started_tx, started_rx) = mpsc::channel::<()>();
	let (gate_tx, gate_rx) = mpsc::channel::<()>();
	let gate_rx = Mutex::new(gate_rx);
	let started_tx = Mutex::new(started_tx);

	let fetcher = move |request: &RequestDescriptor| -> Result<Value, FetchError> {
		if request.url.ends_with("slow") {
			started_tx.lock().unwrap().send(()).unwrap();
			gate_rx.lock().unwrap().recv().unwrap();
		}
		Ok(json!([{ "name": request.url }]))
	};
	let mut autocomplete = Autocomplete::builder(Source::url_builder(|query| format!("mem://{query}")))
		.with_clock(clock.clone())
		.with_fetcher(fetcher)
		.build();

	autocomplete.input("slow").unwrap();
	clock.advance(DEBOUNCE_DELAY);
	autocomplete.pump();
	started_rx.recv_timeout(Duration::from_secs(5)).unwrap();

	autocomplete.input("fast").unwrap();
	clock.advance(DEBOUNCE_DELAY);
	autocomplete.pump();
	gate_tx.send(()).unwrap();

	assert!(!autocomplete.wait_for_response(Duration::from_secs(5)));
	assert_eq!(autocomplete.results(), None);
	assert!(autocomplete.wait_for_response(Duration::from_secs(5)));
	assert_eq!(names(autocomplete.results()), ["mem://fast"]);
}

#[test]
fn panicking_fetcher_fails_the_search_instead_of_loading_forever() {
	let clock = ManualClock::new();
	let first = Arc::new(AtomicUsize::new(0));
	let fetcher = move |_: &RequestDescriptor| -> Result<Value, FetchError> {
		if first.fetch_add(1, Ordering::SeqCst) == 0 {
			panic!("fetcher blew up");
		}
		Ok(json!([{ "name": "recovered" }]))
	};
	let mut autocomplete = Autocomplete::builder(Source::url_builder(|query| format!("mem://{query}")))
		.with_clock(clock.clone())
		.with_fetcher(fetcher)
		.build();

	autocomplete.input("a").unwrap();
	clock.advance(DEBOUNCE_DELAY);
	settle(&mut autocomplete);

	assert!(!autocomplete.is_loading());
	assert_eq!(
		autocomplete.status(),
		ResultsStatus::Failed(&FetchError::Disconnected.to_string())
	);

	autocomplete.input("b").unwrap();
	clock.advance(DEBOUNCE_DELAY);
	settle(&mut autocomplete);
	assert_eq!(names(autocomplete.results()), ["recovered"]);
}

#[test]
fn fetch_failure_keeps_prior_results() {
	let clock = ManualClock::new();
	let recorder = Recorder::new();
	let mut autocomplete = Autocomplete::builder(Source::url_builder(|query| format!("mem://{query}")))
		.with_clock(clock.clone())
		.with_fetcher(recorder.fetcher(|url| {
			if url.ends_with("bad") {
				Err(FetchError::Status {
					url: url.to_string(),
					status: 500,
				})
			} else {
				Ok(json!([{ "name": "good" }]))
			}
		}))
		.build();

	autocomplete.input("good").unwrap();
	clock.advance(DEBOUNCE_DELAY);
	settle(&mut autocomplete);
	autocomplete.take_events();

	autocomplete.input("bad").unwrap();
	clock.advance(DEBOUNCE_DELAY);
	settle(&mut autocomplete);

	assert_eq!(names(autocomplete.results()), ["good"]);
	let error = autocomplete.error().unwrap();
	assert!(error.contains("500"), "unexpected error: {error}");
	assert!(matches!(autocomplete.status(), ResultsStatus::Failed(_)));
	let events = autocomplete.take_events();
	assert_eq!(events.len(), 1);
	assert_eq!(events[0].name(), "error");

	// A later success clears the error.
	autocomplete.input("good again").unwrap();
	clock.advance(DEBOUNCE_DELAY);
	settle(&mut autocomplete);
	assert_eq!(autocomplete.error(), None);
}

#[test]
fn down_wraps_around() {
	let mut autocomplete = local();
	autocomplete.input("").unwrap();

	let visited: Vec<_> = (0..5).map(|_| autocomplete.down()).collect();
	assert_eq!(visited, [Some(0), Some(1), Some(2), Some(0), Some(1)]);
}

#[test]
fn up_from_nothing_highlights_last() {
	let mut autocomplete = local();
	autocomplete.input("").unwrap();

	assert_eq!(autocomplete.up(), Some(2));
	assert_eq!(autocomplete.up(), Some(1));
	assert_eq!(autocomplete.highlighted().unwrap()["name"], "xabcx");
}

#[test]
fn navigation_without_results_is_a_no_op() {
	let mut autocomplete = local();
	assert_eq!(autocomplete.down(), None);
	assert_eq!(autocomplete.up(), None);

	autocomplete.input("nothing matches").unwrap();
	assert_eq!(autocomplete.down(), None);
	assert_eq!(autocomplete.selected_index(), None);
}

#[test]
fn new_results_reset_the_highlight() {
	let mut autocomplete = local();
	autocomplete.input("").unwrap();
	autocomplete.down();
	autocomplete.down();
	autocomplete.input("abc").unwrap();
	assert_eq!(autocomplete.selected_index(), None);
}

#[test]
fn select_commits_and_closes() {
	let mut autocomplete = local();
	autocomplete.input("ab").unwrap();
	autocomplete.take_events();

	let item = json!({"id": 2, "name": "xabcx"});
	assert!(autocomplete.select(Some(&item)).unwrap());

	assert_eq!(autocomplete.value(), Some(&json!(2)));
	assert_eq!(autocomplete.display(), Some("xabcx"));
	assert_eq!(autocomplete.selected_display(), Some("xabcx"));
	assert_eq!(autocomplete.query(), Some("xabcx"));
	assert!(!autocomplete.is_open());
	assert_eq!(
		autocomplete.take_events(),
		vec![AutocompleteEvent::Selected(Selection {
			value: Some(json!(2)),
			display: "xabcx".to_string(),
		})]
	);
}

#[test]
fn selecting_twice_raises_two_events() {
	let mut autocomplete = local();
	let item = json!({"id": 1, "name": "abc"});
	autocomplete.select(Some(&item)).unwrap();
	autocomplete.select(Some(&item)).unwrap();

	assert_eq!(autocomplete.value(), Some(&json!(1)));
	assert_eq!(autocomplete.display(), Some("abc"));
	let events = autocomplete.take_events();
	assert_eq!(events.len(), 2);
	assert!(events.iter().all(|event| event.name() == "selected"));
}

#[test]
fn selecting_nothing_changes_nothing() {
	let mut autocomplete = local();
	autocomplete.input("abc").unwrap();
	autocomplete.take_events();

	assert!(!autocomplete.select(None).unwrap());
	assert!(autocomplete.is_open());
	assert!(autocomplete.take_events().is_empty());
}

#[test]
fn item_without_identity_commits_no_value() {
	let mut autocomplete = local();
	autocomplete.select(Some(&json!({"name": "loose"}))).unwrap();
	assert_eq!(autocomplete.value(), None);
	assert_eq!(autocomplete.display(), Some("loose"));
}

#[test]
fn enter_commits_highlighted_item() {
	let mut autocomplete = local();
	autocomplete.input("abc").unwrap();
	autocomplete.down();
	autocomplete.take_events();

	autocomplete.keydown(Key::Enter).unwrap();
	let names: Vec<_> = autocomplete
		.take_events()
		.iter()
		.map(AutocompleteEvent::name)
		.collect();
	assert_eq!(names, ["selected", "enter"]);
	assert_eq!(autocomplete.value(), Some(&json!(1)));
	assert!(!autocomplete.is_open());
}

#[test]
fn enter_carries_the_display_text() {
	let mut autocomplete = local();
	autocomplete.input("def").unwrap();
	autocomplete.down();
	autocomplete.enter().unwrap();
	let events = autocomplete.take_events();
	assert_eq!(events.last(), Some(&AutocompleteEvent::Enter("def".to_string())));
}

#[test]
fn enter_without_highlight_reports_nothing_selected() {
	let mut autocomplete = local();
	autocomplete.input("abc").unwrap();
	autocomplete.take_events();

	autocomplete.enter().unwrap();
	assert_eq!(autocomplete.take_events(), vec![AutocompleteEvent::NothingSelected]);
	assert!(autocomplete.is_open());
	assert_eq!(autocomplete.value(), None);
}

#[test]
fn clear_resets_everything() {
	let mut autocomplete = Autocomplete::builder(items())
		.with_initial_display("abc")
		.with_initial_value(1)
		.build();
	autocomplete.input("de").unwrap();
	autocomplete.take_events();

	autocomplete.clear();
	assert_eq!(autocomplete.query(), None);
	assert_eq!(autocomplete.value(), None);
	assert_eq!(autocomplete.display(), None);
	assert_eq!(autocomplete.results(), None);
	assert_eq!(autocomplete.error(), None);
	assert_eq!(autocomplete.take_events(), vec![AutocompleteEvent::Clear]);
}

#[test]
fn clear_abandons_pending_remote_search() {
	let clock = ManualClock::new();
	let recorder = Recorder::new();
	let mut autocomplete = remote(&recorder, &clock);

	autocomplete.input("abc").unwrap();
	autocomplete.clear();
	clock.advance(Duration::from_secs(1));
	autocomplete.pump();
	assert_eq!(recorder.calls(), 0);
}

#[test]
fn initial_values_seed_the_committed_state() {
	let autocomplete = Autocomplete::builder(items())
		.with_initial_display("def")
		.with_initial_value(2)
		.build();
	assert_eq!(autocomplete.query(), Some("def"));
	assert_eq!(autocomplete.display(), Some("def"));
	assert_eq!(autocomplete.value(), Some(&json!(2)));
	assert!(!autocomplete.is_open());
}

#[test]
fn event_listener_attaches_once() {
	let bus = PointerBus::new();
	let mut autocomplete = local();

	assert!(autocomplete.set_event_listener(&bus));
	assert!(!autocomplete.set_event_listener(&bus));
	assert_eq!(bus.subscriber_count(), 1);

	assert!(autocomplete.remove_event_listener());
	assert!(!autocomplete.remove_event_listener());
	assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn outside_click_restores_initial_values() {
	let bus = PointerBus::new();
	let mut autocomplete = Autocomplete::builder(items())
		.with_initial_display("def")
		.with_initial_value(2)
		.build();
	autocomplete.set_event_listener(&bus);
	autocomplete.set_bounds(Region::new(0, 0, 20, 5));

	autocomplete.input("ab").unwrap();
	bus.broadcast(PointerEvent::new(40, 10));
	autocomplete.pump();

	assert_eq!(autocomplete.results(), None);
	assert_eq!(autocomplete.query(), Some("def"));
	assert_eq!(autocomplete.display(), Some("def"));
	assert_eq!(autocomplete.value(), Some(&json!(2)));
}

#[test]
fn outside_click_without_commit_clears_value() {
	let bus = PointerBus::new();
	let mut autocomplete = local();
	autocomplete.set_event_listener(&bus);
	autocomplete.set_bounds(Region::new(0, 0, 20, 5));

	autocomplete.input("ab").unwrap();
	bus.broadcast(PointerEvent::new(0, 5));
	autocomplete.pump();

	assert_eq!(autocomplete.results(), None);
	assert_eq!(autocomplete.query(), None);
	assert_eq!(autocomplete.value(), None);
}

#[test]
fn outside_click_keeps_a_value_seeded_without_display() {
	let bus = PointerBus::new();
	let mut autocomplete = Autocomplete::builder(items()).with_initial_value(2).build();
	autocomplete.set_event_listener(&bus);
	autocomplete.set_bounds(Region::new(0, 0, 20, 5));

	autocomplete.input("ab").unwrap();
	bus.broadcast(PointerEvent::new(40, 10));
	autocomplete.pump();

	assert_eq!(autocomplete.results(), None);
	assert_eq!(autocomplete.query(), None);
	assert_eq!(autocomplete.display(), None);
	assert_eq!(autocomplete.value(), Some(&json!(2)));
}

#[test]
fn inside_click_keeps_list_open() {
	let bus = PointerBus::new();
	let mut autocomplete = local();
	autocomplete.set_event_listener(&bus);
	autocomplete.set_bounds(Region::new(0, 0, 20, 5));

	autocomplete.input("ab").unwrap();
	bus.broadcast(PointerEvent::new(19, 4));
	autocomplete.pump();

	assert!(autocomplete.is_open());
	assert_eq!(autocomplete.query(), Some("ab"));
}

#[test]
fn detached_listener_ignores_clicks() {
	let bus = PointerBus::new();
	let mut autocomplete = local();
	autocomplete.set_event_listener(&bus);
	autocomplete.remove_event_listener();

	autocomplete.input("ab").unwrap();
	assert_eq!(bus.broadcast(PointerEvent::new(99, 99)), 0);
	autocomplete.pump();
	assert!(autocomplete.is_open());
}

#[test]
fn escape_dismisses_like_an_outside_click() {
	let mut autocomplete = local();
	let item = json!({"id": 3, "name": "def"});
	autocomplete.select(Some(&item)).unwrap();

	autocomplete.input("ab").unwrap();
	autocomplete.keydown(Key::Escape).unwrap();
	assert!(!autocomplete.is_open());
	assert_eq!(autocomplete.query(), Some("def"));
	assert_eq!(autocomplete.value(), Some(&json!(3)));
}

#[test]
fn focus_and_blur_toggle_flag() {
	let mut autocomplete = local();
	assert!(!autocomplete.is_focussed());
	autocomplete.focus();
	assert!(autocomplete.is_focussed());
	autocomplete.blur();
	assert!(!autocomplete.is_focussed());
}

#[test]
fn teardown_releases_listener_and_pending_work() {
	let clock = ManualClock::new();
	let recorder = Recorder::new();
	let bus = PointerBus::new();
	let mut autocomplete = remote(&recorder, &clock);
	autocomplete.set_event_listener(&bus);

	autocomplete.input("abc").unwrap();
	autocomplete.teardown();
	autocomplete.teardown();

	assert!(!autocomplete.has_pending_search());
	assert!(!autocomplete.has_event_listener());
	assert_eq!(bus.subscriber_count(), 0);
	clock.advance(Duration::from_secs(1));
	autocomplete.pump();
	assert_eq!(recorder.calls(), 0);
}

#[test]
fn dropping_the_controller_detaches_listener() {
	let bus = PointerBus::new();
	{
		let mut autocomplete = local();
		autocomplete.set_event_listener(&bus);
		assert_eq!(bus.subscriber_count(), 1);
	}
	assert_eq!(bus.subscriber_count(), 0);
}
