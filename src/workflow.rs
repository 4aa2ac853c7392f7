use std::env;
use std::fs;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use autopick::{
	Autocomplete, FileFetcher, IDENTITY_FIELD, PickOutcome, ResultsDisplay, Selection, Source,
};
use serde_json::Value;

use crate::settings::{QUERY_PLACEHOLDER, ResolvedConfig, SourceSpec};

/// Upper bound on how long `--list` waits for a remote source to answer.
const LIST_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Labels found by a one-shot search.
#[derive(Debug, Clone, Default)]
pub(crate) struct Listing {
	pub(crate) query: String,
	pub(crate) entries: Vec<Selection>,
	pub(crate) error: Option<String>,
	pub(crate) empty_text: Option<String>,
}

/// Coordinates building the controller and running it in either mode.
pub(crate) struct PickWorkflow {
	controller: Autocomplete,
	title: Option<String>,
	query: Option<String>,
}

impl PickWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let source = build_source(&config.source)?;
		let base_dir = env::current_dir().context("failed to read the working directory")?;

		let mut builder = Autocomplete::builder(source)
			.with_request_headers(config.headers)
			.with_fetcher(FileFetcher::new().with_base_dir(base_dir));
		if let Some(property) = config.results_property {
			builder = builder.with_results_property(property);
		}
		if let Some(display) = config.results_display {
			builder = builder.with_results_display(ResultsDisplay::field(display));
		}
		if let Some(text) = config.no_results_text {
			builder = builder.with_no_results_text(text);
		}
		if let Some(display) = config.initial_display {
			builder = builder.with_initial_display(display);
		}
		if let Some(value) = config.initial_value {
			builder = builder.with_initial_value(value);
		}

		let mut controller = builder.build();
		if let Some(query) = &config.query {
			controller.set_query(query.clone());
		}

		Ok(Self {
			controller,
			title: config.title,
			query: config.query,
		})
	}

	/// Open the terminal picker and wait for the user to finish.
	pub(crate) fn run(self) -> Result<PickOutcome> {
		log::info!("starting interactive picker");
		autopick::run(self.controller, self.title)
	}

	/// Search once and collect every match without opening the terminal.
	pub(crate) fn list(mut self) -> Result<Listing> {
		let query = self
			.query
			.take()
			.or_else(|| self.controller.query().map(str::to_string))
			.unwrap_or_default();
		log::info!("listing matches for {query:?}");

		self.controller.input(query.clone())?;
		if self.controller.source().is_remote() {
			self.settle()?;
		}

		let mut entries = Vec::new();
		for item in self.controller.results().unwrap_or_default() {
			entries.push(Selection {
				value: item.get(IDENTITY_FIELD).cloned(),
				display: self.controller.format_display(item)?,
			});
		}

		Ok(Listing {
			query,
			entries,
			error: self.controller.error().map(str::to_string),
			empty_text: self.controller.empty_state_text().map(str::to_string),
		})
	}

	/// Drive the controller until the pending remote search has answered.
	fn settle(&mut self) -> Result<()> {
		let started = Instant::now();
		loop {
			self.controller.pump();
			if !self.controller.has_pending_search() && !self.controller.is_loading() {
				return Ok(());
			}
			if started.elapsed() >= LIST_TIMEOUT {
				anyhow::bail!("timed out after {LIST_TIMEOUT:?} waiting for results");
			}

			match self.controller.next_deadline() {
				Some(remaining) => thread::sleep(remaining.max(Duration::from_millis(1))),
				None => {
					self.controller.wait_for_response(POLL_INTERVAL);
				}
			}
		}
	}
}

fn build_source(spec: &SourceSpec) -> Result<Source> {
	let source = match spec {
		SourceSpec::Inline(items) => Source::collection(items.iter().cloned()),
		SourceSpec::File(path) => {
			let body = fs::read_to_string(path)
				.with_context(|| format!("failed to read source file {}", path.display()))?;
			let value: Value = serde_json::from_str(&body)
				.with_context(|| format!("source file {} is not valid JSON", path.display()))?;
			Source::from_value(value)
		}
		SourceSpec::Url(url) => Source::url(url.clone()),
		SourceSpec::UrlTemplate(template) => {
			let template = template.clone();
			Source::url_builder(move |query| template.replace(QUERY_PLACEHOLDER, query))
		}
	};
	Ok(source)
}
