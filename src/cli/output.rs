use anyhow::Result;
use autopick::PickOutcome;
use serde_json::{Value, json};

use super::OutputFormat;
use crate::workflow::Listing;

/// Print the outcome of an interactive session in the chosen format.
pub(crate) fn print_outcome(format: OutputFormat, outcome: &PickOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => println!("{}", format_outcome_json(outcome)?),
	}
	Ok(())
}

/// Print the labels found by a one-shot search.
pub(crate) fn print_listing(format: OutputFormat, listing: &Listing) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			if let Some(error) = &listing.error {
				eprintln!("search failed: {error}");
			}
			if listing.entries.is_empty()
				&& let Some(text) = &listing.empty_text
			{
				println!("{text}");
			}
			for entry in &listing.entries {
				println!("{}", entry.display);
			}
		}
		OutputFormat::Json => println!("{}", format_listing_json(listing)?),
	}
	Ok(())
}

fn print_plain(outcome: &PickOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(selection) => println!("{}", selection.display),
		None => println!("No selection"),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickOutcome) -> Result<String> {
	let (value, display) = match &outcome.selection {
		Some(selection) => (
			selection.value.clone().unwrap_or(Value::Null),
			Value::String(selection.display.clone()),
		),
		None => (Value::Null, Value::Null),
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"value": value,
		"display": display,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn format_listing_json(listing: &Listing) -> Result<String> {
	let payload = json!({
		"query": listing.query,
		"results": listing.entries,
		"error": listing.error,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}
