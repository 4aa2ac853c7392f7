//! Notifications raised by the controller.

use std::collections::VecDeque;

use serde::Serialize;
use serde_json::Value;

/// A committed choice: the item's identity and its label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
	pub value: Option<Value>,
	pub display: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AutocompleteEvent {
	/// A search produced this results collection.
	Results(Vec<Value>),
	/// The latest results collection is empty.
	NoResults,
	/// An item was committed.
	Selected(Selection),
	/// The highlighted item was committed from the keyboard; carries its label.
	Enter(String),
	/// Enter was pressed with nothing highlighted.
	NothingSelected,
	/// Query, value and results were reset.
	Clear,
	/// A remote request failed.
	Error(String),
}

impl AutocompleteEvent {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Results(_) => "results",
			Self::NoResults => "noResults",
			Self::Selected(_) => "selected",
			Self::Enter(_) => "enter",
			Self::NothingSelected => "nothingSelected",
			Self::Clear => "clear",
			Self::Error(_) => "error",
		}
	}
}

/// FIFO of raised events, drained by the host.
#[derive(Debug, Default)]
pub struct EventQueue {
	events: VecDeque<AutocompleteEvent>,
}

impl EventQueue {
	pub fn push(&mut self, event: AutocompleteEvent) {
		log::trace!("emit {}", event.name());
		self.events.push_back(event);
	}

	pub fn drain(&mut self) -> Vec<AutocompleteEvent> {
		self.events.drain(..).collect()
	}

	pub fn iter(&self) -> impl Iterator<Item = &AutocompleteEvent> {
		self.events.iter()
	}

	pub fn len(&self) -> usize {
		self.events.len()
	}

	pub fn is_empty(&self) -> bool {
		self.events.is_empty()
	}
}
