//! State container for the terminal picker.

use autopick_core::{Autocomplete, AutocompleteEvent, PointerBus, Selection};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use crate::input::QueryInput;

/// Result of an interactive session.
#[derive(Debug, Clone, PartialEq)]
pub struct PickOutcome {
	/// The user committed a result before leaving.
	pub accepted: bool,
	/// Query text at exit.
	pub query: String,
	/// Committed value and label, if any.
	pub selection: Option<Selection>,
}

impl Drop for Picker<'_> {
	fn drop(&mut self) {
		self.controller.teardown();
	}
}

/// Terminal front-end around one [`Autocomplete`] controller.
///
/// The picker owns the page-wide [`PointerBus`]: every mouse-down in the
/// terminal is broadcast on it, and the controller's subscription turns
/// clicks outside the widget into a dismissal.
pub struct Picker<'a> {
	pub(crate) controller: Autocomplete,
	pub(crate) input: QueryInput<'a>,
	pub(crate) bus: PointerBus,
	pub(crate) title: Option<String>,
	pub(crate) list_state: ListState,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) results_area: Option<Rect>,
	pub(crate) notice: Option<String>,
	pub(crate) committed: bool,
}

impl<'a> Picker<'a> {
	pub fn new(mut controller: Autocomplete) -> Self {
		let bus = PointerBus::new();
		controller.set_event_listener(&bus);
		controller.focus();
		let input = QueryInput::new(controller.query().unwrap_or_default());

		Self {
			controller,
			input,
			bus,
			title: None,
			list_state: ListState::default(),
			throbber_state: ThrobberState::default(),
			results_area: None,
			notice: None,
			committed: false,
		}
	}

	/// Set the prompt shown in front of the input.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn controller(&self) -> &Autocomplete {
		&self.controller
	}

	pub fn query(&self) -> &str {
		self.input.text()
	}

	pub fn notice(&self) -> Option<&str> {
		self.notice.as_deref()
	}

	/// Advance the controller and fold its notifications into the view.
	pub fn pump(&mut self) {
		self.controller.pump();
		self.absorb_events();
	}

	pub(crate) fn absorb_events(&mut self) {
		for event in self.controller.take_events() {
			log::trace!("controller raised {}", event.name());
			match event {
				AutocompleteEvent::Results(_) | AutocompleteEvent::NoResults => {
					self.notice = None;
				}
				AutocompleteEvent::Selected(_) => {
					self.committed = true;
					self.notice = None;
				}
				AutocompleteEvent::Enter(_) => {}
				AutocompleteEvent::NothingSelected => {
					self.notice = Some("Nothing selected".to_string());
				}
				AutocompleteEvent::Clear => {
					self.committed = false;
					self.notice = None;
				}
				AutocompleteEvent::Error(reason) => {
					self.notice = Some(reason);
				}
			}
		}
		self.sync_input();
		self.list_state.select(self.controller.selected_index());
	}

	/// Mirror query changes made by the controller (commit, dismissal) into
	/// the text input.
	fn sync_input(&mut self) {
		let query = self.controller.query().unwrap_or_default();
		if self.input.text() != query {
			self.input.set_text(query);
		}
	}

	pub(crate) fn selection(&self) -> Option<Selection> {
		let display = self.controller.display()?;
		Some(Selection {
			value: self.controller.value().cloned(),
			display: display.to_string(),
		})
	}

	pub(crate) fn outcome(&self, accepted: bool) -> PickOutcome {
		PickOutcome {
			accepted,
			query: self.input.text().to_string(),
			selection: self.selection(),
		}
	}
}
