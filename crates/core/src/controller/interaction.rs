use serde_json::Value;

use super::{Autocomplete, Key};
use crate::IDENTITY_FIELD;
use crate::error::AutocompleteError;
use crate::events::{AutocompleteEvent, Selection};
use crate::pointer::{PointerBus, PointerEvent};

impl Autocomplete {
	/// Highlight the next result, wrapping to the first.
	pub fn down(&mut self) -> Option<usize> {
		let len = self.open_len();
		self.cursor.down(len)
	}

	/// Highlight the previous result, wrapping to the last. With nothing
	/// highlighted this jumps to the last result.
	pub fn up(&mut self) -> Option<usize> {
		let len = self.open_len();
		self.cursor.up(len)
	}

	fn open_len(&self) -> usize {
		self.results.as_ref().map_or(0, Vec::len)
	}

	/// Commit `item`. Returns `Ok(false)` without touching state when there is
	/// no item.
	pub fn select(&mut self, item: Option<&Value>) -> Result<bool, AutocompleteError> {
		let Some(item) = item else {
			return Ok(false);
		};
		let display = self.format_display(item)?;
		let value = item.get(IDENTITY_FIELD).cloned();

		self.value = value.clone();
		self.display = Some(display.clone());
		self.selected_display = Some(display.clone());
		self.query = Some(display.clone());
		self.close();
		self.emit(AutocompleteEvent::Selected(Selection { value, display }));
		Ok(true)
	}

	/// Commit the highlighted result, or report that nothing is highlighted.
	pub fn enter(&mut self) -> Result<(), AutocompleteError> {
		let Some(item) = self.highlighted().cloned() else {
			self.emit(AutocompleteEvent::NothingSelected);
			return Ok(());
		};
		self.select(Some(&item))?;
		let display = self.display.clone().unwrap_or_default();
		self.emit(AutocompleteEvent::Enter(display));
		Ok(())
	}

	pub fn keydown(&mut self, key: Key) -> Result<(), AutocompleteError> {
		match key {
			Key::Up => {
				self.up();
			}
			Key::Down => {
				self.down();
			}
			Key::Enter => self.enter()?,
			Key::Escape => self.dismiss(),
		}
		Ok(())
	}

	/// Reset query, value, display, results and error.
	pub fn clear(&mut self) {
		self.query = None;
		self.value = None;
		self.display = None;
		self.selected_display = None;
		self.error = None;
		self.close();
		self.emit(AutocompleteEvent::Clear);
	}

	/// Close the list after an interaction outside the widget.
	///
	/// When the query no longer shows the last committed label, the seeded or
	/// previously selected display comes back, or the query reverts to nothing
	/// when no label was ever committed. The committed value is left alone.
	pub fn dismiss(&mut self) {
		self.close();
		if self.query != self.selected_display {
			self.query = self.selected_display.clone();
			self.display = self.selected_display.clone();
		}
	}

	fn close(&mut self) {
		self.results = None;
		self.cursor.reset();
		self.abandon_remote_search();
	}

	pub fn focus(&mut self) {
		self.focussed = true;
	}

	pub fn blur(&mut self) {
		self.focussed = false;
	}

	/// Attach the outside-interaction listener to `bus`.
	///
	/// Returns `true` when attached now and `false` when a listener is already
	/// attached.
	pub fn set_event_listener(&mut self, bus: &PointerBus) -> bool {
		if self.listener.is_some() {
			log::debug!("outside-interaction listener already attached");
			return false;
		}
		self.listener = Some(bus.subscribe());
		true
	}

	/// Detach the outside-interaction listener. Returns whether one was
	/// attached.
	pub fn remove_event_listener(&mut self) -> bool {
		self.listener.take().is_some()
	}

	pub fn has_event_listener(&self) -> bool {
		self.listener.is_some()
	}

	/// Handle one pointer-down, dismissing when it lands outside the bounds.
	pub fn pointer_down(&mut self, event: PointerEvent) {
		let inside = self
			.bounds
			.is_some_and(|bounds| bounds.contains(event));
		if !inside {
			self.dismiss();
		}
	}

	pub(super) fn pump_pointer_events(&mut self) {
		let events = match &self.listener {
			Some(listener) => listener.drain(),
			None => return,
		};
		for event in events {
			self.pointer_down(event);
		}
	}

	/// Release the debounce timer, the pointer listener and the request
	/// worker. Safe to call more than once.
	pub fn teardown(&mut self) {
		self.debounce.cancel();
		self.listener = None;
		if let Some(runtime) = self.requests.take() {
			runtime.shutdown();
		}
	}
}
