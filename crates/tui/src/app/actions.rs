use anyhow::Result;
use autopick_core::{Key, PointerEvent};
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::{PickOutcome, Picker};

impl Picker<'_> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<PickOutcome>> {
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Ok(Some(self.outcome(false)));
			}
			KeyCode::Esc => {
				if !self.controller.is_open() {
					return Ok(Some(self.outcome(self.committed)));
				}
				self.controller.keydown(Key::Escape)?;
			}
			KeyCode::Enter => {
				let was_committed = self.committed;
				self.committed = false;
				self.controller.keydown(Key::Enter)?;
				self.absorb_events();
				if self.committed {
					return Ok(Some(self.outcome(true)));
				}
				self.committed = was_committed;
			}
			KeyCode::Up => {
				self.controller.keydown(Key::Up)?;
			}
			KeyCode::Down => {
				self.controller.keydown(Key::Down)?;
			}
			// Ctrl+U clears query and committed value.
			KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.controller.clear();
			}
			_ => {
				if self.input.input(key) {
					let query = self.input.text().to_string();
					self.controller.input(query)?;
				}
			}
		}
		self.absorb_events();
		Ok(None)
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				self.bus
					.broadcast(PointerEvent::new(mouse.column, mouse.row));
				// Outside clicks are handled by the controller's subscription.
				self.controller.pump();
				if let Some(index) = self.result_index_at(mouse.column, mouse.row) {
					let item = self
						.controller
						.results()
						.and_then(|results| results.get(index))
						.cloned();
					self.controller.select(item.as_ref())?;
				}
			}
			MouseEventKind::ScrollUp if self.controller.is_open() => {
				self.controller.up();
			}
			MouseEventKind::ScrollDown if self.controller.is_open() => {
				self.controller.down();
			}
			_ => {}
		}
		self.absorb_events();
		Ok(())
	}

	/// Index of the result row drawn under the given cell.
	fn result_index_at(&self, column: u16, row: u16) -> Option<usize> {
		let area = self.results_area?;
		if !self.controller.is_open() || !area.contains(Position::new(column, row)) {
			return None;
		}
		let offset = usize::from(row - area.y) + self.list_state.offset();
		let len = self.controller.results()?.len();
		(offset < len).then_some(offset)
	}
}
