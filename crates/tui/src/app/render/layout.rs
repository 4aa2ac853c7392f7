use ratatui::layout::{Constraint, Layout, Rect};

/// Areas of one picker frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PickerLayout {
	pub(crate) input: Rect,
	pub(crate) results: Rect,
	pub(crate) status: Rect,
}

impl PickerLayout {
	/// Input on top, then `list_rows` rows of results, the status line pinned
	/// to the bottom. Whatever is left between results and status is outside
	/// the widget.
	pub(crate) fn split(area: Rect, list_rows: u16) -> Self {
		let [input, results, _gap, status] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(list_rows),
			Constraint::Min(0),
			Constraint::Length(1),
		])
		.areas(area);

		Self {
			input,
			results,
			status,
		}
	}

	pub(crate) fn prompt_split(area: Rect, prompt_width: u16) -> [Rect; 2] {
		Layout::horizontal([Constraint::Length(prompt_width), Constraint::Min(1)]).areas(area)
	}

	/// Region that counts as inside the widget: the input row plus the
	/// results list beneath it.
	pub(crate) fn widget_bounds(&self) -> Rect {
		self.input.union(self.results)
	}
}
