//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Text input holding the query as the user types it.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(text: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
		};
		input.set_text(text);
		input
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the contents and park the cursor at the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text("Type to search");
		textarea.set_placeholder_style(Style::default().add_modifier(Modifier::DIM));
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	/// Feed a key to the textarea. Returns `true` when the text changed.
	///
	/// Keys that would start a new line are swallowed so the query stays on
	/// one row.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if starts_new_line(key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn starts_new_line(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
