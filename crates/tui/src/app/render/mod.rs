pub(crate) mod layout;

use autopick_core::{Region, ResultsStatus};
use layout::PickerLayout;
use ratatui::Frame;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use serde_json::Value;
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use super::Picker;

const HIGHLIGHT_SYMBOL: &str = "> ";

impl Picker<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let list_rows = self.list_rows();
		let layout = PickerLayout::split(area, list_rows);

		self.render_input(frame, layout.input);
		self.render_results(frame, layout.results);
		self.render_status(frame, layout.status);

		let bounds = layout.widget_bounds();
		self.controller.set_bounds(Region::new(
			bounds.x,
			bounds.y,
			bounds.width,
			bounds.height,
		));
		self.results_area = Some(layout.results);
	}

	/// Rows the results area needs: one per result, or one for the empty
	/// state text, or none while the list is closed.
	fn list_rows(&self) -> u16 {
		match self.controller.results() {
			None => 0,
			Some([]) => u16::from(self.controller.empty_state_text().is_some()),
			Some(results) => u16::try_from(results.len()).unwrap_or(u16::MAX),
		}
	}

	fn render_input(&mut self, frame: &mut Frame, area: Rect) {
		let prompt = match &self.title {
			Some(title) => format!("{title} > "),
			None => "> ".to_string(),
		};
		let prompt_width = u16::try_from(prompt.width()).unwrap_or(u16::MAX);
		let [prompt_area, input_area] = PickerLayout::prompt_split(area, prompt_width);

		frame.render_widget(
			Paragraph::new(prompt).style(Style::default().fg(Color::Cyan)),
			prompt_area,
		);
		self.input.render(frame, input_area);

		if self.controller.is_loading() || self.controller.has_pending_search() {
			self.throbber_state.calc_next();
			let spinner = Throbber::default()
				.style(Style::default().add_modifier(Modifier::DIM))
				.to_symbol_span(&self.throbber_state);
			let width = u16::try_from(spinner.width()).unwrap_or(0);
			if width > 0 && width < input_area.width {
				let spinner_area = Rect {
					x: input_area.right().saturating_sub(width),
					width,
					..input_area
				};
				frame.render_widget(Line::from(spinner), spinner_area);
			}
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		if area.height == 0 {
			return;
		}
		let Some(results) = self.controller.results() else {
			return;
		};

		if results.is_empty() {
			if let Some(text) = self.controller.empty_state_text() {
				let empty = Paragraph::new(text)
					.alignment(Alignment::Center)
					.style(Style::default().add_modifier(Modifier::DIM));
				frame.render_widget(empty, area);
			}
			return;
		}

		let items: Vec<ListItem> = results
			.iter()
			.map(|item| ListItem::new(self.label_for(item)))
			.collect();
		let list = List::new(items)
			.highlight_symbol(HIGHLIGHT_SYMBOL)
			.highlight_style(Style::default().add_modifier(Modifier::REVERSED));

		self.list_state.select(self.controller.selected_index());
		frame.render_stateful_widget(list, area, &mut self.list_state);
	}

	fn label_for(&self, item: &Value) -> String {
		match self.controller.format_display(item) {
			Ok(label) => label,
			Err(err) => {
				log::debug!("cannot label result: {err}");
				item.to_string()
			}
		}
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		if area.height == 0 {
			return;
		}
		let line = match (&self.notice, self.controller.status()) {
			(_, ResultsStatus::Failed(reason)) => {
				Line::from(Span::styled(reason.to_string(), Style::default().fg(Color::Red)))
			}
			(Some(notice), _) => Line::from(Span::styled(
				notice.clone(),
				Style::default().fg(Color::Yellow),
			)),
			(None, status) => Line::from(Span::styled(
				status_text(status),
				Style::default().add_modifier(Modifier::DIM),
			)),
		};
		frame.render_widget(Paragraph::new(line), area);
	}
}

fn status_text(status: ResultsStatus<'_>) -> String {
	match status {
		ResultsStatus::Unsearched => "Type to search".to_string(),
		ResultsStatus::Loading => "Searching".to_string(),
		ResultsStatus::Failed(reason) => reason.to_string(),
		ResultsStatus::Empty => "0 results".to_string(),
		ResultsStatus::Found(1) => "1 result".to_string(),
		ResultsStatus::Found(count) => format!("{count} results"),
	}
}
