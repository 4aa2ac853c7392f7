//! Picker runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use autopick_core::Autocomplete;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::{PickOutcome, Picker};

/// Construct a [`Picker`] around `controller` and run it to completion.
pub fn run(controller: Autocomplete, title: Option<String>) -> Result<PickOutcome> {
	let mut picker = Picker::new(controller);
	if let Some(title) = title {
		picker = picker.with_title(title);
	}
	picker.run()
}

impl Picker<'_> {
	/// Pump the terminal event loop until the user exits.
	///
	/// The seeded query is searched before the terminal switches to raw mode,
	/// and every later failure still restores the terminal before returning.
	pub fn run(&mut self) -> Result<PickOutcome> {
		self.hydrate_initial_results()?;

		let mut terminal = ratatui::init();
		let result = self.drive(&mut terminal);

		ratatui::restore();
		let released = execute!(stdout(), DisableMouseCapture);

		let outcome = result?;
		released?;
		Ok(outcome)
	}

	fn drive(&mut self, terminal: &mut DefaultTerminal) -> Result<PickOutcome> {
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<PickOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				let handled = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
					Event::Mouse(mouse) => self.handle_mouse(mouse).map(|()| None),
					_ => Ok(None),
				};
				match handled {
					Ok(Some(outcome)) => {
						maybe_outcome = Some(outcome);
						break;
					}
					Ok(None) => {}
					Err(err) => break 'event_loop Err(err),
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			self.pump();

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	/// Populate the list before the first frame when a seeded query exists.
	fn hydrate_initial_results(&mut self) -> Result<()> {
		if !self.input.text().is_empty() && !self.committed_display_shown() {
			self.controller.search()?;
			self.absorb_events();
		}
		Ok(())
	}

	/// Whether the input shows the seeded committed label, which should not
	/// pop the list open on start.
	fn committed_display_shown(&self) -> bool {
		self.controller.selected_display() == Some(self.input.text())
	}
}
