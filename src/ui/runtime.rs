use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::{App, UiConfig};
use crate::images::{ImageRuntime, backend};
use crate::net::{CharacterClient, spawn_fetch};
use crate::types::SearchOutcome;
use crate::ui::style::Theme;

/// Launch the fetch, open the roster screen and run it to completion.
pub fn run(client: CharacterClient, ui: UiConfig, theme: Theme) -> Result<SearchOutcome> {
	let mut app = App::new(ui);
	app.set_theme(theme);
	tracing::info!(endpoint = client.endpoint(), "fetching character roster");
	let updates = spawn_fetch(client).context("failed to start the fetch thread")?;
	app.set_fetch_updates(updates);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		// Probe before the input thread starts competing for stdin.
		backend::initialize();
		match ImageRuntime::spawn(self.ui.image_box) {
			Ok(runtime) => self.set_image_runtime(runtime),
			Err(err) => tracing::warn!(error = %err, "image loading disabled"),
		}

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

		let result: Result<SearchOutcome> = 'event_loop: loop {
			self.pump_fetch_updates();
			self.pump_store_events();
			self.pump_image_results();
			self.throbber_state.calc_next();

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break 'event_loop Err(err.into());
			}
			self.request_visible_images();

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
					&& let Some(outcome) = self.handle_key(key)
				{
					maybe_outcome = Some(outcome);
					break;
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::types::CharacterRecord;

	fn screen(app: &mut App<'_>, width: u16, height: u16) -> String {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		let buffer = terminal.backend().buffer();
		(0..buffer.area.height)
			.map(|y| {
				(0..buffer.area.width)
					.map(|x| buffer[(x, y)].symbol().to_string())
					.collect::<String>()
			})
			.collect::<Vec<_>>()
			.join("\n")
	}

	#[test]
	fn first_frame_shows_title_placeholder_and_loading() {
		let mut app = App::new(UiConfig::default());
		let (_tx, rx) = mpsc::channel();
		app.set_fetch_updates(rx);

		let view = screen(&mut app, 80, 24);
		let lines: Vec<&str> = view.lines().collect();
		assert!(lines[0].contains("Harry Potter"));
		assert!(lines[1].contains("Search..."));
		assert!(lines[1].contains("Loading characters"));
		assert!(view.matches("Loading characters").count() >= 2);
	}

	#[test]
	fn loaded_roster_renders_rows_and_marks_them_visible() {
		let mut app = App::new(UiConfig::default());
		app.store.apply_fetch(Ok(vec![
			CharacterRecord::new("1", "", "Harry Potter", "Daniel Radcliffe"),
			CharacterRecord::new("2", "", "Ron Weasley", "Rupert Grint"),
		]));
		app.pump_store_events();

		let view = screen(&mut app, 80, 24);
		assert!(view.contains("Ron Weasley"));
		assert!(view.contains("Rupert Grint"));
		assert!(view.contains("2 of 2"));
		assert_eq!(app.visible, 0..2);
	}

	#[test]
	fn empty_filter_shows_no_results() {
		let mut app = App::new(UiConfig::default().with_initial_query("dumbledore"));
		app.store.apply_fetch(Ok(vec![CharacterRecord::new(
			"1",
			"",
			"Harry Potter",
			"Daniel Radcliffe",
		)]));
		app.pump_store_events();

		let view = screen(&mut app, 80, 24);
		assert!(view.contains("No results"));
		assert!(view.contains("0 of 1"));
	}

	#[test]
	fn narrow_terminal_drops_the_portrait_pane() {
		let mut app = App::new(UiConfig::default().with_title("Roster"));
		app.store.apply_fetch(Ok(vec![CharacterRecord::new(
			"1",
			"",
			"Harry Potter",
			"Daniel Radcliffe",
		)]));
		app.pump_store_events();

		let view = screen(&mut app, 40, 10);
		assert!(view.lines().next().unwrap_or_default().contains("Roster"));
		assert_eq!(view.matches("Harry Potter").count(), 1);
	}
}
