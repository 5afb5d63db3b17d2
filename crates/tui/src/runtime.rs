//! Terminal session and event loop.

use std::io::stdout;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use palette_core::CollectionFetcher;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use ratatui::crossterm::execute;

use crate::keyboard::{CrosstermEvents, InputSubscription, SubscriptionError};
use crate::{App, PaletteOptions, PaletteOutcome};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Build an [`App`] around `fetcher` and run it until the user leaves.
pub fn run(options: PaletteOptions, fetcher: CollectionFetcher) -> Result<PaletteOutcome> {
	let mut app = App::new(options).with_fetcher(fetcher);
	app.run()
}

impl App<'_> {
	/// Own the terminal until a row is activated or the user quits.
	pub fn run(&mut self) -> Result<PaletteOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;

		let subscription = match InputSubscription::acquire(&self.hub, CrosstermEvents) {
			Ok(subscription) => subscription,
			Err(error) => {
				ratatui::restore();
				execute!(stdout(), DisableMouseCapture)?;
				return Err(error.into());
			}
		};

		let mut disconnected = false;
		let result: Result<PaletteOutcome> = 'event_loop: loop {
			loop {
				let event = match subscription.try_next() {
					Ok(Some(event)) => event,
					Ok(None) => break,
					Err(SubscriptionError::Disconnected) => {
						// The reader's own error surfaces on release below.
						disconnected = true;
						break 'event_loop Err(SubscriptionError::Disconnected.into());
					}
					Err(error) => break 'event_loop Err(error.into()),
				};
				let outcome = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => None,
				};
				if let Some(outcome) = outcome {
					break 'event_loop Ok(outcome);
				}
			}

			self.pump_collections();
			self.throbber_state.calc_next();

			if let Err(error) = terminal.draw(|frame| self.draw(frame)) {
				break Err(error.into());
			}

			thread::sleep(FRAME_INTERVAL);
		};

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		match subscription.release() {
			Err(reader) if disconnected => Err(reader.into()),
			Err(error) => {
				tracing::warn!(%error, "input reader stopped with an error");
				result
			}
			Ok(()) => result,
		}
	}
}
