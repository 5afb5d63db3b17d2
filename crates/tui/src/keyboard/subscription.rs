use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ratatui::crossterm::event::{self, Event};
use thiserror::Error;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Blocking source of terminal events, polled from the reader thread.
pub trait EventSource: Send + 'static {
	fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
	fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
		if event::poll(timeout)? {
			event::read().map(Some)
		} else {
			Ok(None)
		}
	}
}

#[derive(Debug, Error)]
pub enum SubscriptionError {
	#[error("an input subscription is already active for this palette")]
	AlreadyActive,
	#[error("input event channel disconnected")]
	Disconnected,
	#[error("input reader failed: {0}")]
	Reader(#[from] io::Error),
	#[error("input reader thread panicked")]
	Panicked,
}

/// Tracks whether a palette instance currently holds an input subscription.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionHub {
	active: Arc<AtomicBool>,
}

impl SubscriptionHub {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn is_active(&self) -> bool {
		self.active.load(Ordering::Acquire)
	}
}

/// Background reader forwarding terminal events to the UI thread.
///
/// Acquiring starts the reader; dropping or [`release`](Self::release)-ing
/// stops and joins it and frees the hub for the next subscription.
pub struct InputSubscription {
	events: Receiver<Event>,
	running: Arc<AtomicBool>,
	reader: Option<JoinHandle<io::Result<()>>>,
	hub: SubscriptionHub,
}

impl InputSubscription {
	pub fn acquire<S: EventSource>(
		hub: &SubscriptionHub,
		mut source: S,
	) -> Result<Self, SubscriptionError> {
		if hub
			.active
			.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.is_err()
		{
			return Err(SubscriptionError::AlreadyActive);
		}

		let (tx, events) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let flag = Arc::clone(&running);
		let reader = thread::spawn(move || -> io::Result<()> {
			while flag.load(Ordering::Relaxed) {
				if let Some(event) = source.poll_event(POLL_INTERVAL)?
					&& tx.send(event).is_err()
				{
					break;
				}
			}
			Ok(())
		});
		tracing::debug!("input subscription acquired");

		Ok(Self {
			events,
			running,
			reader: Some(reader),
			hub: hub.clone(),
		})
	}

	/// Next pending event, if any, without blocking.
	pub fn try_next(&self) -> Result<Option<Event>, SubscriptionError> {
		match self.events.try_recv() {
			Ok(event) => Ok(Some(event)),
			Err(TryRecvError::Empty) => Ok(None),
			Err(TryRecvError::Disconnected) => Err(SubscriptionError::Disconnected),
		}
	}

	/// Wait up to `timeout` for the next event.
	pub fn next_timeout(&self, timeout: Duration) -> Result<Option<Event>, SubscriptionError> {
		match self.events.recv_timeout(timeout) {
			Ok(event) => Ok(Some(event)),
			Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
			Err(mpsc::RecvTimeoutError::Disconnected) => Err(SubscriptionError::Disconnected),
		}
	}

	/// Stop the reader and surface any error it hit.
	pub fn release(mut self) -> Result<(), SubscriptionError> {
		self.shutdown()
	}

	fn shutdown(&mut self) -> Result<(), SubscriptionError> {
		let Some(reader) = self.reader.take() else {
			return Ok(());
		};
		self.running.store(false, Ordering::Relaxed);
		let joined = reader.join();
		self.hub.active.store(false, Ordering::Release);
		tracing::debug!("input subscription released");
		match joined {
			Ok(result) => result.map_err(SubscriptionError::from),
			Err(_) => Err(SubscriptionError::Panicked),
		}
	}
}

impl Drop for InputSubscription {
	fn drop(&mut self) {
		if let Err(error) = self.shutdown() {
			tracing::warn!(%error, "input reader stopped with an error");
		}
	}
}
