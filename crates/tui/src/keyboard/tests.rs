use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::*;

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
	KeyEvent::new(code, modifiers)
}

struct ScriptedEvents {
	queue: VecDeque<Event>,
}

impl ScriptedEvents {
	fn new(events: impl IntoIterator<Item = Event>) -> Self {
		Self {
			queue: events.into_iter().collect(),
		}
	}
}

impl EventSource for ScriptedEvents {
	fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
		match self.queue.pop_front() {
			Some(event) => Ok(Some(event)),
			None => {
				std::thread::sleep(timeout.min(Duration::from_millis(5)));
				Ok(None)
			}
		}
	}
}

struct FailingEvents;

impl EventSource for FailingEvents {
	fn poll_event(&mut self, _timeout: Duration) -> io::Result<Option<Event>> {
		Err(io::Error::other("terminal went away"))
	}
}

#[test]
fn parses_common_chords() {
	let binding: KeyBinding = "ctrl+k".parse().unwrap();
	assert_eq!(binding, KeyBinding::new(KeyModifiers::CONTROL, KeyCode::Char('k')));

	let binding: KeyBinding = "Cmd + Shift + P".parse().unwrap();
	assert_eq!(
		binding,
		KeyBinding::new(KeyModifiers::SUPER | KeyModifiers::SHIFT, KeyCode::Char('p'))
	);

	let binding: KeyBinding = "alt+f5".parse().unwrap();
	assert_eq!(binding.code, KeyCode::F(5));
}

#[test]
fn rejects_invalid_chords() {
	assert_eq!("".parse::<KeyBinding>(), Err(KeyBindingError::Empty));
	assert_eq!("ctrl+".parse::<KeyBinding>(), Err(KeyBindingError::Empty));
	assert_eq!(
		"hyper+k".parse::<KeyBinding>(),
		Err(KeyBindingError::UnknownModifier("hyper".into()))
	);
	assert_eq!(
		"ctrl+bogus".parse::<KeyBinding>(),
		Err(KeyBindingError::UnknownKey("bogus".into()))
	);
	assert_eq!("k".parse::<KeyBinding>(), Err(KeyBindingError::MissingModifier("k".into())));
}

#[test]
fn chords_render_for_hints() {
	let binding: KeyBinding = "ctrl+k".parse().unwrap();
	assert_eq!(binding.to_string(), "Ctrl+K");
}

#[test]
fn letter_chords_ignore_case_and_implicit_shift() {
	let binding: KeyBinding = "ctrl+k".parse().unwrap();
	assert!(binding.matches(&press(KeyCode::Char('k'), KeyModifiers::CONTROL)));
	assert!(binding.matches(&press(
		KeyCode::Char('K'),
		KeyModifiers::CONTROL | KeyModifiers::SHIFT
	)));
	assert!(!binding.matches(&press(KeyCode::Char('k'), KeyModifiers::NONE)));
	assert!(!binding.matches(&press(
		KeyCode::Char('k'),
		KeyModifiers::CONTROL | KeyModifiers::ALT
	)));
}

#[test]
fn toggle_chord_works_in_both_states() {
	let controller = KeyboardController::default();
	let ctrl_k = press(KeyCode::Char('k'), KeyModifiers::CONTROL);
	let super_k = press(KeyCode::Char('k'), KeyModifiers::SUPER);
	for visible in [true, false] {
		assert_eq!(controller.interpret(&ctrl_k, visible), Some(PaletteCommand::Toggle));
		assert_eq!(controller.interpret(&super_k, visible), Some(PaletteCommand::Toggle));
	}
}

#[test]
fn escape_only_dismisses_a_visible_palette() {
	let controller = KeyboardController::default();
	let esc = press(KeyCode::Esc, KeyModifiers::NONE);
	assert_eq!(controller.interpret(&esc, true), Some(PaletteCommand::Dismiss));
	assert_eq!(controller.interpret(&esc, false), None);
}

#[test]
fn quit_keys() {
	let controller = KeyboardController::default();
	let ctrl_c = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
	let q = press(KeyCode::Char('q'), KeyModifiers::NONE);
	assert_eq!(controller.interpret(&ctrl_c, true), Some(PaletteCommand::Quit));
	assert_eq!(controller.interpret(&q, false), Some(PaletteCommand::Quit));
	assert_eq!(controller.interpret(&q, true), None, "q is a query character while visible");
}

#[test]
fn subscription_forwards_events_and_releases_the_hub() {
	let hub = SubscriptionHub::new();
	let esc = Event::Key(press(KeyCode::Esc, KeyModifiers::NONE));
	let subscription = InputSubscription::acquire(&hub, ScriptedEvents::new([esc.clone()])).unwrap();
	assert!(hub.is_active());

	let received = subscription.next_timeout(Duration::from_secs(2)).unwrap();
	assert_eq!(received, Some(esc));

	subscription.release().unwrap();
	assert!(!hub.is_active());
}

#[test]
fn only_one_subscription_per_hub() {
	let hub = SubscriptionHub::new();
	let first = InputSubscription::acquire(&hub, ScriptedEvents::new([])).unwrap();
	let second = InputSubscription::acquire(&hub, ScriptedEvents::new([]));
	assert!(matches!(second, Err(SubscriptionError::AlreadyActive)));

	drop(first);
	assert!(!hub.is_active());
	let third = InputSubscription::acquire(&hub, ScriptedEvents::new([])).unwrap();
	assert!(hub.is_active());
	drop(third);
}

#[test]
fn separate_hubs_do_not_interfere() {
	let a = SubscriptionHub::new();
	let b = SubscriptionHub::new();
	let _first = InputSubscription::acquire(&a, ScriptedEvents::new([])).unwrap();
	let _second = InputSubscription::acquire(&b, ScriptedEvents::new([])).unwrap();
	assert!(a.is_active() && b.is_active());
}

#[test]
fn reader_errors_surface_on_release() {
	let hub = SubscriptionHub::new();
	let subscription = InputSubscription::acquire(&hub, FailingEvents).unwrap();
	let next = subscription.next_timeout(Duration::from_secs(2));
	assert!(matches!(next, Err(SubscriptionError::Disconnected)));
	assert!(matches!(subscription.release(), Err(SubscriptionError::Reader(_))));
	assert!(!hub.is_active());
}
