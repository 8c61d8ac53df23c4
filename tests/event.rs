use std::collections::BTreeSet;

use sysevent::error::WrongEventKind;
use sysevent::event::{self, Event, EventKind, EventType};
use sysevent::joystick::Axis;
use sysevent::keyboard::{Key, Scancode};
use sysevent::mouse::{Button, Wheel};
use sysevent::sensor::SensorType;
use sysevent::vector::{Vector2, Vector3};

// Calls `$check` once with a sample payload of every kind.
macro_rules! foreach_payload {
    ($check:ident) => {{
        $check(event::Empty);
        $check(event::Closed);
        $check(event::Resized { size: Vector2::new(800, 600) });
        $check(event::LostFocus);
        $check(event::GainedFocus);
        $check(event::TextEntered { unicode: 'a' as u32 });
        $check(event::KeyPressed {
            code: Key::Escape,
            scancode: Scancode::B,
            alt: false,
            control: false,
            shift: false,
            system: false,
        });
        $check(event::KeyReleased {
            code: Key::Escape,
            scancode: Scancode::B,
            alt: false,
            control: false,
            shift: false,
            system: false,
        });
        $check(event::MouseWheelScrolled {
            wheel: Wheel::Horizontal,
            delta: -1.5,
            position: Vector2::new(-4, 12),
        });
        $check(event::MouseButtonPressed { button: Button::Extra1, position: Vector2::new(1, 2) });
        $check(event::MouseButtonReleased { button: Button::Extra1, position: Vector2::new(1, 2) });
        $check(event::MouseMoved { position: Vector2::new(320, 240) });
        $check(event::MouseEntered);
        $check(event::MouseLeft);
        $check(event::JoystickButtonPressed { joystick_id: 1, button: 7 });
        $check(event::JoystickButtonReleased { joystick_id: 1, button: 7 });
        $check(event::JoystickMoved { joystick_id: 3, axis: Axis::PovX, position: -100.0 });
        $check(event::JoystickConnected { joystick_id: 7 });
        $check(event::JoystickDisconnected { joystick_id: 7 });
        $check(event::TouchBegan { finger: 0, position: Vector2::new(5, 5) });
        $check(event::TouchMoved { finger: 0, position: Vector2::new(6, 5) });
        $check(event::TouchEnded { finger: 0, position: Vector2::new(6, 5) });
        $check(event::SensorChanged {
            sensor: SensorType::Gravity,
            value: Vector3::new(0.0, -9.81, 0.0),
        });
    }};
}

// Calls `$check::<U>(event)` for every payload type `U`.
macro_rules! foreach_payload_type {
    ($check:ident, $event:expr) => {{
        let event: &Event = $event;
        $check::<event::Empty>(event);
        $check::<event::Closed>(event);
        $check::<event::Resized>(event);
        $check::<event::LostFocus>(event);
        $check::<event::GainedFocus>(event);
        $check::<event::TextEntered>(event);
        $check::<event::KeyPressed>(event);
        $check::<event::KeyReleased>(event);
        $check::<event::MouseWheelScrolled>(event);
        $check::<event::MouseButtonPressed>(event);
        $check::<event::MouseButtonReleased>(event);
        $check::<event::MouseMoved>(event);
        $check::<event::MouseEntered>(event);
        $check::<event::MouseLeft>(event);
        $check::<event::JoystickButtonPressed>(event);
        $check::<event::JoystickButtonReleased>(event);
        $check::<event::JoystickMoved>(event);
        $check::<event::JoystickConnected>(event);
        $check::<event::JoystickDisconnected>(event);
        $check::<event::TouchBegan>(event);
        $check::<event::TouchMoved>(event);
        $check::<event::TouchEnded>(event);
        $check::<event::SensorChanged>(event);
    }};
}

fn check_accessors<U: EventType + PartialEq>(event: &Event) {
    let held = event.kind() == U::KIND;
    assert_eq!(event.is::<U>(), held, "is::<{}>() on {}", U::KIND, event.kind());
    assert_eq!(event.get::<U>().is_some(), held, "get::<{}>() on {}", U::KIND, event.kind());
    match event.require::<U>() {
        Ok(_) => assert!(held),
        Err(error) => {
            assert!(!held);
            assert_eq!(error, WrongEventKind::new(U::KIND, event.kind()));
        },
    }
}

fn check_payload<T: EventType + PartialEq>(payload: T) {
    let event = Event::new(payload);
    assert_eq!(event.kind(), T::KIND);
    assert_eq!(event, payload.into_event());
    assert_eq!(event.get::<T>(), Some(&payload));
    assert_eq!(event.require::<T>(), Ok(&payload));
    assert_eq!(event.into_payload::<T>(), Ok(payload));
    foreach_payload_type!(check_accessors, &event);
}

fn check_copy<T: EventType + PartialEq>(payload: T) {
    let event = Event::new(payload);
    let copy = event;
    assert_eq!(copy, event);
    assert_eq!(copy.kind(), event.kind());
    assert_eq!(copy.get::<T>(), Some(&payload));
}

#[test]
fn test_every_kind_round_trips() {
    foreach_payload!(check_payload);
}

#[test]
fn test_event_copy() {
    foreach_payload!(check_copy);
}

#[test]
fn test_samples_cover_every_kind() {
    let events = [
        Event::from(event::Empty),
        Event::from(event::Closed),
        Event::from(event::Resized::default()),
        Event::from(event::LostFocus),
        Event::from(event::GainedFocus),
        Event::from(event::TextEntered::default()),
        Event::from(event::KeyPressed::default()),
        Event::from(event::KeyReleased::default()),
        Event::from(event::MouseWheelScrolled::default()),
        Event::from(event::MouseButtonPressed::default()),
        Event::from(event::MouseButtonReleased::default()),
        Event::from(event::MouseMoved::default()),
        Event::from(event::MouseEntered),
        Event::from(event::MouseLeft),
        Event::from(event::JoystickButtonPressed::default()),
        Event::from(event::JoystickButtonReleased::default()),
        Event::from(event::JoystickMoved::default()),
        Event::from(event::JoystickConnected::default()),
        Event::from(event::JoystickDisconnected::default()),
        Event::from(event::TouchBegan::default()),
        Event::from(event::TouchMoved::default()),
        Event::from(event::TouchEnded::default()),
        Event::from(event::SensorChanged::default()),
    ];
    let kinds: BTreeSet<EventKind> = events.iter().map(Event::kind).collect();
    assert_eq!(kinds.len(), EventKind::COUNT);
    assert!(EventKind::ALL.iter().all(|kind| kinds.contains(kind)));
    for (event, kind) in events.iter().zip(EventKind::ALL) {
        assert_eq!(event.kind(), kind);
    }
}

#[test]
fn test_default_is_empty() {
    let event = Event::default();
    assert_eq!(event.kind(), EventKind::Empty);
    foreach_payload_type!(check_accessors, &event);
}

#[test]
fn test_resized_scenario() {
    let event = Event::from(event::Resized { size: Vector2::new(800, 600) });
    assert_eq!(event.kind(), EventKind::Resized);
    assert_eq!(event.get::<event::Resized>().map(|resized| resized.size), Some((800, 600).into()));
    assert!(event.get::<event::Closed>().is_none());
}

#[test]
fn test_key_pressed_is_not_key_released() {
    let event = Event::from(event::KeyPressed {
        code: Key::Escape,
        scancode: Scancode::B,
        alt: false,
        control: false,
        shift: false,
        system: false,
    });
    assert!(event.is::<event::KeyPressed>());
    assert_eq!(event.require::<event::KeyPressed>().map(|key| key.code), Ok(Key::Escape));
    assert!(!event.is::<event::KeyReleased>());
    assert_eq!(
        event.require::<event::KeyReleased>().unwrap_err().to_string(),
        "expected KeyReleased event, found KeyPressed"
    );
}
