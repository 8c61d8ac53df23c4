//! Replays a short recorded session through an [`EventQueue`] and logs what happens.
//!
//! Run with `RUST_LOG=trace` to also see the queue's own records.

use std::error::Error;

use sysevent::event::{self, Event, EventKind};
use sysevent::joystick::Axis;
use sysevent::keyboard::{Key, Scancode};
use sysevent::mouse::{Button, Wheel};
use sysevent::sensor::SensorType;
use sysevent::vector::{Vector2, Vector3};
use sysevent::{EventQueue, EventSource, InputState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn recorded_session() -> EventQueue {
    let mut queue = EventQueue::new();
    queue.push(event::GainedFocus);
    queue.push(event::Resized { size: Vector2::new(1280, 720) });
    queue.push(event::MouseEntered);
    queue.push(event::MouseMoved { position: Vector2::new(640, 360) });
    queue.push(event::MouseButtonPressed { button: Button::Left, position: Vector2::new(640, 360) });
    queue.push(event::MouseWheelScrolled {
        wheel: Wheel::Vertical,
        delta: -1.0,
        position: Vector2::new(640, 360),
    });
    queue.push(event::MouseButtonReleased { button: Button::Left, position: Vector2::new(642, 361) });
    queue.push(event::TextEntered { unicode: 'h' as u32 });
    queue.push(event::KeyPressed {
        code: Key::H,
        scancode: Scancode::H,
        shift: true,
        ..Default::default()
    });
    queue.push(event::JoystickConnected { joystick_id: 0 });
    queue.push(event::JoystickMoved { joystick_id: 0, axis: Axis::X, position: 73.5 });
    queue.push(event::TouchBegan { finger: 0, position: Vector2::new(12, 34) });
    queue.push(event::SensorChanged {
        sensor: SensorType::Gravity,
        value: Vector3::new(0.0, -9.81, 0.0),
    });
    queue.push(event::LostFocus);
    queue.push(event::KeyPressed { code: Key::Escape, scancode: Scancode::Escape, ..Default::default() });
    queue.push(event::Closed);
    queue
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut queue = recorded_session();
    let mut state = InputState::new();

    while let Some(event) = queue.poll_event() {
        state.handle(&event);

        match event {
            Event::Resized(resized) => info!(size = ?resized.size, "resized"),
            Event::TextEntered(text) => match text.as_char() {
                Some(ch) => info!(%ch, "text entered"),
                None => warn!(unicode = text.unicode, "invalid text input"),
            },
            Event::KeyPressed(key) => {
                info!(code = %key.code, modifiers = ?key.modifiers(), "key pressed");
                if key.code == Key::Escape {
                    info!("escape pressed, stopping");
                    break;
                }
            },
            Event::MouseWheelScrolled(scroll) => {
                info!(wheel = %scroll.wheel, delta = scroll.delta, "scrolled")
            },
            _ if event.is_mouse_event() => info!(
                kind = %event.kind(),
                position = ?state.mouse_position(),
                left = state.is_button_pressed(Button::Left),
                "mouse"
            ),
            _ => info!(kind = %event.kind(), "event"),
        }

        if event.kind() == EventKind::JoystickMoved {
            let moved = event.require::<event::JoystickMoved>()?;
            info!(
                joystick = moved.joystick_id,
                axis = %moved.axis,
                position = state.joystick_axis_position(moved.joystick_id, moved.axis),
                "joystick"
            );
        }
    }

    info!(
        focused = state.has_focus(),
        held = state.is_key_pressed(Key::H),
        pending = queue.len(),
        close_requested = state.close_requested(),
        "session replayed"
    );
    Ok(())
}
