//! Input state reconstructed from events.
//!
//! [`InputState`] answers "is this key held right now?"-style questions for code that prefers
//! querying state over reacting to individual events. It is fed from the same events the
//! application receives, so it never talks to the platform.
//!
//! ```
//! use sysevent::event::{self, Event};
//! use sysevent::mouse::Button;
//! use sysevent::InputState;
//!
//! let mut state = InputState::new();
//! assert!(!state.is_button_pressed(Button::Left));
//!
//! state.handle(&Event::from(event::MouseButtonPressed {
//!     button: Button::Left,
//!     position: (10, 20).into(),
//! }));
//! assert!(state.is_button_pressed(Button::Left));
//! assert_eq!(state.mouse_position(), Some((10, 20).into()));
//! ```

use std::collections::{HashMap, HashSet};

use crate::event::Event;
use crate::joystick::{self, Axis};
use crate::keyboard::{Key, Scancode};
use crate::mouse::Button;
use crate::sensor::SensorType;
use crate::vector::{Vector2i, Vector2u, Vector3f};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct JoystickState {
    connected: bool,
    // One bit per button; `joystick::BUTTON_COUNT` is 32.
    buttons: u32,
    axes: [f32; Axis::COUNT],
}

/// Snapshot of keyboard, mouse, joystick, touch and sensor state.
///
/// A fresh state has nothing pressed, no known pointer position and no connected joystick. The
/// window is assumed focused until a [`LostFocus`](crate::event::LostFocus) event arrives.
#[derive(Debug, Clone)]
pub struct InputState {
    keys: HashSet<Key>,
    scancodes: HashSet<Scancode>,
    buttons: [bool; Button::COUNT],
    mouse_position: Option<Vector2i>,
    mouse_inside: bool,
    focused: bool,
    close_requested: bool,
    size: Option<Vector2u>,
    joysticks: [JoystickState; joystick::COUNT as usize],
    touches: HashMap<u32, Vector2i>,
    sensors: [Option<Vector3f>; SensorType::COUNT],
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
            scancodes: HashSet::new(),
            buttons: [false; Button::COUNT],
            mouse_position: None,
            mouse_inside: false,
            focused: true,
            close_requested: false,
            size: None,
            joysticks: Default::default(),
            touches: HashMap::new(),
            sensors: [None; SensorType::COUNT],
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event to the state.
    pub fn handle(&mut self, event: &Event) {
        match *event {
            Event::Empty(_) | Event::TextEntered(_) => (),
            Event::Closed(_) => self.close_requested = true,
            Event::Resized(resized) => self.size = Some(resized.size),
            Event::LostFocus(_) => {
                self.focused = false;
                self.release_all();
            },
            Event::GainedFocus(_) => self.focused = true,
            Event::KeyPressed(key) => {
                if key.code != Key::Unknown {
                    self.keys.insert(key.code);
                }
                if key.scancode != Scancode::Unknown {
                    self.scancodes.insert(key.scancode);
                }
            },
            Event::KeyReleased(key) => {
                self.keys.remove(&key.code);
                self.scancodes.remove(&key.scancode);
            },
            Event::MouseWheelScrolled(scroll) => self.mouse_position = Some(scroll.position),
            Event::MouseButtonPressed(press) => {
                self.buttons[press.button.index()] = true;
                self.mouse_position = Some(press.position);
            },
            Event::MouseButtonReleased(release) => {
                self.buttons[release.button.index()] = false;
                self.mouse_position = Some(release.position);
            },
            Event::MouseMoved(moved) => self.mouse_position = Some(moved.position),
            Event::MouseEntered(_) => self.mouse_inside = true,
            Event::MouseLeft(_) => self.mouse_inside = false,
            Event::JoystickButtonPressed(press) => {
                if let Some(mask) = button_mask(press.button) {
                    if let Some(joystick) = self.joystick_mut(press.joystick_id) {
                        joystick.buttons |= mask;
                    }
                }
            },
            Event::JoystickButtonReleased(release) => {
                if let Some(mask) = button_mask(release.button) {
                    if let Some(joystick) = self.joystick_mut(release.joystick_id) {
                        joystick.buttons &= !mask;
                    }
                }
            },
            Event::JoystickMoved(moved) => {
                if let Some(joystick) = self.joystick_mut(moved.joystick_id) {
                    joystick.axes[moved.axis.index()] = moved.position.clamp(-100.0, 100.0);
                }
            },
            Event::JoystickConnected(connected) => {
                if let Some(joystick) = self.joystick_mut(connected.joystick_id) {
                    joystick.connected = true;
                }
            },
            Event::JoystickDisconnected(disconnected) => {
                if let Some(joystick) = self.joystick_mut(disconnected.joystick_id) {
                    *joystick = JoystickState::default();
                }
            },
            Event::TouchBegan(touch) => {
                self.touches.insert(touch.finger, touch.position);
            },
            Event::TouchMoved(touch) => {
                self.touches.insert(touch.finger, touch.position);
            },
            Event::TouchEnded(touch) => {
                self.touches.remove(&touch.finger);
            },
            Event::SensorChanged(sensor) => {
                self.sensors[sensor.sensor.index()] = Some(sensor.value);
            },
        }
    }

    /// Applies every event of `events`, in order.
    pub fn handle_all<'a>(&mut self, events: impl IntoIterator<Item = &'a Event>) {
        for event in events {
            self.handle(event);
        }
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    pub fn is_scancode_pressed(&self, scancode: Scancode) -> bool {
        self.scancodes.contains(&scancode)
    }

    pub fn is_button_pressed(&self, button: Button) -> bool {
        self.buttons[button.index()]
    }

    /// Last known pointer position, relative to the top left of the window.
    pub fn mouse_position(&self) -> Option<Vector2i> {
        self.mouse_position
    }

    pub fn is_mouse_inside(&self) -> bool {
        self.mouse_inside
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Whether a [`Closed`](crate::event::Closed) event was seen.
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Last size reported by a [`Resized`](crate::event::Resized) event.
    pub fn size(&self) -> Option<Vector2u> {
        self.size
    }

    pub fn is_joystick_connected(&self, joystick_id: u32) -> bool {
        self.joystick(joystick_id).is_some_and(|joystick| joystick.connected)
    }

    pub fn is_joystick_button_pressed(&self, joystick_id: u32, button: u32) -> bool {
        match (self.joystick(joystick_id), button_mask(button)) {
            (Some(joystick), Some(mask)) => joystick.buttons & mask != 0,
            _ => false,
        }
    }

    /// Position of `axis`, in `[-100, 100]`. Zero for unknown joysticks.
    pub fn joystick_axis_position(&self, joystick_id: u32, axis: Axis) -> f32 {
        self.joystick(joystick_id).map_or(0.0, |joystick| joystick.axes[axis.index()])
    }

    pub fn touch_position(&self, finger: u32) -> Option<Vector2i> {
        self.touches.get(&finger).copied()
    }

    /// Fingers currently touching, with their positions, in no particular order.
    pub fn touches(&self) -> impl Iterator<Item = (u32, Vector2i)> + '_ {
        self.touches.iter().map(|(finger, position)| (*finger, *position))
    }

    /// Last value reported by the sensor.
    pub fn sensor_value(&self, sensor: SensorType) -> Option<Vector3f> {
        self.sensors[sensor.index()]
    }

    // Release events for keys held while the focus moves away are never delivered.
    fn release_all(&mut self) {
        tracing::trace!(
            keys = self.keys.len(),
            scancodes = self.scancodes.len(),
            "releasing held keys and buttons"
        );
        self.keys.clear();
        self.scancodes.clear();
        self.buttons = [false; Button::COUNT];
    }

    fn joystick(&self, joystick_id: u32) -> Option<&JoystickState> {
        self.joysticks.get(joystick_id as usize)
    }

    fn joystick_mut(&mut self, joystick_id: u32) -> Option<&mut JoystickState> {
        if !joystick::is_valid_id(joystick_id) {
            tracing::warn!(joystick_id, "ignoring event for out-of-range joystick");
            return None;
        }
        self.joysticks.get_mut(joystick_id as usize)
    }
}

fn button_mask(button: u32) -> Option<u32> {
    if !joystick::is_valid_button(button) {
        tracing::warn!(button, "ignoring out-of-range joystick button");
        return None;
    }
    Some(1 << button)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event;

    #[test]
    fn fresh_state_has_nothing_pressed() {
        let state = InputState::new();
        for button in Button::ALL {
            assert!(!state.is_button_pressed(button));
        }
        assert!(Key::ALL.iter().all(|key| !state.is_key_pressed(*key)));
        assert_eq!(state.mouse_position(), None);
        assert!(state.has_focus());
        assert!(!state.close_requested());
    }

    #[test]
    fn unknown_keys_are_not_tracked() {
        let mut state = InputState::new();
        state.handle(&Event::from(event::KeyPressed::default()));
        assert!(!state.is_key_pressed(Key::Unknown));
        assert!(!state.is_scancode_pressed(Scancode::Unknown));
    }

    #[test]
    fn joystick_buttons_use_a_mask() {
        let mut state = InputState::new();
        state.handle(&Event::from(event::JoystickButtonPressed { joystick_id: 2, button: 31 }));
        state.handle(&Event::from(event::JoystickButtonPressed { joystick_id: 2, button: 0 }));
        assert!(state.is_joystick_button_pressed(2, 31));
        assert!(state.is_joystick_button_pressed(2, 0));
        assert!(!state.is_joystick_button_pressed(2, 1));

        state.handle(&Event::from(event::JoystickButtonReleased { joystick_id: 2, button: 31 }));
        assert!(!state.is_joystick_button_pressed(2, 31));
        assert!(state.is_joystick_button_pressed(2, 0));
    }

    #[test]
    fn axis_positions_are_clamped() {
        let mut state = InputState::new();
        state.handle(&Event::from(event::JoystickMoved {
            joystick_id: 0,
            axis: Axis::PovY,
            position: 250.0,
        }));
        assert_eq!(state.joystick_axis_position(0, Axis::PovY), 100.0);
        assert_eq!(state.joystick_axis_position(0, Axis::X), 0.0);
    }
}
