//! The [`Event`] enum and its payload types.
//!
//! An [`Event`] holds all the information about one system event that just happened: the kind
//! of the event (window closed, key pressed, mouse moved, ...) together with the payload record
//! for that kind. Every kind has a payload type of the same name in this module, and every
//! payload type names exactly one kind.
//!
//! There are two ways to consume events. Matching on the enum (or on [`Event::kind`]) works well
//! when most kinds need handling:
//!
//! ```
//! use sysevent_core::event::{self, Event};
//! use sysevent_core::keyboard::{Key, Scancode};
//!
//! # let mut running = true;
//! let event = Event::from(event::KeyPressed {
//!     code: Key::Escape,
//!     scancode: Scancode::Escape,
//!     ..Default::default()
//! });
//!
//! match event {
//!     Event::Closed(_) => running = false,
//!     Event::KeyPressed(key) if key.code == Key::Escape => running = false,
//!     Event::Resized(resized) => println!("new size: {:?}", resized.size),
//!     _ => (),
//! }
//! # assert!(!running);
//! ```
//!
//! [`Event::get`] returns the payload when the event holds that kind and `None` otherwise, which
//! suits code interested in only a few kinds:
//!
//! ```
//! use sysevent_core::event::{self, Event};
//!
//! let event = Event::from(event::Resized { size: (800, 600).into() });
//!
//! if let Some(resized) = event.get::<event::Resized>() {
//!     assert_eq!((resized.size.x, resized.size.y), (800, 600));
//! }
//! assert!(event.get::<event::Closed>().is_none());
//! ```
//!
//! Only the payload types declared here are accepted by the generic accessors:
//!
//! ```compile_fail
//! use sysevent_core::event::Event;
//!
//! struct NotAnEvent;
//! let _ = Event::new(NotAnEvent);
//! ```
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use sysevent_vector::{Vector2i, Vector2u, Vector3f};

use crate::error::WrongEventKind;
use crate::joystick;
use crate::keyboard::{Key, ModifiersState, Scancode};
use crate::mouse;
use crate::sensor::SensorType;

/// Default event, held by [`Event::default`]. Carries no occurrence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Empty;

/// The window requested to be closed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Closed;

/// The window was resized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Resized {
    /// New size, in pixels.
    pub size: Vector2u,
}

/// The window lost the focus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LostFocus;

/// The window gained the focus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GainedFocus;

/// A character was entered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextEntered {
    /// UTF-32 Unicode value of the character.
    pub unicode: u32,
}

impl TextEntered {
    /// Returns the entered character, or `None` if `unicode` is not a Unicode scalar value.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.unicode)
    }
}

/// A key was pressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyPressed {
    /// Code of the key.
    pub code: Key,
    /// Physical code of the key.
    pub scancode: Scancode,
    /// Is the Alt key pressed?
    pub alt: bool,
    /// Is the Control key pressed?
    pub control: bool,
    /// Is the Shift key pressed?
    pub shift: bool,
    /// Is the System key pressed?
    pub system: bool,
}

impl KeyPressed {
    /// The modifier flags as a [`ModifiersState`].
    pub fn modifiers(&self) -> ModifiersState {
        ModifiersState::from_keys(self.alt, self.control, self.shift, self.system)
    }
}

/// A key was released.
///
/// Carries the same fields as [`KeyPressed`]; the two stay distinct kinds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyReleased {
    pub code: Key,
    pub scancode: Scancode,
    pub alt: bool,
    pub control: bool,
    pub shift: bool,
    pub system: bool,
}

impl KeyReleased {
    /// The modifier flags as a [`ModifiersState`].
    pub fn modifiers(&self) -> ModifiersState {
        ModifiersState::from_keys(self.alt, self.control, self.shift, self.system)
    }
}

/// The mouse wheel was scrolled.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MouseWheelScrolled {
    /// Which wheel (for mice with multiple ones).
    pub wheel: mouse::Wheel,
    /// Wheel offset (positive is up/left, negative is down/right).
    ///
    /// High-precision mice may use non-integral offsets.
    pub delta: f32,
    /// Position of the mouse pointer, relative to the top left of the owner window.
    pub position: Vector2i,
}

/// A mouse button was pressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MouseButtonPressed {
    /// Code of the button that has been pressed.
    pub button: mouse::Button,
    /// Position of the mouse pointer, relative to the top left of the owner window.
    pub position: Vector2i,
}

/// A mouse button was released.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MouseButtonReleased {
    /// Code of the button that has been released.
    pub button: mouse::Button,
    /// Position of the mouse pointer, relative to the top left of the owner window.
    pub position: Vector2i,
}

/// The mouse cursor moved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MouseMoved {
    /// Position of the mouse pointer, relative to the top left of the owner window.
    pub position: Vector2i,
}

/// The mouse cursor entered the area of the window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MouseEntered;

/// The mouse cursor left the area of the window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MouseLeft;

/// A joystick button was pressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoystickButtonPressed {
    /// Index of the joystick, in `0..joystick::COUNT`.
    pub joystick_id: u32,
    /// Index of the button that has been pressed, in `0..joystick::BUTTON_COUNT`.
    pub button: u32,
}

/// A joystick button was released.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoystickButtonReleased {
    pub joystick_id: u32,
    pub button: u32,
}

/// The joystick moved along an axis.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoystickMoved {
    /// Index of the joystick, in `0..joystick::COUNT`.
    pub joystick_id: u32,
    /// Axis on which the joystick moved.
    pub axis: joystick::Axis,
    /// New position on the axis, in `[-100, 100]`.
    pub position: f32,
}

/// A joystick was connected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoystickConnected {
    /// Index of the joystick, in `0..joystick::COUNT`.
    pub joystick_id: u32,
}

/// A joystick was disconnected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoystickDisconnected {
    pub joystick_id: u32,
}

/// A touch began.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchBegan {
    /// Index of the finger in case of multi-touch events.
    pub finger: u32,
    /// Position of the touch, relative to the top left of the owner window.
    pub position: Vector2i,
}

/// A touch moved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchMoved {
    pub finger: u32,
    pub position: Vector2i,
}

/// A touch ended.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchEnded {
    pub finger: u32,
    pub position: Vector2i,
}

/// A sensor value changed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorChanged {
    /// Type of the sensor.
    pub sensor: SensorType,
    /// Current value of the sensor on the X, Y, and Z axes.
    pub value: Vector3f,
}

mod sealed {
    pub trait Sealed {}
}

/// A payload type of [`Event`].
///
/// Implemented for exactly the payload types of this module and sealed against outside
/// implementations, so the generic accessors of [`Event`] only accept real event kinds.
pub trait EventType: sealed::Sealed + Copy + fmt::Debug + Send + Sync + 'static {
    /// The kind that holds this payload.
    const KIND: EventKind;

    /// Returns the payload if `event` holds this kind.
    fn from_event(event: &Event) -> Option<&Self>;

    /// Returns the payload if `event` holds this kind, or gives the event back.
    fn try_from_event(event: Event) -> Result<Self, Event>;

    /// Wraps the payload in an [`Event`].
    fn into_event(self) -> Event;
}

// One list drives `EventKind`, `Event` and the `EventType` impls so that kinds and payload
// types cannot drift apart.
macro_rules! events {
    ($(
        $(#[$doc:meta])*
        $name:ident
    ),+ $(,)?) => {
        const KIND_COUNT: usize = [$(stringify!($name)),+].len();

        /// Enumeration of the different kinds of events.
        ///
        /// Each kind maps 1-to-1 to the payload type of the same name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum EventKind {
            $(
                $(#[$doc])*
                $name,
            )+
        }

        impl EventKind {
            /// Every kind, in declaration order.
            pub const ALL: [EventKind; KIND_COUNT] = [$(EventKind::$name),+];

            /// Number of kinds.
            pub const COUNT: usize = KIND_COUNT;

            /// The name of the kind, which is also the name of its payload type.
            pub const fn name(self) -> &'static str {
                match self {
                    $(EventKind::$name => stringify!($name),)+
                }
            }
        }

        /// Defines a system event and its parameters.
        ///
        /// Exactly one kind is held at a time. See the [module-level docs](self) for the
        /// different ways of reading it.
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum Event {
            $(
                $(#[$doc])*
                $name($name),
            )+
        }

        impl Event {
            /// Returns the kind of the event.
            #[inline]
            pub const fn kind(&self) -> EventKind {
                match self {
                    $(Event::$name(_) => EventKind::$name,)+
                }
            }
        }

        $(
            impl sealed::Sealed for $name {}

            impl EventType for $name {
                const KIND: EventKind = EventKind::$name;

                #[inline]
                fn from_event(event: &Event) -> Option<&Self> {
                    match event {
                        Event::$name(payload) => Some(payload),
                        _ => None,
                    }
                }

                #[inline]
                fn try_from_event(event: Event) -> Result<Self, Event> {
                    match event {
                        Event::$name(payload) => Ok(payload),
                        other => Err(other),
                    }
                }

                #[inline]
                fn into_event(self) -> Event {
                    Event::$name(self)
                }
            }

            impl From<$name> for Event {
                #[inline]
                fn from(payload: $name) -> Self {
                    Event::$name(payload)
                }
            }

            impl TryFrom<Event> for $name {
                type Error = WrongEventKind;

                #[inline]
                fn try_from(event: Event) -> Result<Self, Self::Error> {
                    event.into_payload()
                }
            }
        )+
    };
}

events! {
    /// Default kind.
    Empty,
    /// The window requested to be closed.
    Closed,
    /// The window was resized.
    Resized,
    /// The window lost the focus.
    LostFocus,
    /// The window gained the focus.
    GainedFocus,
    /// A character was entered.
    TextEntered,
    /// A key was pressed.
    KeyPressed,
    /// A key was released.
    KeyReleased,
    /// The mouse wheel was scrolled.
    MouseWheelScrolled,
    /// A mouse button was pressed.
    MouseButtonPressed,
    /// A mouse button was released.
    MouseButtonReleased,
    /// The mouse cursor moved.
    MouseMoved,
    /// The mouse cursor entered the area of the window.
    MouseEntered,
    /// The mouse cursor left the area of the window.
    MouseLeft,
    /// A joystick button was pressed.
    JoystickButtonPressed,
    /// A joystick button was released.
    JoystickButtonReleased,
    /// The joystick moved along an axis.
    JoystickMoved,
    /// A joystick was connected.
    JoystickConnected,
    /// A joystick was disconnected.
    JoystickDisconnected,
    /// A touch event began.
    TouchBegan,
    /// A touch moved.
    TouchMoved,
    /// A touch event ended.
    TouchEnded,
    /// A sensor value changed.
    SensorChanged,
}

impl EventKind {
    /// Closed, Resized, LostFocus and GainedFocus.
    pub const fn is_window_event(self) -> bool {
        matches!(
            self,
            EventKind::Closed | EventKind::Resized | EventKind::LostFocus | EventKind::GainedFocus
        )
    }

    /// TextEntered, KeyPressed and KeyReleased.
    pub const fn is_keyboard_event(self) -> bool {
        matches!(self, EventKind::TextEntered | EventKind::KeyPressed | EventKind::KeyReleased)
    }

    pub const fn is_mouse_event(self) -> bool {
        matches!(
            self,
            EventKind::MouseWheelScrolled
                | EventKind::MouseButtonPressed
                | EventKind::MouseButtonReleased
                | EventKind::MouseMoved
                | EventKind::MouseEntered
                | EventKind::MouseLeft
        )
    }

    pub const fn is_joystick_event(self) -> bool {
        matches!(
            self,
            EventKind::JoystickButtonPressed
                | EventKind::JoystickButtonReleased
                | EventKind::JoystickMoved
                | EventKind::JoystickConnected
                | EventKind::JoystickDisconnected
        )
    }

    pub const fn is_touch_event(self) -> bool {
        matches!(self, EventKind::TouchBegan | EventKind::TouchMoved | EventKind::TouchEnded)
    }

    pub const fn is_sensor_event(self) -> bool {
        matches!(self, EventKind::SensorChanged)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Default for Event {
    fn default() -> Self {
        Event::Empty(Empty)
    }
}

impl Event {
    /// Wraps a payload in an event.
    #[inline]
    pub fn new<T: EventType>(payload: T) -> Self {
        payload.into_event()
    }

    /// Returns `true` if the event holds the kind of `T`.
    #[inline]
    pub fn is<T: EventType>(&self) -> bool {
        self.kind() == T::KIND
    }

    /// Returns the payload if the event holds the kind of `T`, and `None` otherwise.
    ///
    /// This never fails and is the accessor to use when the kind is not already known.
    #[inline]
    pub fn get<T: EventType>(&self) -> Option<&T> {
        T::from_event(self)
    }

    /// Returns the payload of the kind the caller knows the event holds.
    ///
    /// # Errors
    ///
    /// Returns [`WrongEventKind`] if the event holds another kind. That is a bug in the caller,
    /// never a condition to retry.
    pub fn require<T: EventType>(&self) -> Result<&T, WrongEventKind> {
        T::from_event(self).ok_or_else(|| self.wrong_kind(T::KIND))
    }

    /// Consumes the event and returns its payload.
    ///
    /// # Errors
    ///
    /// Returns [`WrongEventKind`] if the event holds another kind.
    pub fn into_payload<T: EventType>(self) -> Result<T, WrongEventKind> {
        T::try_from_event(self).map_err(|event| event.wrong_kind(T::KIND))
    }

    pub fn is_window_event(&self) -> bool {
        self.kind().is_window_event()
    }

    pub fn is_keyboard_event(&self) -> bool {
        self.kind().is_keyboard_event()
    }

    pub fn is_mouse_event(&self) -> bool {
        self.kind().is_mouse_event()
    }

    pub fn is_joystick_event(&self) -> bool {
        self.kind().is_joystick_event()
    }

    pub fn is_touch_event(&self) -> bool {
        self.kind().is_touch_event()
    }

    pub fn is_sensor_event(&self) -> bool {
        self.kind().is_sensor_event()
    }

    fn wrong_kind(&self, expected: EventKind) -> WrongEventKind {
        let error = WrongEventKind::new(expected, self.kind());
        tracing::debug!(expected = %expected, found = %error.found(), "event read as the wrong kind");
        error
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use sysevent_vector::Vector2;

    use super::*;

    #[test]
    fn default_is_empty() {
        let event = Event::default();
        assert_eq!(event.kind(), EventKind::Empty);
        assert!(event.is::<Empty>());
        assert!(!event.is::<Closed>());
        assert_eq!(event.get::<Empty>(), Some(&Empty));
    }

    #[test]
    fn kinds_are_distinct_and_ordered() {
        assert_eq!(EventKind::COUNT, 23);
        assert_eq!(EventKind::ALL[0], EventKind::Empty);
        assert_eq!(EventKind::ALL[22], EventKind::SensorChanged);
        let unique: HashSet<_> = EventKind::ALL.iter().collect();
        assert_eq!(unique.len(), EventKind::COUNT);
    }

    #[test]
    fn resized() {
        let event = Event::from(Resized { size: Vector2::new(800, 600) });
        assert_eq!(event.kind(), EventKind::Resized);
        assert_eq!(event.get::<Resized>().map(|r| r.size), Some(Vector2::new(800, 600)));
        assert!(event.get::<Closed>().is_none());
    }

    #[test]
    fn same_fields_different_kinds() {
        let pressed = KeyPressed {
            code: Key::Escape,
            scancode: Scancode::B,
            alt: false,
            control: false,
            shift: false,
            system: false,
        };
        let event = Event::new(pressed);
        assert!(event.is::<KeyPressed>());
        assert!(!event.is::<KeyReleased>());
        assert_eq!(event.require::<KeyPressed>().map(|k| k.code), Ok(Key::Escape));
        assert!(event.get::<KeyReleased>().is_none());
    }

    #[test]
    fn require_reports_mismatch() {
        let event = Event::from(Closed);
        let error = event.require::<Resized>().unwrap_err();
        assert_eq!(error, WrongEventKind::new(EventKind::Resized, EventKind::Closed));
    }

    #[test]
    fn into_payload() {
        let event = Event::from(TextEntered { unicode: 'é' as u32 });
        assert_eq!(event.into_payload::<TextEntered>(), Ok(TextEntered { unicode: 0xE9 }));
        assert_eq!(
            event.into_payload::<MouseLeft>(),
            Err(WrongEventKind::new(EventKind::MouseLeft, EventKind::TextEntered))
        );
        assert_eq!(TextEntered::try_from(event).ok().and_then(|t| t.as_char()), Some('é'));
        assert_eq!(Closed::try_from(event).map_err(|e| e.found()), Err(EventKind::TextEntered));
    }

    #[test]
    fn invalid_code_point() {
        assert_eq!(TextEntered { unicode: 0xD800 }.as_char(), None);
    }

    #[test]
    fn categories() {
        assert!(Event::from(Closed).is_window_event());
        assert!(Event::from(TextEntered::default()).is_keyboard_event());
        assert!(Event::from(MouseLeft).is_mouse_event());
        assert!(Event::from(JoystickConnected { joystick_id: 0 }).is_joystick_event());
        assert!(Event::from(TouchEnded::default()).is_touch_event());
        assert!(Event::from(SensorChanged::default()).is_sensor_event());

        let empty = Event::default();
        assert!(!empty.is_window_event());
        assert!(!empty.is_keyboard_event());
        assert!(!empty.is_mouse_event());
        assert!(!empty.is_joystick_event());
        assert!(!empty.is_touch_event());
        assert!(!empty.is_sensor_event());
    }

    #[test]
    fn key_modifiers() {
        let released = KeyReleased { code: Key::Z, control: true, system: true, ..Default::default() };
        assert_eq!(released.modifiers(), ModifiersState::CONTROL | ModifiersState::SYSTEM);
    }

    #[test]
    fn kind_display() {
        assert_eq!(EventKind::JoystickMoved.to_string(), "JoystickMoved");
        assert_eq!(<MouseMoved as EventType>::KIND, EventKind::MouseMoved);
    }

    #[test]
    fn event_is_small_and_copy() {
        fn is_copy<T: Copy>() {}
        is_copy::<Event>();
        assert!(std::mem::size_of::<Event>() <= 24);
    }
}
