//! sysevent is a library for representing the events a windowing system reports: window
//! lifecycle changes, keyboard and text input, mouse, joystick, touch and sensor updates.
//!
//! # Reading events
//!
//! A backend hands out one [`Event`] per occurrence through the [`EventSource`] trait. Each
//! event holds exactly one [`EventKind`] together with the payload record of the same name from
//! the [`event`] module:
//!
//! ```
//! use sysevent::event::{self, Event, EventKind};
//! use sysevent::keyboard::{Key, Scancode};
//! use sysevent::{EventQueue, EventSource};
//!
//! let mut queue = EventQueue::new();
//! queue.push(event::Resized { size: (800, 600).into() });
//! queue.push(event::KeyPressed {
//!     code: Key::Escape,
//!     scancode: Scancode::Escape,
//!     ..Default::default()
//! });
//!
//! let mut open = true;
//! for event in queue.poll_events() {
//!     match event.kind() {
//!         EventKind::Closed => open = false,
//!         EventKind::KeyPressed => {
//!             if event.require::<event::KeyPressed>()?.code == Key::Escape {
//!                 open = false;
//!             }
//!         },
//!         _ => (),
//!     }
//! }
//! assert!(!open);
//! # Ok::<(), sysevent::error::WrongEventKind>(())
//! ```
//!
//! [`Event::get`] is the non-failing alternative to [`Event::require`], and plain `match` on the
//! [`Event`] enum works as well.
//!
//! # Tracking state
//!
//! [`InputState`] folds events into a snapshot that can be queried at any time ("is the left
//! mouse button held?").
//!
//! # Cargo Features
//!
//! * `serde`: Enables serialization/deserialization of every public value type with
//!   [Serde](https://crates.io/crates/serde).
//! * `mint`: Enables mint (math interoperability standard types) conversions for the vector
//!   types.
//!
//! # Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) records and never installs a
//! subscriber; that is left to the application.

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg_hide), doc(cfg_hide(doc, docsrs)))]
#![forbid(unsafe_code)]

pub use sysevent_core::{error, event, joystick, keyboard, mouse, sensor};
pub use sysevent_vector as vector;

pub mod event_queue;
pub mod event_source;
pub mod input_state;

pub use event::{Event, EventKind};
pub use event_queue::EventQueue;
pub use event_source::{EventSource, PollEvents};
pub use input_state::InputState;
