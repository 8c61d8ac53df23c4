//! Base types for system events.
//!
//! This crate contains the [`Event`](event::Event) value type and the input vocabulary it carries
//! (keys, scancodes, mouse buttons, joystick axes, sensor types). It has no platform code: window
//! backends produce these values and applications consume them.
//!
//! ## Cargo Features
//!
//! * `serde`: Enables serialization/deserialization of every public value type with
//!   [Serde](https://crates.io/crates/serde).

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg_hide), doc(cfg_hide(doc, docsrs)))]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod error;
pub mod event;
pub mod joystick;
pub mod keyboard;
pub mod mouse;
pub mod sensor;

pub use sysevent_vector as vector;
