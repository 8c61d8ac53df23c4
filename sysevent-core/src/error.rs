//! Common error types.

use std::{error, fmt};

use crate::event::EventKind;

/// The error type for when an [`Event`] is read as a kind it does not hold.
///
/// Returned by [`Event::require`] and the `TryFrom<Event>` conversions. Getting this error means
/// the caller assumed the wrong kind; check [`Event::kind`] first or use [`Event::get`], which
/// returns `None` instead.
///
/// [`Event`]: crate::event::Event
/// [`Event::require`]: crate::event::Event::require
/// [`Event::kind`]: crate::event::Event::kind
/// [`Event::get`]: crate::event::Event::get
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrongEventKind {
    expected: EventKind,
    found: EventKind,
}

impl WrongEventKind {
    /// Create a new [`WrongEventKind`].
    #[inline]
    pub fn new(expected: EventKind, found: EventKind) -> WrongEventKind {
        WrongEventKind { expected, found }
    }

    /// The kind the caller asked for.
    #[inline]
    pub fn expected(&self) -> EventKind {
        self.expected
    }

    /// The kind the event actually holds.
    #[inline]
    pub fn found(&self) -> EventKind {
        self.found
    }
}

impl fmt::Display for WrongEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "expected {} event, found {}", self.expected, self.found)
    }
}

impl error::Error for WrongEventKind {}

#[cfg(test)]
mod tests {
    #![allow(clippy::redundant_clone)]

    use super::*;

    // Eat attributes for testing
    #[test]
    fn ensure_fmt_does_not_panic() {
        let error = WrongEventKind::new(EventKind::Resized, EventKind::Closed);
        let _ = format!("{:?}, {}", error, error.clone());
    }

    #[test]
    fn display_names_both_kinds() {
        let error = WrongEventKind::new(EventKind::KeyPressed, EventKind::KeyReleased);
        assert_eq!(error.to_string(), "expected KeyPressed event, found KeyReleased");
        assert_eq!(error.expected(), EventKind::KeyPressed);
        assert_eq!(error.found(), EventKind::KeyReleased);
    }
}
