//! An in-memory [`EventSource`].

use std::collections::VecDeque;

use crate::event::{Empty, Event};
use crate::event_source::EventSource;

/// A first-in, first-out buffer of events.
///
/// Useful to replay recorded input, to inject synthetic events, and to drive code written
/// against [`EventSource`] in tests. [`Empty`] events carry no occurrence and are dropped on
/// push.
#[derive(Debug, Default, Clone)]
pub struct EventQueue {
    pending: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { pending: VecDeque::with_capacity(capacity) }
    }

    /// Appends an event, or any payload type, to the back of the queue.
    pub fn push(&mut self, event: impl Into<Event>) {
        let event = event.into();
        if event.is::<Empty>() {
            tracing::trace!("dropping empty event");
            return;
        }

        tracing::trace!(kind = %event.kind(), pending = self.pending.len(), "queued event");
        self.pending.push_back(event);
    }

    /// The event the next poll will return.
    pub fn peek(&self) -> Option<&Event> {
        self.pending.front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops every pending event.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl EventSource for EventQueue {
    fn poll_event(&mut self) -> Option<Event> {
        let event = self.pending.pop_front()?;
        tracing::trace!(kind = %event.kind(), pending = self.pending.len(), "polled event");
        Some(event)
    }
}

impl<E: Into<Event>> Extend<E> for EventQueue {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for event in iter {
            self.push(event);
        }
    }
}

impl<E: Into<Event>> FromIterator<E> for EventQueue {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut queue = EventQueue::new();
        queue.extend(iter);
        queue
    }
}
