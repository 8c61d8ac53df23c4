//! The producer side of the event stream.

use crate::event::Event;

/// Something that hands out events, one occurrence at a time.
///
/// Window backends implement this on top of their platform queue; [`EventQueue`] implements it
/// over an in-memory buffer. Blocking until an event arrives is a property of the backend and is
/// not part of this trait.
///
/// [`EventQueue`]: crate::event_queue::EventQueue
pub trait EventSource {
    /// Pops the next pending event, if any. Never blocks.
    fn poll_event(&mut self) -> Option<Event>;

    /// Returns an iterator that polls until no event is pending.
    ///
    /// ```
    /// use sysevent::event::{self, Event};
    /// use sysevent::{EventQueue, EventSource};
    ///
    /// let mut queue = EventQueue::new();
    /// queue.push(event::GainedFocus);
    /// queue.push(event::Closed);
    ///
    /// let mut open = true;
    /// for event in queue.poll_events() {
    ///     if event.is::<event::Closed>() {
    ///         open = false;
    ///     }
    /// }
    /// assert!(!open);
    /// assert!(queue.poll_event().is_none());
    /// ```
    fn poll_events(&mut self) -> PollEvents<'_, Self>
    where
        Self: Sized,
    {
        PollEvents { source: self }
    }
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn poll_event(&mut self) -> Option<Event> {
        (**self).poll_event()
    }
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    fn poll_event(&mut self) -> Option<Event> {
        (**self).poll_event()
    }
}

/// Iterator returned by [`EventSource::poll_events`].
#[derive(Debug)]
pub struct PollEvents<'a, S: ?Sized> {
    source: &'a mut S,
}

impl<S: EventSource + ?Sized> Iterator for PollEvents<'_, S> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        self.source.poll_event()
    }
}
