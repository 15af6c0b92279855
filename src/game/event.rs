//! Event System
//!
//! Camera effects finish asynchronously from the scene's point of view.
//! The effect layer queues a completion event when an effect ends, and the
//! app loop drains the queue once per frame and hands each event to the
//! scene.

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events in send order (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A timed camera effect has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectEvent {
    ShakeComplete,
    FadeComplete,
}
