//! Cancel-and-reschedule bookkeeping for delayed work.
//!
//! The timers themselves are dumb: a caller sleeps for [`Debouncer::delay_ms`]
//! and then presents its [`Ticket`]. Only the most recently issued ticket can
//! claim the pending value, so every earlier timer that wakes up finds nothing
//! to do. This keeps the cancellation rule independent of any UI event binding.

/// Handle returned by [`Debouncer::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Replace whatever is pending with `value` and restart the quiet period.
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Claim the pending value if `ticket` is still the latest one.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending value; outstanding tickets become inert.
    pub fn cancel(&mut self) -> Option<T> {
        self.generation = self.generation.wrapping_add(1);
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
