//! Debounce ticketing for metadata lookups.
//!
//! The editor fires a catalog lookup 500 ms after the last keystroke. The
//! hazard: if the previous pending call is not cancelled before rescheduling,
//! a stale response can land after a newer one and overwrite it. The host UI
//! owns the actual timer; this module gives it an explicit generation ticket
//! so that "is this still the latest request?" is a comparison, not a guess.
//!
//! Usage: call [`Debouncer::schedule`] on every keystroke and capture the
//! ticket in the deferred callback; when the timer fires, run the lookup only
//! if [`Debouncer::should_fire`] still accepts that ticket.

use std::time::Duration;

/// Delay between the last keystroke and the metadata lookup.
pub const LOOKUP_DELAY: Duration = Duration::from_millis(500);

/// Monotonic generation counter for one debounced field.
#[derive(Debug, Default)]
pub struct Debouncer {
    seq: u64,
}

/// A claim ticket for one scheduled lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Debouncer {
    pub fn new() -> Self {
        Debouncer::default()
    }

    /// Invalidate any pending lookup and claim the next slot.
    pub fn schedule(&mut self) -> Ticket {
        self.seq += 1;
        Ticket(self.seq)
    }

    /// True only for the most recently issued ticket.
    pub fn should_fire(&self, ticket: Ticket) -> bool {
        ticket.0 == self.seq
    }
}
