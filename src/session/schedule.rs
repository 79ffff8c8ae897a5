use std::time::{Duration, Instant};

/// A deferred computer move, valid only for the session generation it
/// was issued in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTicket {
    generation: u64,
    due: Instant,
}

impl AiTicket {
    pub(crate) fn new(generation: u64, issued_at: Instant, delay: Duration) -> Self {
        AiTicket {
            generation,
            due: issued_at + delay,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Earliest instant the move should be played.
    pub fn due(&self) -> Instant {
        self.due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    /// Time left before the ticket is due, zero once it is.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}
