use crate::errors::CANCELLED_MESSAGE;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Time source for the cancellation deadline. Injected so tests can drive
/// expiry deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Shared cancellation signal with a time-to-live.
///
/// One writer (the user-facing cancel action) races one reader (the mutation
/// loop, at its periodic check points). There is no explicit clear: the flag
/// disarms itself when the TTL elapses.
pub struct CancelFlag {
    deadline: Mutex<Option<Instant>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl CancelFlag {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            deadline: Mutex::new(None),
            ttl,
            clock,
        }
    }

    /// Arms the flag for `ttl` from now and returns the confirmation message
    /// shown to the user.
    pub fn cancel(&self) -> &'static str {
        let deadline = self.clock.now() + self.ttl;
        *self.deadline.lock() = Some(deadline);
        CANCELLED_MESSAGE
    }

    /// True only while the flag is armed and not yet expired.
    pub fn is_cancelled(&self) -> bool {
        match *self.deadline.lock() {
            Some(deadline) => self.clock.now() < deadline,
            None => false,
        }
    }
}

impl Default for CancelFlag {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CANCEL_TTL)
    }
}
