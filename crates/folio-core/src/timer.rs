//! Single-slot cancelable deadlines.
//!
//! Every arm hands out a fresh [`TimerToken`]. Re-arming or cancelling the
//! slot invalidates the previous token, so an expiry delivered late by the
//! host (a `setTimeout` callback that was already queued) is recognised as
//! stale and dropped.

/// Identity of one armed deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug)]
struct Deadline {
    token: TimerToken,
    due_ms: f64,
}

#[derive(Debug, Default)]
pub struct TimerSlot {
    next_generation: u64,
    armed: Option<Deadline>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the slot `delay_ms` from `now_ms`, replacing any pending deadline.
    pub fn arm(&mut self, now_ms: f64, delay_ms: f64) -> TimerToken {
        self.next_generation += 1;
        let token = TimerToken(self.next_generation);
        self.armed = Some(Deadline {
            token,
            due_ms: now_ms + delay_ms.max(0.0),
        });
        token
    }

    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.armed.take().map(|d| d.token)
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn pending(&self) -> Option<TimerToken> {
        self.armed.map(|d| d.token)
    }

    pub fn due_ms(&self) -> Option<f64> {
        self.armed.map(|d| d.due_ms)
    }

    /// Consume the deadline if it is due at `now_ms`.
    pub fn poll(&mut self, now_ms: f64) -> Option<TimerToken> {
        match self.armed {
            Some(d) if now_ms >= d.due_ms => {
                self.armed = None;
                Some(d.token)
            }
            _ => None,
        }
    }

    /// Consume the deadline only if `token` is the one currently armed.
    ///
    /// Used by hosts that schedule a real timer per arm; the timer callback
    /// reports its token and stale ones return `false`.
    pub fn take(&mut self, token: TimerToken) -> bool {
        match self.armed {
            Some(d) if d.token == token => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }
}
