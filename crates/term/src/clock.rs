//! Fixed-interval gravity clock.
//!
//! The engine never owns a timer. The front-end keeps one of these, feeds it a
//! monotonic millisecond timestamp, and calls `tick()` whenever `poll` says the
//! interval has elapsed. When `tick()` reports the game paused the clock is
//! disarmed; resuming re-arms it a full interval out, so there is no catch-up
//! tick.

#[derive(Debug, Clone)]
pub struct GravityClock {
    interval_ms: u64,
    next_due_ms: Option<u64>,
}

impl GravityClock {
    /// A disarmed clock firing every `interval_ms` (at least 1ms).
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Schedule the next tick one interval after `now_ms`.
    pub fn arm(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    pub fn disarm(&mut self) {
        self.next_due_ms = None;
    }

    /// Arm when the game runs, disarm when it is paused.
    ///
    /// An already-armed clock keeps its schedule.
    pub fn follow(&mut self, running: bool, now_ms: u64) {
        match (running, self.is_armed()) {
            (true, false) => self.arm(now_ms),
            (false, true) => self.disarm(),
            _ => {}
        }
    }

    /// Whether a tick is due; if so the next one is scheduled.
    ///
    /// Late polls fire once and reschedule from `now_ms`, never in a burst.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                self.arm(now_ms);
                true
            }
            _ => false,
        }
    }

    /// Milliseconds until the next tick, `None` when disarmed.
    pub fn timeout_ms(&self, now_ms: u64) -> Option<u64> {
        self.next_due_ms.map(|due| due.saturating_sub(now_ms))
    }
}

impl Default for GravityClock {
    fn default() -> Self {
        Self::new(crate::types::TICK_INTERVAL_MS)
    }
}
