//! Deadline-based autoplay scheduling.
//!
//! The engine is headless, so there is no timer: the host passes `now_ms`
//! into [`crate::Carousel::tick`] and the scheduler compares it against the
//! next-fire deadline.

/// Repeating schedule for automatic `next` requests.
///
/// The deadline keeps interval phase across suppressed ticks, like a
/// repeating timer would; an explicit restart re-bases the phase on the
/// moment of the last user action. At most one fire is reported per poll,
/// regardless of how far behind the deadline is (no catch-up).
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AutoplayScheduler {
    interval_ms: u64,
    deadline_ms: Option<u64>,
    stopped: bool,
}

impl AutoplayScheduler {
    pub(crate) fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            deadline_ms: None,
            stopped: false,
        }
    }

    pub(crate) fn is_configured(&self) -> bool {
        self.interval_ms > 0
    }

    pub(crate) fn is_running(&self) -> bool {
        self.is_configured() && !self.stopped
    }

    /// Swaps the interval; a running schedule picks it up on its next restart
    /// or poll. 0 stops autoplay entirely.
    pub(crate) fn set_interval(&mut self, interval_ms: u64) {
        if self.interval_ms == interval_ms {
            return;
        }
        self.interval_ms = interval_ms;
        self.deadline_ms = None;
        if interval_ms == 0 {
            self.stopped = true;
        }
    }

    pub(crate) fn stop(&mut self) {
        self.stopped = true;
        self.deadline_ms = None;
    }

    /// Stops, then re-arms with the phase measured from `now_ms`.
    pub(crate) fn restart(&mut self, now_ms: u64) {
        if !self.is_configured() {
            return;
        }
        self.stopped = false;
        self.deadline_ms = Some(now_ms + self.interval_ms);
    }

    /// Arms the schedule only if it is not already running.
    pub(crate) fn ensure_running(&mut self, now_ms: u64) {
        if self.is_configured() && (self.stopped || self.deadline_ms.is_none()) {
            self.restart(now_ms);
        }
    }

    /// Reports whether a tick is due, advancing the deadline either way.
    pub(crate) fn poll(&mut self, now_ms: u64) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(deadline) = self.deadline_ms else {
            // Self-arms on the first poll after construction.
            self.deadline_ms = Some(now_ms + self.interval_ms);
            return false;
        };
        if now_ms < deadline {
            return false;
        }
        // Keep interval phase, skipping any intervals that elapsed unseen.
        let mut next = deadline + self.interval_ms;
        while next <= now_ms {
            next += self.interval_ms;
        }
        self.deadline_ms = Some(next);
        true
    }
}
