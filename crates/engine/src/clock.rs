//! Play clock.
//!
//! Tracks wall time since the last time it was banked into the session, and a
//! monotonic millisecond counter used to stamp spawn events.

use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct PlayClock {
    origin: Instant,
    last_fold: Instant,
}

impl PlayClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(origin: Instant) -> Self {
        Self {
            origin,
            last_fold: origin,
        }
    }

    /// Milliseconds since the clock started.
    pub fn now_ms(&self) -> u64 {
        self.ms_at(Instant::now())
    }

    pub fn ms_at(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.origin).as_millis() as u64
    }

    /// Seconds not yet banked.
    pub fn pending_secs(&self) -> f64 {
        self.pending_at(Instant::now())
    }

    pub fn pending_at(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.last_fold).as_secs_f64()
    }

    /// Return the unbanked seconds and restart the pending interval.
    pub fn fold(&mut self) -> f64 {
        self.fold_at(Instant::now())
    }

    pub fn fold_at(&mut self, now: Instant) -> f64 {
        let secs = self.pending_at(now);
        self.last_fold = now.max(self.last_fold);
        secs
    }
}

impl Default for PlayClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Format whole seconds as `M:SS`, or `H:MM:SS` past an hour.
pub fn format_playtime(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}
