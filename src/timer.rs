//! Stopwatch-style timer driven by an externally supplied clock
//!
//! The timer never reads a clock on its own: every call takes the current
//! `Instant`, so the caller decides where monotonic time comes from.

use embassy_time::{Duration, Instant};

const ZERO: Duration = Duration::from_ticks(0);

/// Accumulating stopwatch with start/stop/reset semantics
///
/// Elapsed time accumulates while running and is frozen while stopped.
/// `reset` zeroes the accumulated time but keeps the running flag, so a
/// running timer continues counting from zero.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    /// Time accumulated before the current run
    accumulated: Duration,
    /// Start of the current run (meaningful only while running)
    started_at: Instant,
    running: bool,
    /// Set by the first `start`, never cleared
    armed: bool,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a stopped timer that has never been started
    pub const fn new() -> Self {
        Self {
            accumulated: ZERO,
            started_at: Instant::from_ticks(0),
            running: false,
            armed: false,
        }
    }

    /// Start counting. Does nothing if already running.
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.started_at = now;
        self.running = true;
        self.armed = true;
    }

    /// Stop counting, keeping the elapsed time
    pub fn stop(&mut self, now: Instant) {
        self.accumulated = self.get(now);
        self.running = false;
    }

    /// Zero the elapsed time without changing the running flag
    pub fn reset(&mut self, now: Instant) {
        self.accumulated = ZERO;
        self.started_at = now;
    }

    /// Reset and start
    pub fn restart(&mut self, now: Instant) {
        self.reset(now);
        self.start(now);
    }

    /// Elapsed time at `now`
    pub fn get(&self, now: Instant) -> Duration {
        if self.running {
            self.accumulated + now.saturating_duration_since(self.started_at)
        } else {
            self.accumulated
        }
    }

    /// Elapsed time at `now` in seconds
    #[allow(clippy::cast_precision_loss)]
    pub fn seconds(&self, now: Instant) -> f32 {
        self.get(now).as_micros() as f32 / 1_000_000.0
    }

    /// Check if at least `threshold` has elapsed
    ///
    /// Always false for a timer that was never started.
    pub fn has_elapsed(&self, threshold: Duration, now: Instant) -> bool {
        self.armed && self.get(now) >= threshold
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }
}
