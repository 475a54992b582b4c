//! Skip-based tick gate.
//!
//! A frame runs one simulation update and one render only when at least one
//! tick interval has elapsed since the last executed tick. Frames that arrive
//! early are skipped entirely and there is no accumulator, so a slow host
//! slows the simulation down instead of running catch-up steps.

use std::time::{Duration, Instant};

use gravity_physics::TICK_MS;
use tracing::trace;

/// Nominal tick interval.
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_MS);

/// Gate deciding which host frames execute a tick.
#[derive(Debug, Clone)]
pub struct FrameGate {
    interval: Duration,
    last_tick: Instant,
    frame_count: u64,
    update_count: u64,
}

impl FrameGate {
    /// Creates a gate whose first tick fires one interval after `start`.
    pub fn new(start: Instant) -> Self {
        Self::with_interval(start, TICK_INTERVAL)
    }

    pub fn with_interval(start: Instant, interval: Duration) -> Self {
        Self {
            interval,
            last_tick: start,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Returns `true` and records `now` as the last tick if at least one
    /// interval has elapsed. An `Instant` earlier than the last tick never fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    /// Runs one host frame: `update` then `render` if the gate fires,
    /// nothing otherwise. Returns whether a tick ran.
    pub fn frame(
        &mut self,
        now: Instant,
        update: impl FnOnce(),
        render: impl FnOnce(),
    ) -> bool {
        self.frame_count += 1;
        if !self.poll(now) {
            trace!(frame = self.frame_count, "frame skipped");
            return false;
        }
        update();
        render();
        self.update_count += 1;
        true
    }

    /// Time left until the gate would fire, zero if it would fire at `now`.
    pub fn until_next(&self, now: Instant) -> Duration {
        (self.last_tick + self.interval).saturating_duration_since(now)
    }

    /// Host frames seen by [`frame`](Self::frame).
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames that executed a tick.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub fn skipped_count(&self) -> u64 {
        self.frame_count - self.update_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
