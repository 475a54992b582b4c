//! Fading position samples behind the controlled body.
//!
//! Observation only: nothing here feeds back into the simulation.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::body::Body;

pub const TRAIL_CAPACITY: usize = 40;
/// Lifetime of a fresh sample in ticks.
pub const TRAIL_LIFE: u32 = 25;
/// Per-axis speed a body must exceed for a sample to be recorded.
pub const TRAIL_SPEED_THRESHOLD: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSample {
    /// Center of the body when the sample was taken.
    pub position: Vec2,
    /// Remaining lifetime in ticks.
    pub life: u32,
}

impl TrailSample {
    /// Remaining life as a fraction in `(0, 1]`, for fading.
    pub fn alpha(&self) -> f32 {
        self.life as f32 / TRAIL_LIFE as f32
    }
}

/// Bounded FIFO of trail samples, oldest first.
#[derive(Debug, Clone)]
pub struct TrailRecorder {
    samples: VecDeque<TrailSample>,
    capacity: usize,
}

impl Default for TrailRecorder {
    fn default() -> Self {
        Self::with_capacity(TRAIL_CAPACITY)
    }
}

impl TrailRecorder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Records a sample for `body` if it is moving fast enough, then ages
    /// every sample by one tick and drops the expired ones.
    pub fn tick(&mut self, body: &Body) {
        self.record(body);
        self.age();
    }

    /// Appends a sample at the body's center when `|vx|` or `|vy|` exceeds the
    /// threshold, evicting the oldest samples beyond capacity.
    pub fn record(&mut self, body: &Body) {
        let v = body.velocity;
        if v.x.abs() <= TRAIL_SPEED_THRESHOLD && v.y.abs() <= TRAIL_SPEED_THRESHOLD {
            return;
        }
        self.samples.push_back(TrailSample {
            position: body.center(),
            life: TRAIL_LIFE,
        });
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn age(&mut self) {
        for sample in &mut self.samples {
            sample.life = sample.life.saturating_sub(1);
        }
        self.samples.retain(|s| s.life > 0);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn samples(&self) -> impl Iterator<Item = &TrailSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
