use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::boundary::WorldBounds;
use crate::trail::TrailSample;

/// Read-only copy of the world state after a tick, for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Number of ticks executed so far.
    pub tick: u64,
    pub bounds: WorldBounds,
    pub player: Body,
    /// Spawned bodies in spawn order.
    pub bodies: Vec<Body>,
    /// Trail samples, oldest first.
    pub trail: Vec<TrailSample>,
}

impl Snapshot {
    /// Drives the grounded indicator under the controlled body.
    pub fn player_grounded(&self) -> bool {
        self.player.grounded
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
