//! 2D rigid-body sandbox physics: integration, world boundaries, AABB collision
//! detection and impulse resolution, plus the trail side-channel.
//!
//! [`World`] owns all simulation state and advances it one fixed tick at a time
//! through [`World::step`], driven by an explicit [`TickInput`] snapshot.

mod arena;
mod body;
pub mod boundary;
pub mod collision;
mod input;
pub mod integrate;
mod snapshot;
mod trail;
mod world;

pub use arena::BodyArena;
pub use body::{Body, BodyId, BodyKind, Shape};
pub use boundary::WorldBounds;
pub use collision::{ImpulseResolver, Resolution, overlaps};
pub use input::{ControlInput, TickInput};
pub use snapshot::Snapshot;
pub use trail::{TrailRecorder, TrailSample};
pub use world::World;

/// Nominal duration of one simulation tick in milliseconds.
pub const TICK_MS: u64 = 16;
