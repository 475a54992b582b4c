//! World-rectangle containment with per-class restitution.

use glam::Vec2;
use gravity_math::Aabb;
use serde::{Deserialize, Serialize};

use crate::body::{Body, BodyKind};

/// Restitution of the controlled body against ceiling and walls.
pub const CONTROLLED_WALL_RESTITUTION: f32 = 0.5;
/// Extra horizontal drag while the controlled body touches the floor.
pub const CONTROLLED_FLOOR_DRAG_X: f32 = 0.8;

pub const SPAWNED_FLOOR_RESTITUTION: f32 = 0.6;
pub const SPAWNED_FLOOR_DRAG_X: f32 = 0.92;
pub const SPAWNED_CEILING_RESTITUTION: f32 = 0.6;
pub const SPAWNED_WALL_RESTITUTION: f32 = 0.7;
/// Post-bounce vertical speeds below this are snapped to zero so bodies settle.
pub const SPAWNED_REST_SPEED: f32 = 0.2;

/// The fixed world rectangle `[0, width] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: 750.0,
            height: 500.0,
        }
    }
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_position_size(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    /// Clamps `body` into the world and reflects the velocity it hit with.
    ///
    /// For the controlled body `grounded` is cleared first and set again only
    /// on floor contact.
    pub fn resolve(&self, body: &mut Body) {
        match body.kind {
            BodyKind::Controlled => self.resolve_controlled(body),
            BodyKind::Spawned(_) => self.resolve_spawned(body),
        }
    }

    fn resolve_controlled(&self, body: &mut Body) {
        body.grounded = false;

        if body.position.y + body.size.y >= self.height {
            body.position.y = self.height - body.size.y;
            body.velocity.y = 0.0;
            body.grounded = true;
            body.velocity.x *= CONTROLLED_FLOOR_DRAG_X;
        }

        if body.position.y <= 0.0 {
            body.position.y = 0.0;
            body.velocity.y *= -CONTROLLED_WALL_RESTITUTION;
        }

        if body.position.x <= 0.0 {
            body.position.x = 0.0;
            body.velocity.x *= -CONTROLLED_WALL_RESTITUTION;
        }
        if body.position.x + body.size.x >= self.width {
            body.position.x = self.width - body.size.x;
            body.velocity.x *= -CONTROLLED_WALL_RESTITUTION;
        }
    }

    fn resolve_spawned(&self, body: &mut Body) {
        if body.position.y + body.size.y >= self.height {
            body.position.y = self.height - body.size.y;
            body.velocity.y *= -SPAWNED_FLOOR_RESTITUTION;
            body.velocity.x *= SPAWNED_FLOOR_DRAG_X;
            if body.velocity.y.abs() < SPAWNED_REST_SPEED {
                body.velocity.y = 0.0;
            }
        }

        if body.position.y <= 0.0 {
            body.position.y = 0.0;
            body.velocity.y *= -SPAWNED_CEILING_RESTITUTION;
        }

        if body.position.x <= 0.0 {
            body.position.x = 0.0;
            body.velocity.x *= -SPAWNED_WALL_RESTITUTION;
        }
        if body.position.x + body.size.x >= self.width {
            body.position.x = self.width - body.size.x;
            body.velocity.x *= -SPAWNED_WALL_RESTITUTION;
        }
    }
}
