//! Kinematic body data.

use glam::Vec2;
use gravity_math::Aabb;
use serde::{Deserialize, Serialize};

/// Stable identity of a body for its whole lifetime.
///
/// The controlled body is always [`BodyId::CONTROLLED`]; spawned bodies are
/// numbered from 1 in spawn order and ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u64);

impl BodyId {
    pub const CONTROLLED: BodyId = BodyId(0);
}

/// Cosmetic shape of a spawned body. Physics is shape-agnostic (always AABB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Round,
    Rectangular,
}

impl Shape {
    /// Edge length of the square bounding box.
    pub fn size(self) -> f32 {
        match self {
            Shape::Round => 35.0,
            Shape::Rectangular => 40.0,
        }
    }

    pub fn mass(self) -> f32 {
        match self {
            Shape::Round => 1.5,
            Shape::Rectangular => 1.0,
        }
    }
}

/// Which class of body this is; selects drag and restitution constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    /// The single user-driven body.
    Controlled,
    /// A body created by a spawn request.
    Spawned(Shape),
}

/// A simulated rectangle.
///
/// `position` is the top-left corner in world units (y grows downward),
/// `velocity` is in units per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub kind: BodyKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub mass: f32,
    /// Only ever set on the controlled body, while it rests on the floor.
    pub grounded: bool,
}

impl Body {
    /// Start position of the controlled body.
    pub const CONTROLLED_START: Vec2 = Vec2::new(150.0, 150.0);
    /// Edge length of the controlled body.
    pub const CONTROLLED_SIZE: f32 = 30.0;

    /// Creates the controlled body at its start position, at rest.
    pub fn controlled(mass: f32) -> Self {
        Self {
            id: BodyId::CONTROLLED,
            kind: BodyKind::Controlled,
            position: Self::CONTROLLED_START,
            velocity: Vec2::ZERO,
            size: Vec2::splat(Self::CONTROLLED_SIZE),
            mass,
            grounded: false,
        }
    }

    /// Creates a spawned body with the size and mass of its shape.
    pub fn spawned(id: BodyId, shape: Shape, position: Vec2, velocity: Vec2) -> Self {
        Self {
            id,
            kind: BodyKind::Spawned(shape),
            position,
            velocity,
            size: Vec2::splat(shape.size()),
            mass: shape.mass(),
            grounded: false,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.kind, BodyKind::Controlled)
    }

    pub fn shape(&self) -> Option<Shape> {
        match self.kind {
            BodyKind::Controlled => None,
            BodyKind::Spawned(shape) => Some(shape),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_position_size(self.position, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    /// True if position and velocity hold only finite numbers.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
