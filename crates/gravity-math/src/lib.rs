//! Axis-aligned rectangle math on `glam::Vec2` for the Gravity Playground.

mod aabb;

pub use aabb::Aabb;
pub use glam::Vec2;
