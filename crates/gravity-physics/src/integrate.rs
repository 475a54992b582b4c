//! Explicit per-tick integration: control input, gravity, drag, position update.
//!
//! One call advances a body by exactly one fixed tick. There is no sub-stepping
//! and no time scaling; velocities are in units per tick.

use crate::body::{Body, BodyKind};
use crate::input::ControlInput;

/// Horizontal air drag applied to the controlled body every tick.
pub const CONTROLLED_DRAG_X: f32 = 0.88;
/// Horizontal speed limit of the controlled body.
pub const CONTROLLED_MAX_SPEED_X: f32 = 8.0;
/// Vertical speed limit of the controlled body.
pub const CONTROLLED_MAX_SPEED_Y: f32 = 20.0;
/// Upward velocity set by a jump.
pub const JUMP_VELOCITY: f32 = 9.0;

pub const SPAWNED_DRAG_X: f32 = 0.99;
pub const SPAWNED_DRAG_Y: f32 = 0.995;

/// Applies movement controls to the controlled body.
///
/// Left/right add `speed` to the horizontal velocity rather than setting it.
/// A jump is a one-shot impulse that only fires while grounded, and clears
/// `grounded` immediately. Spawned bodies are left untouched.
pub fn apply_control(body: &mut Body, control: ControlInput, speed: f32) {
    if !body.is_controlled() {
        return;
    }
    if control.left {
        body.velocity.x -= speed;
    }
    if control.right {
        body.velocity.x += speed;
    }
    if control.jump && body.grounded {
        body.velocity.y = -JUMP_VELOCITY;
        body.grounded = false;
    }
}

/// Adds gravity, applies the drag of the body's class, then moves it.
pub fn integrate(body: &mut Body, gravity: f32) {
    body.velocity.y += gravity;

    match body.kind {
        BodyKind::Controlled => {
            body.velocity.x *= CONTROLLED_DRAG_X;
            body.velocity.x = body
                .velocity
                .x
                .clamp(-CONTROLLED_MAX_SPEED_X, CONTROLLED_MAX_SPEED_X);
            body.velocity.y = body
                .velocity
                .y
                .clamp(-CONTROLLED_MAX_SPEED_Y, CONTROLLED_MAX_SPEED_Y);
        }
        BodyKind::Spawned(_) => {
            body.velocity.x *= SPAWNED_DRAG_X;
            body.velocity.y *= SPAWNED_DRAG_Y;
        }
    }

    body.position += body.velocity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyId, Shape};
    use glam::Vec2;

    fn spawned(velocity: Vec2) -> Body {
        Body::spawned(BodyId(1), Shape::Rectangular, Vec2::new(100.0, 100.0), velocity)
    }

    #[test]
    fn test_gravity_is_vertical_only() {
        let mut body = spawned(Vec2::ZERO);
        integrate(&mut body, 0.5);
        assert_eq!(body.velocity.x, 0.0);
        assert!((body.velocity.y - 0.5 * SPAWNED_DRAG_Y).abs() < 1e-6);
        assert_eq!(body.position.x, 100.0);
        assert!((body.position.y - (100.0 + 0.5 * SPAWNED_DRAG_Y)).abs() < 1e-5);
    }

    #[test]
    fn test_spawned_drag() {
        let mut body = spawned(Vec2::new(2.0, -4.0));
        integrate(&mut body, 0.0);
        assert!((body.velocity.x - 2.0 * 0.99).abs() < 1e-6);
        assert!((body.velocity.y - -4.0 * 0.995).abs() < 1e-6);
    }

    #[test]
    fn test_spawned_has_no_speed_clamp() {
        let mut body = spawned(Vec2::new(50.0, 50.0));
        integrate(&mut body, 0.0);
        assert!(body.velocity.x > CONTROLLED_MAX_SPEED_X);
        assert!(body.velocity.y > CONTROLLED_MAX_SPEED_Y);
    }

    #[test]
    fn test_controlled_drag_and_clamp() {
        let mut body = Body::controlled(2.0);
        body.velocity = Vec2::new(5.0, 0.0);
        integrate(&mut body, 0.0);
        assert!((body.velocity.x - 5.0 * CONTROLLED_DRAG_X).abs() < 1e-6);

        body.velocity = Vec2::new(100.0, -100.0);
        integrate(&mut body, 0.0);
        assert_eq!(body.velocity.x, CONTROLLED_MAX_SPEED_X);
        assert_eq!(body.velocity.y, -CONTROLLED_MAX_SPEED_Y);
    }

    #[test]
    fn test_control_accelerates_rather_than_sets() {
        let mut body = Body::controlled(2.0);
        body.velocity.x = 1.0;
        let right = ControlInput {
            right: true,
            ..Default::default()
        };
        apply_control(&mut body, right, 0.4);
        assert!((body.velocity.x - 1.4).abs() < 1e-6);

        let both = ControlInput {
            left: true,
            right: true,
            jump: false,
        };
        apply_control(&mut body, both, 0.4);
        assert!((body.velocity.x - 1.4).abs() < 1e-6);
    }

    #[test]
    fn test_jump_requires_grounded() {
        let jump = ControlInput {
            jump: true,
            ..Default::default()
        };
        let mut body = Body::controlled(2.0);
        apply_control(&mut body, jump, 0.4);
        assert_eq!(body.velocity.y, 0.0);

        body.grounded = true;
        apply_control(&mut body, jump, 0.4);
        assert_eq!(body.velocity.y, -JUMP_VELOCITY);
        assert!(!body.grounded);
    }

    #[test]
    fn test_control_ignores_spawned_bodies() {
        let mut body = spawned(Vec2::ZERO);
        body.grounded = true;
        let all = ControlInput {
            left: true,
            right: false,
            jump: true,
        };
        apply_control(&mut body, all, 0.4);
        assert_eq!(body.velocity, Vec2::ZERO);
    }
}
