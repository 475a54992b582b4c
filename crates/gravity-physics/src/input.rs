//! Per-tick input snapshot consumed by [`World::step`](crate::World::step).

use serde::{Deserialize, Serialize};

/// Held-state of the three movement controls for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInput {
    pub left: bool,
    pub right: bool,
    /// Only acts while the controlled body is grounded.
    pub jump: bool,
}

/// Everything the step reads from the outside world, sampled once per tick.
///
/// Values are assumed to be validated by the configuration boundary; the
/// physics core does not re-check ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub control: ControlInput,
    /// Vertical acceleration in units/tick² (positive pulls down).
    pub gravity: f32,
    /// Horizontal acceleration per tick while left/right is held.
    pub player_speed: f32,
    /// Written into the controlled body's mass at the start of the tick.
    pub player_mass: f32,
    pub trails_enabled: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            control: ControlInput::default(),
            gravity: 0.3,
            player_speed: 0.4,
            player_mass: 2.0,
            trails_enabled: true,
        }
    }
}

impl TickInput {
    pub fn with_control(mut self, control: ControlInput) -> Self {
        self.control = control;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }
}
