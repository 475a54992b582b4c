//! Keyboard input mapped to the controlled body's [`ControlInput`](gravity_physics::ControlInput).

pub mod bindings;
pub mod keyboard;

pub use bindings::{ControlAction, ControlBindings, parse_key_name};
pub use keyboard::{KeyboardState, RawKeyEvent};
