//! Gravity Playground application layer.
//!
//! Owns the simulation session ([`Sandbox`]), paces it with the skip-based
//! [`FrameGate`], and drives it from the headless runner.

pub mod frame_gate;
pub mod platform;
pub mod runner;
pub mod sandbox;

pub use frame_gate::FrameGate;
pub use runner::{RunOptions, RunSummary, StopSignal, run};
pub use sandbox::{Command, Outcome, Sandbox, SandboxError};
