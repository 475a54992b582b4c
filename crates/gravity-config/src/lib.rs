//! Configuration for the Gravity Playground.
//!
//! Settings persist to disk as `config.ron`, can be overridden from the command
//! line, and are range-checked here before any value reaches the simulation.

mod cli;
mod config;
mod error;
mod preset;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, GRAVITY_RANGE, GravityConfig, InputConfig, PLAYER_MASS_RANGE,
    PLAYER_SPEED_RANGE, PhysicsConfig, PlayerConfig, RESTITUTION_RANGE, TrailConfig,
    WORLD_SIZE_RANGE, WorldConfig, check_range, default_config_dir,
};
pub use error::ConfigError;
pub use preset::GravityPreset;
