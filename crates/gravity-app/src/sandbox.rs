//! A simulation session: the world plus its validated settings.

use std::path::Path;

use gravity_config::{
    Config, ConfigError, GravityPreset, PLAYER_MASS_RANGE, PLAYER_SPEED_RANGE, check_range,
};
use gravity_input::ControlBindings;
use gravity_physics::{
    BodyId, ControlInput, ImpulseResolver, Shape, Snapshot, TickInput, World, WorldBounds,
};
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no spawned body with id {0:?}")]
    UnknownBody(BodyId),
}

/// A request from the UI side. Setting changes are stored and take effect at
/// the start of the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Spawn(Shape),
    Remove(BodyId),
    Clear,
    Reset,
    SetGravity(f32),
    SelectPreset(GravityPreset),
    SetPlayerSpeed(f32),
    SetPlayerMass(f32),
    SetTrails(bool),
}

/// What a successfully applied [`Command`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Spawned(BodyId),
    Removed(usize),
    Updated,
}

/// Owns the [`World`] and the settings each tick is built from.
#[derive(Debug, Clone)]
pub struct Sandbox {
    world: World,
    /// Live settings. `world` and `physics` always match the running world.
    config: Config,
    /// `config.ron` as last read, which hot reload diffs against.
    file_config: Config,
    bindings: ControlBindings,
}

impl Sandbox {
    /// Builds a session from a config, validating it first.
    pub fn new(config: Config) -> Result<Self, SandboxError> {
        config.validate()?;
        let bounds = WorldBounds::new(config.world.width, config.world.height);
        let world = World::new(bounds, config.player.mass, config.physics.seed)
            .with_resolver(ImpulseResolver::new(config.physics.restitution));
        let bindings = ControlBindings::from_config(&config.input);
        info!(
            width = bounds.width,
            height = bounds.height,
            gravity = config.gravity.effective(),
            seed = config.physics.seed,
            "sandbox ready"
        );
        Ok(Self {
            world,
            file_config: config.clone(),
            config,
            bindings,
        })
    }

    /// Records the config as stored on disk when the live one carries
    /// overrides, so a reload only fires once the file itself changes.
    pub fn with_file_config(mut self, file_config: Config) -> Self {
        self.file_config = file_config;
        self
    }

    /// Applies one command. Rejected commands leave the session unchanged.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, SandboxError> {
        debug!(?command, "applying command");
        match command {
            Command::Spawn(shape) => Ok(Outcome::Spawned(self.world.spawn(shape))),
            Command::Remove(id) => self
                .world
                .remove(id)
                .map(|_| Outcome::Removed(1))
                .ok_or(SandboxError::UnknownBody(id)),
            Command::Clear => Ok(Outcome::Removed(self.world.clear())),
            Command::Reset => {
                self.world.reset_player(self.config.player.mass);
                Ok(Outcome::Updated)
            }
            Command::SetGravity(g) => {
                self.config.gravity.set_custom(g)?;
                Ok(Outcome::Updated)
            }
            Command::SelectPreset(preset) => {
                self.config.gravity.select(preset);
                Ok(Outcome::Updated)
            }
            Command::SetPlayerSpeed(speed) => {
                self.config.player.speed =
                    check_range("player.speed", speed, &PLAYER_SPEED_RANGE)?;
                Ok(Outcome::Updated)
            }
            Command::SetPlayerMass(mass) => {
                self.config.player.mass = check_range("player.mass", mass, &PLAYER_MASS_RANGE)?;
                Ok(Outcome::Updated)
            }
            Command::SetTrails(enabled) => {
                self.config.trails.enabled = enabled;
                Ok(Outcome::Updated)
            }
        }
    }

    /// Adopts the runtime settings of a reloaded config.
    ///
    /// World size, seed and restitution are fixed for the lifetime of the
    /// world; edits to them are logged once and otherwise ignored.
    pub fn apply_config(&mut self, config: Config) -> Result<(), SandboxError> {
        config.validate()?;
        if config.world != self.file_config.world || config.physics != self.file_config.physics {
            warn!("world and physics settings apply on restart only");
        }
        self.file_config = config.clone();
        self.config.gravity = config.gravity;
        self.config.player = config.player;
        self.config.trails = config.trails;
        self.config.debug = config.debug;
        if config.input != self.config.input {
            self.bindings = ControlBindings::from_config(&config.input);
            self.config.input = config.input;
        }
        Ok(())
    }

    /// Re-reads `config.ron` from `config_dir` and applies it if the file
    /// changed since it was last read. Returns whether anything was applied.
    pub fn reload(&mut self, config_dir: &Path) -> Result<bool, SandboxError> {
        match self.file_config.reload(config_dir)? {
            Some(config) => {
                self.apply_config(config)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The input snapshot the next tick will read.
    pub fn tick_input(&self, control: ControlInput) -> TickInput {
        TickInput {
            control,
            gravity: self.config.gravity.effective(),
            player_speed: self.config.player.speed,
            player_mass: self.config.player.mass,
            trails_enabled: self.config.trails.enabled,
        }
    }

    /// Advances the world by one tick under the current settings.
    pub fn tick(&mut self, control: ControlInput) {
        let input = self.tick_input(control);
        self.world.step(&input);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn file_config(&self) -> &Config {
        &self.file_config
    }

    pub fn bindings(&self) -> &ControlBindings {
        &self.bindings
    }

    pub fn snapshot(&self) -> Snapshot {
        self.world.snapshot()
    }
}
