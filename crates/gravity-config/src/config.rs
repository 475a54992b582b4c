//! Configuration structs with sandbox defaults, validation and RON persistence.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::preset::GravityPreset;

/// Accepted gravity, units/tick².
pub const GRAVITY_RANGE: RangeInclusive<f32> = -3.0..=3.0;
/// Accepted horizontal acceleration of the controlled body, units/tick².
pub const PLAYER_SPEED_RANGE: RangeInclusive<f32> = 0.1..=1.0;
pub const PLAYER_MASS_RANGE: RangeInclusive<f32> = 0.5..=5.0;
pub const RESTITUTION_RANGE: RangeInclusive<f32> = 0.0..=1.0;
/// Accepted world width and height in pixels.
pub const WORLD_SIZE_RANGE: RangeInclusive<f32> = 100.0..=4096.0;

const APP_NAME: &str = "gravity-playground";
const CONFIG_FILE: &str = "config.ron";

/// Returns `value` if it lies in `range`, otherwise [`ConfigError::OutOfRange`].
/// NaN is always rejected.
pub fn check_range(
    field: &'static str,
    value: f32,
    range: &RangeInclusive<f32>,
) -> Result<f32, ConfigError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Platform configuration directory for the playground.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Top-level sandbox configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub world: WorldConfig,
    pub gravity: GravityConfig,
    pub player: PlayerConfig,
    pub physics: PhysicsConfig,
    pub trails: TrailConfig,
    pub input: InputConfig,
    pub debug: DebugConfig,
}

/// World rectangle. Logical units equal render pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}

/// Gravity selection: a named preset, or the custom value when the preset is
/// [`GravityPreset::Custom`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub preset: GravityPreset,
    /// Mirrors the preset value whenever a named preset is selected.
    pub custom: f32,
}

/// Controlled-body tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal acceleration per tick while moving.
    pub speed: f32,
    pub mass: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Body-body restitution.
    pub restitution: f32,
    /// Seed for spawn positions; equal seeds replay identically.
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrailConfig {
    pub enabled: bool,
}

/// Input configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Keybinding overrides (action name -> key name), e.g. `"jump": "KeyW"`.
    pub keybindings: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

// --- Defaults ---

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 750.0,
            height: 500.0,
        }
    }
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            preset: GravityPreset::Earth,
            custom: 0.3,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 0.4,
            mass: 2.0,
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            restitution: 0.5,
            seed: 0,
        }
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Gravity selection ---

impl GravityConfig {
    /// The gravity the simulation should use.
    pub fn effective(&self) -> f32 {
        self.preset.gravity().unwrap_or(self.custom)
    }

    /// Selects a preset. Named presets also overwrite the custom value.
    pub fn select(&mut self, preset: GravityPreset) {
        self.preset = preset;
        if let Some(g) = preset.gravity() {
            self.custom = g;
        }
    }

    /// Validates and applies a custom gravity, switching to [`GravityPreset::Custom`].
    /// On error the selection is left unchanged.
    pub fn set_custom(&mut self, value: f32) -> Result<(), ConfigError> {
        self.custom = check_range("gravity.custom", value, &GRAVITY_RANGE)?;
        self.preset = GravityPreset::Custom;
        Ok(())
    }
}

// --- Validation ---

impl Config {
    /// Checks every range-limited value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("world.width", self.world.width, &WORLD_SIZE_RANGE)?;
        check_range("world.height", self.world.height, &WORLD_SIZE_RANGE)?;
        check_range("gravity.custom", self.gravity.custom, &GRAVITY_RANGE)?;
        check_range("player.speed", self.player.speed, &PLAYER_SPEED_RANGE)?;
        check_range("player.mass", self.player.mass, &PLAYER_MASS_RANGE)?;
        check_range(
            "physics.restitution",
            self.physics.restitution,
            &RESTITUTION_RANGE,
        )?;
        Ok(())
    }
}

// --- Persistence ---

impl Config {
    /// Path of the config file inside `config_dir`.
    pub fn file_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    /// Reads `config.ron` from `config_dir`, writing the defaults there first
    /// if the file does not exist. A file that fails
    /// [`validate`](Self::validate) is an error.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::file_path(config_dir);
        if !path.exists() {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("wrote default config to {}", path.display());
            return Ok(config);
        }
        let config = Self::read(&path)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Writes `config.ron` into `config_dir`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let text = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::create_dir_all(config_dir)
            .and_then(|()| std::fs::write(Self::file_path(config_dir), text))
            .map_err(ConfigError::WriteError)
    }

    /// Re-reads the file. `Some` only if it differs from `self`.
    /// An edited file that fails validation is an error and the caller keeps
    /// the current config.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let fresh = Self::read(&Self::file_path(config_dir))?;
        if fresh == *self {
            return Ok(None);
        }
        log::info!("config changed on disk");
        Ok(Some(fresh))
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = ron::from_str(&text).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gravity.effective(), 0.3);
        assert_eq!(config.world.width, 750.0);
        assert_eq!(config.world.height, 500.0);
        assert!(config.trails.enabled);
    }

    #[test]
    fn test_default_config_serializes() {
        let ron_str =
            ron::ser::to_string_pretty(&Config::default(), ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 750.0"));
        assert!(ron_str.contains("preset: Earth"));
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(gravity: (preset: Moon))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.player, PlayerConfig::default());
        assert_eq!(config.gravity.preset, GravityPreset::Moon);
        assert_eq!(config.gravity.effective(), 0.05);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_custom_gravity_validation() {
        let mut gravity = GravityConfig::default();
        assert!(gravity.set_custom(-2.5).is_ok());
        assert_eq!(gravity.preset, GravityPreset::Custom);
        assert_eq!(gravity.effective(), -2.5);

        let err = gravity.set_custom(3.5);
        assert!(matches!(
            err,
            Err(ConfigError::OutOfRange {
                field: "gravity.custom",
                ..
            })
        ));
        assert!(gravity.set_custom(f32::NAN).is_err());
        // Rejected values leave the previous selection in place.
        assert_eq!(gravity.effective(), -2.5);
    }

    #[test]
    fn test_select_preset_updates_custom() {
        let mut gravity = GravityConfig::default();
        gravity.select(GravityPreset::Jupiter);
        assert_eq!(gravity.custom, 0.8);
        assert_eq!(gravity.effective(), 0.8);
        gravity.select(GravityPreset::Custom);
        assert_eq!(gravity.effective(), 0.8);
    }

    #[test]
    fn test_range_boundaries_inclusive() {
        assert!(check_range("g", -3.0, &GRAVITY_RANGE).is_ok());
        assert!(check_range("g", 3.0, &GRAVITY_RANGE).is_ok());
        assert!(check_range("m", 0.5, &PLAYER_MASS_RANGE).is_ok());
        assert!(check_range("m", 5.0, &PLAYER_MASS_RANGE).is_ok());
        assert!(check_range("m", 5.01, &PLAYER_MASS_RANGE).is_err());
        assert!(check_range("s", 0.05, &PLAYER_SPEED_RANGE).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.player.mass = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                field: "player.mass",
                ..
            })
        ));

        let mut config = Config::default();
        config.physics.restitution = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.player.mass = 4.0;
        config.gravity.select(GravityPreset::Mars);
        config
            .input
            .keybindings
            .insert("jump".to_string(), "KeyW".to_string());

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_load_rejects_out_of_range_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "(player: (mass: 9.0))").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.player.speed = 0.8;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.map(|c| c.player.speed), Some(0.8));
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }
}
