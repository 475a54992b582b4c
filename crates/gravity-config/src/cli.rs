//! Command-line argument parsing for the Gravity Playground.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{PLAYER_MASS_RANGE, PLAYER_SPEED_RANGE, check_range};
use crate::{Config, ConfigError, GravityPreset};

/// Gravity Playground command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "gravity-playground", about = "2D rigid-body gravity sandbox")]
pub struct CliArgs {
    /// Custom gravity in units/tick² (selects the Custom preset).
    #[arg(long, allow_hyphen_values = true)]
    pub gravity: Option<f32>,

    /// Named gravity preset.
    #[arg(long, value_enum)]
    pub preset: Option<GravityPreset>,

    /// Horizontal acceleration of the controlled body.
    #[arg(long)]
    pub player_speed: Option<f32>,

    /// Mass of the controlled body.
    #[arg(long)]
    pub player_mass: Option<f32>,

    /// Disable the motion trail.
    #[arg(long)]
    pub no_trails: bool,

    /// Spawn seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// `--preset` is applied before `--gravity`, so passing both ends on the
    /// custom value. If any value is out of range nothing is applied.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) -> Result<(), ConfigError> {
        let mut next = self.clone();
        if let Some(preset) = args.preset {
            next.gravity.select(preset);
        }
        if let Some(g) = args.gravity {
            next.gravity.set_custom(g)?;
        }
        if let Some(speed) = args.player_speed {
            next.player.speed = check_range("player.speed", speed, &PLAYER_SPEED_RANGE)?;
        }
        if let Some(mass) = args.player_mass {
            next.player.mass = check_range("player.mass", mass, &PLAYER_MASS_RANGE)?;
        }
        if args.no_trails {
            next.trails.enabled = false;
        }
        if let Some(seed) = args.seed {
            next.physics.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            next.debug.log_level = level.clone();
        }
        *self = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            player_mass: Some(3.5),
            preset: Some(GravityPreset::Moon),
            no_trails: true,
            ..Default::default()
        };
        config.apply_cli_overrides(&args).unwrap();
        assert_eq!(config.player.mass, 3.5);
        assert_eq!(config.gravity.effective(), 0.05);
        assert!(!config.trails.enabled);
        // Non-overridden fields retain defaults
        assert_eq!(config.player.speed, 0.4);
        assert_eq!(config.physics.seed, 0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default()).unwrap();
        assert_eq!(config, original);
    }

    #[test]
    fn test_gravity_wins_over_preset() {
        let mut config = Config::default();
        let args = CliArgs {
            preset: Some(GravityPreset::Jupiter),
            gravity: Some(-1.25),
            ..Default::default()
        };
        config.apply_cli_overrides(&args).unwrap();
        assert_eq!(config.gravity.preset, GravityPreset::Custom);
        assert_eq!(config.gravity.effective(), -1.25);
    }

    #[test]
    fn test_out_of_range_override_rejected() {
        let mut config = Config::default();
        let args = CliArgs {
            player_speed: Some(4.0),
            ..Default::default()
        };
        let err = config.apply_cli_overrides(&args).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "player.speed",
                ..
            }
        ));
        assert_eq!(config.player.speed, 0.4);
    }

    #[test]
    fn test_rejected_override_applies_nothing() {
        let mut config = Config::default();
        let args = CliArgs {
            preset: Some(GravityPreset::Mars),
            player_speed: Some(0.8),
            player_mass: Some(9.0),
            seed: Some(5),
            ..Default::default()
        };
        assert!(config.apply_cli_overrides(&args).is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_from_args() {
        let args = CliArgs::try_parse_from([
            "gravity-playground",
            "--gravity",
            "-0.5",
            "--preset",
            "zero-gravity",
            "--seed",
            "7",
            "--no-trails",
        ])
        .unwrap();
        assert_eq!(args.gravity, Some(-0.5));
        assert_eq!(args.preset, Some(GravityPreset::ZeroGravity));
        assert_eq!(args.seed, Some(7));
        assert!(args.no_trails);
    }
}
