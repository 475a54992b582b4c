//! Named gravity presets.

use serde::{Deserialize, Serialize};

/// A named gravity value, in units/tick². `Custom` defers to the user value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum GravityPreset {
    Mercury,
    Venus,
    #[default]
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    ZeroGravity,
    ReverseGravity,
    Custom,
}

impl GravityPreset {
    /// Every preset with a fixed value, in menu order.
    pub const NAMED: [GravityPreset; 12] = [
        GravityPreset::Mercury,
        GravityPreset::Venus,
        GravityPreset::Earth,
        GravityPreset::Moon,
        GravityPreset::Mars,
        GravityPreset::Jupiter,
        GravityPreset::Saturn,
        GravityPreset::Uranus,
        GravityPreset::Neptune,
        GravityPreset::Pluto,
        GravityPreset::ZeroGravity,
        GravityPreset::ReverseGravity,
    ];

    /// Fixed gravity of the preset, `None` for `Custom`.
    pub fn gravity(self) -> Option<f32> {
        Some(match self {
            GravityPreset::Mercury => 0.19,
            GravityPreset::Venus => 0.3,
            GravityPreset::Earth => 0.3,
            GravityPreset::Moon => 0.05,
            GravityPreset::Mars => 0.15,
            GravityPreset::Jupiter => 0.8,
            GravityPreset::Saturn => 0.4,
            GravityPreset::Uranus => 0.35,
            GravityPreset::Neptune => 0.4,
            GravityPreset::Pluto => 0.02,
            GravityPreset::ZeroGravity => 0.0,
            GravityPreset::ReverseGravity => -0.3,
            GravityPreset::Custom => return None,
        })
    }

    pub fn display_name(self) -> &'static str {
        match self {
            GravityPreset::Mercury => "Mercury",
            GravityPreset::Venus => "Venus",
            GravityPreset::Earth => "Earth",
            GravityPreset::Moon => "Moon",
            GravityPreset::Mars => "Mars",
            GravityPreset::Jupiter => "Jupiter",
            GravityPreset::Saturn => "Saturn",
            GravityPreset::Uranus => "Uranus",
            GravityPreset::Neptune => "Neptune",
            GravityPreset::Pluto => "Pluto",
            GravityPreset::ZeroGravity => "Zero Gravity",
            GravityPreset::ReverseGravity => "Reverse Gravity",
            GravityPreset::Custom => "Custom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GRAVITY_RANGE;

    #[test]
    fn test_named_presets_have_values_in_range() {
        for preset in GravityPreset::NAMED {
            let Some(g) = preset.gravity() else {
                panic!("{preset:?} has no value");
            };
            assert!(GRAVITY_RANGE.contains(&g), "{preset:?} = {g}");
        }
    }

    #[test]
    fn test_custom_has_no_fixed_value() {
        assert_eq!(GravityPreset::Custom.gravity(), None);
        assert!(!GravityPreset::NAMED.contains(&GravityPreset::Custom));
    }

    #[test]
    fn test_known_values() {
        assert_eq!(GravityPreset::default(), GravityPreset::Earth);
        assert_eq!(GravityPreset::Earth.gravity(), Some(0.3));
        assert_eq!(GravityPreset::Jupiter.gravity(), Some(0.8));
        assert_eq!(GravityPreset::ReverseGravity.gravity(), Some(-0.3));
        assert_eq!(GravityPreset::ZeroGravity.display_name(), "Zero Gravity");
    }
}
