use crate::errors::TerrainResult;
use crate::terrain::constants::*;
use crate::terrain_generation::shaping::ShapingPreset;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub mod loader;

pub use loader::{get_settings_path, load_settings, load_settings_from, save_settings_to};

/// Size and scale of the generated region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegionGenConfig {
    #[validate(range(min = 1, max = 64000))]
    pub number_of_tiles: u32,
    /// Distance from a tile center to its corners, in world units
    #[validate(range(min = 0.001, max = 10.0))]
    pub tile_size: f32,
    /// World-space height of an elevation of 1.0
    #[validate(range(min = 1.0, max = 1000.0))]
    pub max_elevation: f32,
}

impl Default for RegionGenConfig {
    fn default() -> Self {
        Self {
            number_of_tiles: 1000,
            tile_size: 1.0,
            max_elevation: 10.0,
        }
    }
}

/// Parameters of the multi-octave value noise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NoiseConfig {
    #[validate(range(min = 0.001, max = 500.0))]
    pub amplitude: f32,
    #[validate(range(min = 0.001, max = 1.0))]
    pub persistence: f32,
    #[validate(range(min = 1, max = 16))]
    pub octaves: u32,
    #[validate(range(min = 1, max = 10))]
    pub levels: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_NOISE_AMPLITUDE,
            persistence: DEFAULT_NOISE_PERSISTENCE,
            octaves: DEFAULT_NOISE_OCTAVES,
            levels: DEFAULT_NOISE_LEVELS,
        }
    }
}

/// Elevation shaping applied to the raw noise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ElevationConfig {
    pub preset: ShapingPreset,
    #[validate(range(min = 1.0, max = 10.0))]
    pub amplification: f32,
    #[validate(range(min = 0.0, exclusive_max = 1.0))]
    pub flatten_linear_strength: f32,
    #[validate(range(min = 0.0, exclusive_max = 1.0))]
    pub flatten_lows_strength: f32,
    #[validate(range(min = 0.0, exclusive_max = 1.0))]
    pub dampen_strength: f32,
    /// Noise samples per tile along the region radius
    #[validate(range(min = 0.001, max = 10.0))]
    pub resolution_scale: f32,
    /// Number of discrete elevation bands; 0 keeps elevation continuous
    #[validate(range(max = 100))]
    pub height_steps: u32,
}

impl Default for ElevationConfig {
    fn default() -> Self {
        Self {
            preset: ShapingPreset::Standard,
            amplification: 10.0,
            flatten_linear_strength: 0.25,
            flatten_lows_strength: 0.5,
            dampen_strength: 0.25,
            resolution_scale: 1.0,
            height_steps: 50,
        }
    }
}

/// Hydraulic erosion parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ErosionConfig {
    pub enabled: bool,
    #[validate(range(max = 2000))]
    pub iterations: u32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub strength: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub water_amount: f32,
    /// Fraction of water kept after each iteration
    #[validate(range(min = 0.0, max = 1.0))]
    pub water_loss: f32,
    #[validate(range(exclusive_min = 0.0, max = 1.0))]
    pub velocity_regularizer: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub water_to_elevation_proportion: f32,
    /// Total terrain movement below which an iteration counts as converged
    #[validate(range(min = 0.0, max = 1.0))]
    pub min_terrain_movement: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub deposit_probability: f32,
    #[validate(range(max = 32))]
    pub deposit_radius: u32,
    pub stop_on_convergence: bool,
}

impl Default for ErosionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            iterations: 50,
            strength: 1.0,
            water_amount: 0.1,
            water_loss: 0.99,
            velocity_regularizer: 0.2,
            water_to_elevation_proportion: 0.05,
            min_terrain_movement: 0.01,
            deposit_probability: DEFAULT_DEPOSIT_PROBABILITY,
            deposit_radius: DEFAULT_DEPOSIT_RADIUS,
            stop_on_convergence: true,
        }
    }
}

/// Movement budget and elevation costs for tactical moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MovementConfig {
    #[validate(range(min = 0.0, max = 1000.0))]
    pub action_points: f32,
    /// Upper bound on action points; also caps the cost of a single step
    #[validate(range(exclusive_min = 0.0, max = 1000.0))]
    pub max_action_points: f32,
    #[validate(range(exclusive_min = 0.0, max = 100.0))]
    pub up_elevation_per_point: f32,
    #[validate(range(exclusive_min = 0.0, max = 100.0))]
    pub down_elevation_per_point: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            action_points: DEFAULT_ACTION_POINTS,
            max_action_points: DEFAULT_ACTION_POINTS,
            up_elevation_per_point: UP_ELEVATION_PER_POINT,
            down_elevation_per_point: DOWN_ELEVATION_PER_POINT,
        }
    }
}

/// Everything needed to build a region and run moves on it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate, Resource)]
#[serde(default)]
pub struct RegionSettings {
    /// Fixed seed; a random one is drawn when absent
    pub seed: Option<u32>,
    #[validate(nested)]
    pub region: RegionGenConfig,
    #[validate(nested)]
    pub noise: NoiseConfig,
    #[validate(nested)]
    pub elevation: ElevationConfig,
    #[validate(nested)]
    pub erosion: ErosionConfig,
    #[validate(nested)]
    pub movement: MovementConfig,
}

impl RegionSettings {
    /// Parse settings from TOML and validate every section
    pub fn from_toml_str(contents: &str) -> TerrainResult<Self> {
        let settings: RegionSettings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> TerrainResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TerrainError;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RegionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_strength_of_one_is_rejected() {
        let elevation = ElevationConfig {
            flatten_lows_strength: 1.0,
            ..Default::default()
        };
        let errors = elevation.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("flatten_lows_strength"));
    }

    #[test]
    fn test_zero_tiles_and_octaves_are_rejected() {
        let settings = RegionSettings {
            region: RegionGenConfig {
                number_of_tiles: 0,
                ..Default::default()
            },
            noise: NoiseConfig {
                octaves: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err: TerrainError = settings.validate().unwrap_err().into();
        let message = err.to_string();
        assert!(message.contains("region.number_of_tiles"), "{message}");
        assert!(message.contains("noise.octaves"), "{message}");
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = RegionSettings {
            seed: Some(42),
            ..Default::default()
        };
        let text = settings.to_toml_string().unwrap();
        let parsed = RegionSettings::from_toml_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = RegionSettings::from_toml_str(
            "seed = 7\n[region]\nnumber_of_tiles = 19\n[elevation]\npreset = \"raw\"\n",
        )
        .unwrap();
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.region.number_of_tiles, 19);
        assert_eq!(parsed.region.tile_size, RegionGenConfig::default().tile_size);
        assert_eq!(parsed.elevation.preset, ShapingPreset::Raw);
        assert_eq!(parsed.noise, NoiseConfig::default());
    }

    #[test]
    fn test_invalid_toml_values_are_rejected() {
        let result = RegionSettings::from_toml_str("[erosion]\nvelocity_regularizer = 0.0\n");
        assert!(matches!(result, Err(TerrainError::InvalidConfig { .. })));
    }

    #[test]
    fn test_resolve_seed_prefers_configured() {
        let settings = RegionSettings {
            seed: Some(99),
            ..Default::default()
        };
        assert_eq!(settings.resolve_seed(), 99);
    }
}
