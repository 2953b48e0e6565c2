use super::noise_field::{NoiseGrid, merge_weighted};
use crate::config::ElevationConfig;
use crate::terrain::constants::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Alternative shaping pipelines. Exactly one runs per height map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapingPreset {
    /// Amplify, log clamp, dampen, flatten lows, flatten toward the average
    #[default]
    Standard,
    /// Blend with a centered half sphere, producing a single island
    HalfSphere,
    /// Logistic compression around the midpoint
    Logistic,
    /// Plain squaring of the normalized field
    Squared,
    /// Leave the noise untouched
    Raw,
}

/// Rescale values into `[0, 1]`.
///
/// With `max_only` the minimum is pinned at zero and only the maximum is
/// scaled. Unless `rescale_small_max` is set, a maximum below one is left
/// alone instead of being stretched up.
pub fn normalize(grid: &mut NoiseGrid, max_only: bool, rescale_small_max: bool) {
    let (min, max, _) = grid.min_max_avg();
    let min = if max_only { 0.0 } else { min };
    let max = if !rescale_small_max && max < 1.0 { 1.0 } else { max };

    let range = if max_only { max } else { max - min };
    if range <= NORMALIZE_EPSILON {
        return;
    }
    let adjustment = 1.0 / range;
    if (adjustment - 1.0).abs() <= NORMALIZE_EPSILON && min == 0.0 {
        return;
    }
    for value in grid.values_mut() {
        *value = (*value - min) * adjustment;
    }
}

pub fn amplify(grid: &mut NoiseGrid, factor: f32) {
    normalize(grid, false, true);
    for value in grid.values_mut() {
        *value = value.powf(factor);
    }
    normalize(grid, false, true);
}

/// Compress values above `threshold` logarithmically
pub fn logarithmic_clamp(grid: &mut NoiseGrid, threshold: f32, intensity: f32) {
    for value in grid.values_mut() {
        if *value > threshold {
            *value = threshold + (1.0 - threshold + *value / intensity).ln();
        }
    }
}

pub fn logistic(grid: &mut NoiseGrid, growth_rate: f32) {
    for value in grid.values_mut() {
        *value = 1.0 / (1.0 + (growth_rate / 2.0 - growth_rate * *value).exp());
    }
}

pub fn dampen(grid: &mut NoiseGrid, strength: f32) {
    for value in grid.values_mut() {
        *value -= strength * (*value - (1.0 + f32::EPSILON + *value).ln());
    }
}

/// Pull low values toward the minimum, more strongly the lower they are
pub fn flatten_lows(grid: &mut NoiseGrid, strength: f32) {
    let (min, max, _) = grid.min_max_avg();
    let range = max - min;
    if range <= 0.0 {
        return;
    }
    for value in grid.values_mut() {
        let ratio = (*value - min) / range;
        *value += strength * (min - (1.0 - ratio) * *value);
    }
}

pub fn flatten_linear_to_average(grid: &mut NoiseGrid, strength: f32) {
    let (_, _, average) = grid.min_max_avg();
    for value in grid.values_mut() {
        *value += strength * (average - *value);
    }
}

/// Blend with a half sphere spanning the grid, capped at `sphere_max`
pub fn half_sphere(grid: &mut NoiseGrid, intensity: f32, sphere_max: f32) {
    let resolution = grid.resolution();
    let radius = resolution as f32 / 2.0;
    if radius <= 0.0 {
        return;
    }
    let sphere = NoiseGrid::from_fn(resolution, |i, j| {
        let di = i as f32 - radius;
        let dj = j as f32 - radius;
        let height = (radius * radius - di * di - dj * dj).max(0.0).sqrt() / radius;
        height.min(sphere_max)
    });
    merge_weighted(grid, 1.0, &sphere, intensity);
}

/// Snap values down to `levels` discrete bands; zero levels is a no-op
pub fn quantize(grid: &mut NoiseGrid, levels: u32) {
    if levels == 0 {
        return;
    }
    let levels = levels as f32;
    for value in grid.values_mut() {
        *value = (*value * levels).floor() / levels;
    }
}

/// Run the preset's shaping passes on raw noise
pub fn shape(grid: &mut NoiseGrid, config: &ElevationConfig) {
    debug!("Applying {:?} elevation shaping", config.preset);
    match config.preset {
        ShapingPreset::Standard => {
            amplify(grid, config.amplification);
            logarithmic_clamp(grid, LOGARITHMIC_CLAMP_THRESHOLD, LOGARITHMIC_CLAMP_INTENSITY);
            dampen(grid, config.dampen_strength);
            flatten_lows(grid, config.flatten_lows_strength);
            flatten_linear_to_average(grid, config.flatten_linear_strength);
        }
        ShapingPreset::HalfSphere => half_sphere(grid, HALF_SPHERE_INTENSITY, 1.0),
        ShapingPreset::Logistic => logistic(grid, LOGISTIC_GROWTH_RATE),
        ShapingPreset::Squared => amplify(grid, SQUARED_PRESET_FACTOR),
        ShapingPreset::Raw => {}
    }
}

/// Final rescale and banding, leaving every value in `[0, 1]`
pub fn finish(grid: &mut NoiseGrid, height_steps: u32) {
    normalize(grid, true, false);
    for value in grid.values_mut() {
        *value = value.clamp(0.0, 1.0);
    }
    quantize(grid, height_steps);
}
