use crate::config::NoiseConfig;
use bevy::prelude::*;
use rand::Rng;
use rand_pcg::Pcg64;

/// Square grid of floats, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseGrid {
    resolution: usize,
    values: Vec<f32>,
}

impl NoiseGrid {
    pub fn new(resolution: usize) -> Self {
        Self::filled(resolution, 0.0)
    }

    pub fn filled(resolution: usize, value: f32) -> Self {
        Self {
            resolution,
            values: vec![value; resolution * resolution],
        }
    }

    pub fn from_fn(resolution: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut values = Vec::with_capacity(resolution * resolution);
        for i in 0..resolution {
            for j in 0..resolution {
                values.push(f(i, j));
            }
        }
        Self { resolution, values }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.values[i * self.resolution + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        self.values[i * self.resolution + j] = value;
    }

    /// Bounds-checked lookup with signed coordinates
    pub fn try_get(&self, i: i32, j: i32) -> Option<f32> {
        if self.contains(i, j) {
            Some(self.get(i as usize, j as usize))
        } else {
            None
        }
    }

    pub fn contains(&self, i: i32, j: i32) -> bool {
        i >= 0 && j >= 0 && (i as usize) < self.resolution && (j as usize) < self.resolution
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Minimum, maximum and average over all cells
    pub fn min_max_avg(&self) -> (f32, f32, f32) {
        if self.values.is_empty() {
            return (0.0, 0.0, 0.0);
        }
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        let mut sum = 0.0f64;
        for &value in &self.values {
            min = min.min(value);
            max = max.max(value);
            sum += value as f64;
        }
        (min, max, (sum / self.values.len() as f64) as f32)
    }

    /// Bilinear lookup at normalized coordinates.
    ///
    /// Returns `None` when `u` or `v` falls outside `[0, 1]`.
    pub fn sample(&self, u: f32, v: f32) -> Option<f32> {
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) || self.resolution == 0 {
            return None;
        }
        let last = (self.resolution - 1) as f32;
        let x = last * u;
        let y = last * v;

        let x0 = x.floor() as usize;
        let x1 = x.ceil() as usize;
        let y0 = y.floor() as usize;
        let y1 = y.ceil() as usize;
        let fx = x - x0 as f32;
        let fy = y - y0 as f32;

        let top = interpolate(self.get(x0, y0), self.get(x1, y0), fx);
        let bottom = interpolate(self.get(x0, y1), self.get(x1, y1), fx);
        Some(interpolate(top, bottom, fy))
    }
}

fn interpolate(a: f32, b: f32, alpha: f32) -> f32 {
    a * (1.0 - alpha) + b * alpha
}

/// Uniform random values in `[0, 1)`
pub fn white_noise(rng: &mut Pcg64, resolution: usize) -> NoiseGrid {
    NoiseGrid::from_fn(resolution, |_, _| rng.r#gen::<f32>())
}

/// Resample `base` at a period of `2 * octave + 1` cells, interpolating
/// between samples and wrapping around the edges.
pub fn smooth_noise(base: &NoiseGrid, octave: u32) -> NoiseGrid {
    let length = base.resolution();
    let period = (2 * octave + 1) as usize;
    let frequency = 1.0 / period as f32;

    NoiseGrid::from_fn(length, |i, j| {
        let i0 = (i / period) * period;
        let i1 = (i0 + period) % length;
        let horizontal = (i - i0) as f32 * frequency;

        let j0 = (j / period) * period;
        let j1 = (j0 + period) % length;
        let vertical = (j - j0) as f32 * frequency;

        let top = interpolate(base.get(i0, j0), base.get(i1, j0), horizontal);
        let bottom = interpolate(base.get(i0, j1), base.get(i1, j1), horizontal);
        interpolate(top, bottom, vertical)
    })
}

/// Blend `octaves` smoothed copies of `base`. Lower frequencies get the
/// larger weights; the result is normalized by the total weight.
pub fn perlin_noise(base: &NoiseGrid, octaves: u32, amplitude: f32, persistence: f32) -> NoiseGrid {
    let resolution = base.resolution();
    let smoothed: Vec<NoiseGrid> = (0..octaves).map(|k| smooth_noise(base, k)).collect();

    let mut result = NoiseGrid::new(resolution);
    let mut weight = amplitude;
    let mut total_weight = 0.0;

    for octave in smoothed.iter().rev() {
        weight *= persistence;
        total_weight += weight;
        for (out, value) in result.values_mut().iter_mut().zip(octave.values()) {
            *out += value * weight;
        }
    }

    if total_weight > 0.0 {
        for value in result.values_mut() {
            *value /= total_weight;
        }
    }
    result
}

/// Weighted average of two grids into `target`.
///
/// Non-positive weights on both sides fall back to an even split.
pub fn merge_weighted(target: &mut NoiseGrid, target_weight: f32, other: &NoiseGrid, other_weight: f32) {
    let (wa, wb) = if target_weight <= 0.0 && other_weight <= 0.0 {
        (0.5, 0.5)
    } else {
        (target_weight.max(0.0), other_weight.max(0.0))
    };
    let total = wa + wb;
    let resolution = target.resolution();
    let other_resolution = other.resolution();

    for i in 0..resolution {
        for j in 0..resolution {
            // Grids of different sizes are matched by relative position
            let oi = i * other_resolution / resolution.max(1);
            let oj = j * other_resolution / resolution.max(1);
            let merged = (wa * target.get(i, j) + wb * other.get(oi, oj)) / total;
            target.set(i, j, merged);
        }
    }
}

/// Seeded multi-level value noise generator
pub struct NoiseField;

impl NoiseField {
    /// Generate `config.levels` independent octave stacks and blend them,
    /// giving level `i` (1-based) weight `i / levels`.
    pub fn generate(rng: &mut Pcg64, resolution: usize, config: &NoiseConfig) -> NoiseGrid {
        debug!(
            "Generating noise: resolution {resolution}, {octaves} octaves, {levels} levels",
            octaves = config.octaves,
            levels = config.levels
        );

        let levels = config.levels.max(1);
        let mut combined = NoiseGrid::new(resolution);
        let mut accumulated_weight = 0.0;

        for level in 1..=levels {
            let base = white_noise(rng, resolution);
            let layer = perlin_noise(&base, config.octaves, config.amplitude, config.persistence);
            let weight = level as f32 / levels as f32;
            if accumulated_weight == 0.0 {
                combined = layer;
            } else {
                merge_weighted(&mut combined, accumulated_weight, &layer, weight);
            }
            accumulated_weight += weight;
        }

        combined
    }
}
