use crate::config::{ElevationConfig, ErosionConfig, NoiseConfig};
use crate::errors::TerrainResult;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use validator::Validate;

pub mod erosion;
pub mod noise_field;
pub mod shaping;

pub use erosion::{ErosionReport, ErosionSimulator};
pub use noise_field::{NoiseField, NoiseGrid};
pub use shaping::ShapingPreset;

/// Shaped and eroded elevation field with values in `[0, 1]`
#[derive(Debug, Clone)]
pub struct HeightMap {
    grid: NoiseGrid,
    erosion: ErosionReport,
}

impl HeightMap {
    /// Run the full pipeline: noise, shaping, erosion, final rescale.
    ///
    /// One PRNG stream seeded from `seed` feeds every random draw, so the
    /// same inputs always produce the same field.
    pub fn generate(
        seed: u32,
        resolution: usize,
        elevation: &ElevationConfig,
        noise: &NoiseConfig,
        erosion: &ErosionConfig,
    ) -> TerrainResult<Self> {
        elevation.validate()?;
        noise.validate()?;
        erosion.validate()?;

        let resolution = resolution.max(1);
        let mut rng = Pcg64::seed_from_u64(seed as u64);

        let mut grid = NoiseField::generate(&mut rng, resolution, noise);
        shaping::shape(&mut grid, elevation);
        let report = ErosionSimulator::new(erosion.clone(), resolution).run(&mut grid, &mut rng);
        shaping::finish(&mut grid, elevation.height_steps);

        let (min, max, average) = grid.min_max_avg();
        debug!(
            "Height map ready: {resolution}x{resolution}, min {min:.3}, max {max:.3}, avg {average:.3}"
        );

        Ok(Self {
            grid,
            erosion: report,
        })
    }

    /// Noise samples needed to cover a region of `grid_radius`
    pub fn resolution_for(grid_radius: u32, resolution_scale: f32) -> usize {
        (grid_radius as f32 * resolution_scale) as usize + 1
    }

    /// Elevation at normalized coordinates; `None` outside `[0, 1]`
    pub fn read(&self, u: f32, v: f32) -> Option<f32> {
        self.grid.sample(u, v)
    }

    pub fn grid(&self) -> &NoiseGrid {
        &self.grid
    }

    pub fn erosion_report(&self) -> &ErosionReport {
        &self.erosion
    }
}
