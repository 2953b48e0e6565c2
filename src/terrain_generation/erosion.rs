use super::noise_field::NoiseGrid;
use crate::config::ErosionConfig;
use crate::terrain::constants::*;
use bevy::prelude::*;
use rand::Rng;
use rand_pcg::Pcg64;

/// Water only flows between edge-adjacent cells: top, right, bottom, left
const FLOW_NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Summary of an erosion run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErosionReport {
    pub iterations_run: u32,
    /// Total terrain moved during the last iteration
    pub last_movement: f32,
    pub converged: bool,
}

/// Hydraulic erosion over an elevation grid.
///
/// Water is deposited once, then each iteration moves it downhill to
/// lower neighbors and drags terrain along in proportion to the amount
/// moved. All decisions in an iteration read the state from before it.
#[derive(Debug, Clone)]
pub struct ErosionSimulator {
    config: ErosionConfig,
    water: NoiseGrid,
}

struct Transfer {
    target: (usize, usize),
    gradient: f32,
    amount: f32,
}

impl ErosionSimulator {
    pub fn new(config: ErosionConfig, resolution: usize) -> Self {
        Self {
            config,
            water: NoiseGrid::new(resolution),
        }
    }

    /// Start from an explicit water field instead of random deposits
    pub fn with_water(config: ErosionConfig, water: NoiseGrid) -> Self {
        Self { config, water }
    }

    pub fn water(&self) -> &NoiseGrid {
        &self.water
    }

    /// Drop water around randomly chosen cells
    pub fn deposit_water(&mut self, rng: &mut Pcg64) {
        let probability = self.config.deposit_probability;
        let amount = self.config.water_amount;
        let radius = self.config.deposit_radius as i32;
        let resolution = self.water.resolution() as i32;

        for i in 0..resolution {
            for j in 0..resolution {
                if rng.r#gen::<f32>() >= probability {
                    continue;
                }
                for wi in (i - radius)..(i + radius) {
                    for wj in (j - radius)..(j + radius) {
                        if let Some(current) = self.water.try_get(wi, wj) {
                            let added = rng.gen_range(probability * amount..=amount);
                            self.water.set(wi as usize, wj as usize, current + added);
                        }
                    }
                }
            }
        }

        for value in self.water.values_mut() {
            *value = value.min(amount);
        }
    }

    /// Run one erosion step and return the total terrain moved
    pub fn iterate(&mut self, elevation: &mut NoiseGrid) -> f32 {
        let resolution = elevation.resolution();
        let proportion = self.config.water_to_elevation_proportion;
        let water = &self.water;
        let ground = elevation.clone();
        let mut water_updated = water.clone();
        let mut terrain_delta = NoiseGrid::new(resolution);
        let mut total_movement = 0.0;

        for i in 0..resolution {
            for j in 0..resolution {
                let available = water.get(i, j);
                if available < MIN_WATER_THRESHOLD {
                    continue;
                }

                let transfers = self.plan_transfers(&ground, (i, j), available, proportion);
                for transfer in transfers {
                    let (ti, tj) = transfer.target;
                    water_updated.set(i, j, water_updated.get(i, j) - transfer.amount);
                    water_updated.set(ti, tj, water_updated.get(ti, tj) + transfer.amount);

                    if self.config.water_amount > 0.0 {
                        let movement = self.config.strength
                            * transfer.gradient
                            * (transfer.amount / self.config.water_amount);
                        terrain_delta.set(i, j, terrain_delta.get(i, j) - movement);
                        terrain_delta.set(ti, tj, terrain_delta.get(ti, tj) + movement);
                        total_movement += movement;
                    }
                }
            }
        }

        for (value, delta) in elevation.values_mut().iter_mut().zip(terrain_delta.values()) {
            *value += delta;
        }
        for value in water_updated.values_mut() {
            *value = value.max(0.0) * self.config.water_loss;
        }
        self.water = water_updated;

        total_movement
    }

    fn plan_transfers(
        &self,
        ground: &NoiseGrid,
        (i, j): (usize, usize),
        available: f32,
        proportion: f32,
    ) -> Vec<Transfer> {
        let effective = ground.get(i, j) + available * proportion;

        let mut neighbors: Vec<((usize, usize), f32)> = FLOW_NEIGHBORS
            .iter()
            .filter_map(|(di, dj)| {
                let (ni, nj) = (i as i32 + di, j as i32 + dj);
                let height = ground.try_get(ni, nj)?;
                let target = (ni as usize, nj as usize);
                Some((target, height + self.water.get(target.0, target.1) * proportion))
            })
            .collect();
        neighbors.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut transfers: Vec<Transfer> = neighbors
            .into_iter()
            .filter(|(_, height)| effective > *height)
            .map(|(target, height)| {
                let gradient = effective - height;
                let velocity = 1.0 - (-gradient.abs() / self.config.velocity_regularizer).exp();
                let velocity = (velocity * VELOCITY_ELEVATION_WEIGHT
                    + VELOCITY_PROXIMITY_WEIGHT * VELOCITY_PROXIMITY_TERM)
                    .clamp(0.0, 1.0);
                Transfer {
                    target,
                    gradient,
                    amount: velocity * available,
                }
            })
            .collect();

        let requested: f32 = transfers.iter().map(|t| t.amount).sum();
        if requested > available {
            let scale = available / requested;
            for transfer in &mut transfers {
                transfer.amount *= scale;
            }
        }
        transfers
    }

    /// Deposit water and iterate until the budget runs out or, when
    /// enabled, the terrain stops moving.
    pub fn run(&mut self, elevation: &mut NoiseGrid, rng: &mut Pcg64) -> ErosionReport {
        let mut report = ErosionReport {
            iterations_run: 0,
            last_movement: 0.0,
            converged: false,
        };
        if !self.config.enabled || self.config.iterations == 0 {
            return report;
        }

        self.deposit_water(rng);

        for iteration in 0..self.config.iterations {
            let movement = self.iterate(elevation);
            report.iterations_run = iteration + 1;
            report.last_movement = movement;
            debug!("Erosion iteration {iteration}: terrain movement {movement:.5}");

            if movement < self.config.min_terrain_movement {
                report.converged = true;
                if self.config.stop_on_convergence {
                    break;
                }
            }
        }

        info!(
            "Erosion finished after {iterations} iterations (converged: {converged})",
            iterations = report.iterations_run,
            converged = report.converged
        );
        report
    }
}
