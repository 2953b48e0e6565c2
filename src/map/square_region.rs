use super::{Region, RegionStats, TileGrid};
use crate::config::{ElevationConfig, ErosionConfig, NoiseConfig, RegionGenConfig};
use crate::errors::TerrainResult;
use crate::terrain::coordinates::*;
use crate::terrain::{Tile, TileIndex};
use crate::terrain_generation::HeightMap;
use bevy::prelude::*;
use validator::Validate;

/// Square region with eight-way adjacency. Every cell holds a tile.
#[derive(Debug, Clone)]
pub struct SquareRegion {
    grid: TileGrid,
    grid_radius: u32,
    tile_size: f32,
    height_map: Option<HeightMap>,
    stats: RegionStats,
}

impl SquareRegion {
    pub fn new(
        seed: u32,
        region: &RegionGenConfig,
        elevation: &ElevationConfig,
        noise: &NoiseConfig,
        erosion: &ErosionConfig,
    ) -> TerrainResult<Self> {
        region.validate()?;

        let grid_radius = compute_square_radius(region.number_of_tiles);
        let resolution = HeightMap::resolution_for(grid_radius, elevation.resolution_scale);
        let height_map = HeightMap::generate(seed, resolution, elevation, noise, erosion)?;

        let mut square_region = Self::from_elevation_fn(
            grid_radius,
            region.tile_size,
            region.max_elevation,
            |_, (u, v)| height_map.read(u, v).unwrap_or(0.0),
        );
        square_region.height_map = Some(height_map);

        info!(
            "Built square region (seed {seed}): radius {grid_radius}, {count} tiles",
            count = square_region.stats.tile_count
        );
        Ok(square_region)
    }

    /// Lay out tiles with elevations from `elevation_at`, which receives
    /// the offset from the center and normalized (u, v).
    pub fn from_elevation_fn(
        grid_radius: u32,
        tile_size: f32,
        max_elevation: f32,
        mut elevation_at: impl FnMut(TileIndex, (f32, f32)) -> f32,
    ) -> Self {
        let radius = grid_radius as i32;
        let side = 2 * grid_radius + 1;
        let mut grid = TileGrid::new(side as usize);

        for x in -radius..=radius {
            for y in -radius..=radius {
                let offset = TileIndex::new(x, y);
                let (world_x, world_z) = (tile_size * x as f32, tile_size * y as f32);
                let uv = world_to_uv(world_x, world_z, tile_size, side);
                let height = max_elevation * elevation_at(offset, uv);
                grid.insert(Tile::new(
                    Vec3::new(world_x, height, world_z),
                    TileIndex::new(x + radius, y + radius),
                ));
            }
        }

        let stats = RegionStats::from_tiles(grid.iter());
        Self {
            grid,
            grid_radius,
            tile_size,
            height_map: None,
            stats,
        }
    }

    pub fn flat(grid_radius: u32, tile_size: f32) -> Self {
        Self::from_elevation_fn(grid_radius, tile_size, 1.0, |_, _| 0.0)
    }

    pub fn height_map(&self) -> Option<&HeightMap> {
        self.height_map.as_ref()
    }
}

impl Region for SquareRegion {
    fn grid(&self) -> &TileGrid {
        &self.grid
    }

    fn grid_radius(&self) -> u32 {
        self.grid_radius
    }

    fn tile_size(&self) -> f32 {
        self.tile_size
    }

    fn neighbor_offsets(&self) -> &'static [TileIndex] {
        &SQUARE_NEIGHBORS
    }

    fn world_to_index(&self, world_x: f32, world_z: f32) -> Option<TileIndex> {
        world_to_square(world_x, world_z, self.tile_size)?.checked_add(self.center_index())
    }

    fn step_length(&self, from: TileIndex, to: TileIndex) -> f32 {
        (to - from).magnitude()
    }

    fn stats(&self) -> &RegionStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_square_is_full() {
        let region = SquareRegion::flat(2, 1.0);
        assert_eq!(region.tiles().count(), 25);
        assert_eq!(region.neighbors_of(region.center_index()).len(), 8);
        assert_eq!(region.neighbors_of(TileIndex::new(0, 0)).len(), 3);
    }

    #[test]
    fn test_diagonal_step_length() {
        let region = SquareRegion::flat(1, 1.0);
        let center = region.center_index();
        assert_eq!(region.step_length(center, center + TileIndex::new(0, 1)), 1.0);
        assert!((region.step_length(center, center + TileIndex::new(1, 1)) - 2f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_tile_at_round_trip() {
        let region = SquareRegion::flat(3, 0.5);
        for tile in region.tiles() {
            assert_eq!(region.tile_at(tile.position), Some(tile));
            let nudged = tile.position + Vec3::new(0.2, 0.0, -0.2);
            assert_eq!(region.tile_at(nudged), Some(tile));
        }
    }

    #[test]
    fn test_out_of_range_lookups_are_absent() {
        let region = SquareRegion::flat(2, 1.0);
        assert!(region.tile_at(Vec3::new(1e12, 0.0, 0.0)).is_none());
        assert!(region.tile_at(Vec3::new(-3.0e9, 0.0, 0.0)).is_none());
        assert!(region.tile_at(Vec3::NAN).is_none());
        assert!(region.neighbors_of(TileIndex::new(i32::MAX, 0)).is_empty());
        assert!(region.neighbors_of(TileIndex::new(i32::MIN, i32::MAX)).is_empty());
        // A corner keeps only its in-grid neighbors
        assert_eq!(region.neighbors_of(TileIndex::new(4, 4)).len(), 3);
    }

    #[test]
    fn test_generated_square_region() {
        let region = SquareRegion::new(
            3,
            &RegionGenConfig {
                number_of_tiles: 100,
                ..Default::default()
            },
            &ElevationConfig::default(),
            &NoiseConfig::default(),
            &ErosionConfig::default(),
        )
        .unwrap();
        assert_eq!(region.grid_radius(), 4);
        assert_eq!(region.tiles().count(), 81);
        assert!(region.height_map().is_some());
    }
}
