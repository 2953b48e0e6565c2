use super::{Region, RegionStats, TileGrid};
use crate::config::{ElevationConfig, ErosionConfig, NoiseConfig, RegionGenConfig, RegionSettings};
use crate::errors::TerrainResult;
use crate::terrain::coordinates::*;
use crate::terrain::{Tile, TileIndex};
use crate::terrain_generation::HeightMap;
use bevy::prelude::*;
use validator::Validate;

/// Hexagonal region of flat-top hex tiles centered on the origin.
///
/// Tiles are stored at `axial + (radius, radius)`; array cells whose
/// axial coordinate falls outside the hexagon hold no tile.
#[derive(Debug, Clone)]
pub struct HexRegion {
    grid: TileGrid,
    grid_radius: u32,
    tile_size: f32,
    max_elevation: f32,
    height_map: Option<HeightMap>,
    stats: RegionStats,
}

impl HexRegion {
    /// Generate terrain and lay out the hex tiles on it
    pub fn new(
        seed: u32,
        region: &RegionGenConfig,
        elevation: &ElevationConfig,
        noise: &NoiseConfig,
        erosion: &ErosionConfig,
    ) -> TerrainResult<Self> {
        region.validate()?;

        let grid_radius = compute_grid_radius(region.number_of_tiles);
        let resolution = HeightMap::resolution_for(grid_radius, elevation.resolution_scale);
        let height_map = HeightMap::generate(seed, resolution, elevation, noise, erosion)?;

        let mut hex_region = Self::from_elevation_fn(
            grid_radius,
            region.tile_size,
            region.max_elevation,
            |_, (u, v)| height_map.read(u, v).unwrap_or(0.0),
        );
        hex_region.height_map = Some(height_map);

        info!(
            "Built hex region (seed {seed}): radius {radius}, {count} tiles, elevation {min:.2}..{max:.2} avg {avg:.2}",
            radius = grid_radius,
            count = hex_region.stats.tile_count,
            min = hex_region.stats.min_elevation,
            max = hex_region.stats.max_elevation,
            avg = hex_region.stats.average_elevation
        );

        Ok(hex_region)
    }

    pub fn from_settings(seed: u32, settings: &RegionSettings) -> TerrainResult<Self> {
        Self::new(
            seed,
            &settings.region,
            &settings.elevation,
            &settings.noise,
            &settings.erosion,
        )
    }

    /// Lay out tiles with elevations from `elevation_at`, which receives
    /// the tile's axial coordinate and normalized (u, v) and returns a
    /// fraction of `max_elevation`.
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
                if (x + y).abs() > radius {
                    continue;
                }
                let axial = TileIndex::new(x, y);
                let (world_x, world_z) = hex_to_world(axial, tile_size);
                let uv = world_to_uv(world_x, world_z, tile_size, side);
                let height = max_elevation * elevation_at(axial, uv);
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
            max_elevation,
            height_map: None,
            stats,
        }
    }

    /// Region with every tile at elevation zero
    pub fn flat(grid_radius: u32, tile_size: f32) -> Self {
        Self::from_elevation_fn(grid_radius, tile_size, 1.0, |_, _| 0.0)
    }

    pub fn height_map(&self) -> Option<&HeightMap> {
        self.height_map.as_ref()
    }

    pub fn max_elevation(&self) -> f32 {
        self.max_elevation
    }

    /// Axial coordinate (relative to the center) of an array index
    pub fn axial_of(&self, index: TileIndex) -> TileIndex {
        index - self.center_index()
    }

    /// Array index of an axial coordinate
    pub fn index_of_axial(&self, axial: TileIndex) -> TileIndex {
        axial + self.center_index()
    }

    /// Tile at an axial coordinate from outside input; any value is accepted
    pub fn tile_at_axial(&self, axial: TileIndex) -> Option<&Tile> {
        axial
            .checked_add(self.center_index())
            .and_then(|index| self.tile(index))
    }
}

impl Region for HexRegion {
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
        &HEX_NEIGHBORS
    }

    fn world_to_index(&self, world_x: f32, world_z: f32) -> Option<TileIndex> {
        world_to_hex(world_x, world_z, self.tile_size)?.checked_add(self.center_index())
    }

    fn step_length(&self, from: TileIndex, to: TileIndex) -> f32 {
        hex_distance(from, to) as f32
    }

    fn stats(&self) -> &RegionStats {
        &self.stats
    }
}
