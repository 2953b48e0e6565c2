use crate::terrain::{Tile, TileIndex};
use bevy::prelude::*;

pub mod hex_region;
pub mod square_region;

pub use hex_region::HexRegion;
pub use square_region::SquareRegion;

/// Elevation summary of a region's tiles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegionStats {
    pub min_elevation: f32,
    pub max_elevation: f32,
    pub average_elevation: f32,
    pub tile_count: usize,
}

impl RegionStats {
    pub fn from_tiles<'a>(tiles: impl Iterator<Item = &'a Tile>) -> Self {
        let mut stats = RegionStats {
            min_elevation: f32::MAX,
            max_elevation: f32::MIN,
            ..Default::default()
        };
        let mut sum = 0.0f64;
        for tile in tiles {
            stats.min_elevation = stats.min_elevation.min(tile.elevation());
            stats.max_elevation = stats.max_elevation.max(tile.elevation());
            sum += tile.elevation() as f64;
            stats.tile_count += 1;
        }
        if stats.tile_count == 0 {
            return RegionStats::default();
        }
        stats.average_elevation = (sum / stats.tile_count as f64) as f32;
        stats
    }
}

/// Square backing array of optional tiles.
///
/// Cells outside the region's shape stay `None`; every lookup is
/// bounds-checked and reports absence instead of failing.
#[derive(Debug, Clone)]
pub struct TileGrid {
    side: usize,
    cells: Vec<Option<Tile>>,
}

impl TileGrid {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![None; side * side],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    fn offset(&self, index: TileIndex) -> Option<usize> {
        if index.i < 0 || index.j < 0 {
            return None;
        }
        let (i, j) = (index.i as usize, index.j as usize);
        if i >= self.side || j >= self.side {
            return None;
        }
        Some(i * self.side + j)
    }

    pub fn get(&self, index: TileIndex) -> Option<&Tile> {
        self.offset(index).and_then(|offset| self.cells[offset].as_ref())
    }

    pub fn insert(&mut self, tile: Tile) {
        if let Some(offset) = self.offset(tile.index) {
            self.cells[offset] = Some(tile);
        }
    }

    /// Present tiles in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// A grid of terrain tiles that path finders can walk.
///
/// Implementors describe their layout (neighbor directions, world
/// mapping, step metric); lookups and neighbor enumeration are shared.
pub trait Region: Send + Sync {
    fn grid(&self) -> &TileGrid;

    fn grid_radius(&self) -> u32;

    fn tile_size(&self) -> f32;

    /// Neighbor offsets in the order neighbors are reported
    fn neighbor_offsets(&self) -> &'static [TileIndex];

    /// Array index of the cell containing a world point. The index may
    /// lie outside the grid; `None` when the point has no integer address.
    fn world_to_index(&self, world_x: f32, world_z: f32) -> Option<TileIndex>;

    /// Grid-metric length of the step between two indices
    fn step_length(&self, from: TileIndex, to: TileIndex) -> f32;

    fn stats(&self) -> &RegionStats;

    fn tile(&self, index: TileIndex) -> Option<&Tile> {
        self.grid().get(index)
    }

    fn tile_at(&self, world: Vec3) -> Option<&Tile> {
        self.world_to_index(world.x, world.z)
            .and_then(|index| self.tile(index))
    }

    fn neighbors_of(&self, index: TileIndex) -> Vec<Tile> {
        self.neighbor_offsets()
            .iter()
            .filter_map(|offset| index.checked_add(*offset))
            .filter_map(|neighbor| self.tile(neighbor).copied())
            .collect()
    }

    fn neighbors_at(&self, world: Vec3) -> Vec<Tile> {
        match self.tile_at(world) {
            Some(tile) => self.neighbors_of(tile.index),
            None => Vec::new(),
        }
    }

    /// Straight-line world-space distance between tile centers
    fn distance(&self, a: &Tile, b: &Tile) -> f32 {
        a.position.distance(b.position)
    }

    fn center_index(&self) -> TileIndex {
        let radius = self.grid_radius() as i32;
        TileIndex::new(radius, radius)
    }

    fn tiles(&self) -> Box<dyn Iterator<Item = &Tile> + '_> {
        Box::new(self.grid().iter())
    }
}
