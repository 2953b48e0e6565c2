//! Occupancy checks for tiles that actors are standing on

use crate::map::Region;
use crate::terrain::TileIndex;
use bevy::prelude::*;
use std::collections::HashSet;

/// Source of truth for which tiles currently hold an actor
pub trait TileOccupancy: Send + Sync {
    fn is_occupied(&self, index: TileIndex) -> bool;

    /// Occupied tiles block movement, except the tile being moved to
    fn blocks(&self, index: TileIndex, goal: Option<TileIndex>) -> bool {
        Some(index) != goal && self.is_occupied(index)
    }
}

/// Plain set of occupied tile indices
#[derive(Debug, Clone, Default)]
pub struct OccupiedTiles {
    tiles: HashSet<TileIndex>,
}

impl OccupiedTiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn occupy(&mut self, index: TileIndex) {
        self.tiles.insert(index);
    }

    /// Mark the tile under a world position; false if no tile is there
    pub fn occupy_at(&mut self, region: &dyn Region, world: Vec3) -> bool {
        match region.tile_at(world) {
            Some(tile) => {
                self.tiles.insert(tile.index);
                true
            }
            None => false,
        }
    }

    pub fn vacate(&mut self, index: TileIndex) {
        self.tiles.remove(&index);
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl TileOccupancy for OccupiedTiles {
    fn is_occupied(&self, index: TileIndex) -> bool {
        self.tiles.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::HexRegion;

    #[test]
    fn test_goal_is_never_blocked() {
        let mut occupied = OccupiedTiles::new();
        occupied.occupy(TileIndex::new(1, 1));

        assert!(occupied.blocks(TileIndex::new(1, 1), None));
        assert!(occupied.blocks(TileIndex::new(1, 1), Some(TileIndex::new(2, 1))));
        assert!(!occupied.blocks(TileIndex::new(1, 1), Some(TileIndex::new(1, 1))));
        assert!(!occupied.blocks(TileIndex::new(0, 1), None));
    }

    #[test]
    fn test_occupy_at_world_position() {
        let region = HexRegion::flat(1, 1.0);
        let mut occupied = OccupiedTiles::new();

        assert!(occupied.occupy_at(&region, Vec3::ZERO));
        assert!(occupied.is_occupied(region.center_index()));
        assert!(!occupied.occupy_at(&region, Vec3::new(100.0, 0.0, 100.0)));
        assert_eq!(occupied.len(), 1);

        occupied.vacate(region.center_index());
        assert!(occupied.is_empty());
    }
}
