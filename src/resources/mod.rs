use crate::config::RegionSettings;
use crate::errors::{TerrainError, TerrainResult};
use crate::map::{HexRegion, Region};
use crate::pathfinding::{
    AstarPathFinder, DijkstraPathFinder, LongDistancePathFinder, OccupiedTiles, PathFinder,
    PathResult, SearchContext, SearchLimits,
};
use crate::terrain::constants::{LONG_DISTANCE_MAX_COST, LONG_DISTANCE_MAX_DEPTH};
use crate::terrain::{Tile, TileIndex};
use bevy::prelude::*;
use validator::Validate;

/// One play session over a generated region.
///
/// Holds the region, the selected tile and the remaining move budget,
/// and answers move queries against them.
#[derive(Resource)]
pub struct TerrainSession {
    seed: u32,
    settings: RegionSettings,
    region: HexRegion,
    selected: Option<TileIndex>,
    action_points: f32,
    occupied: OccupiedTiles,
}

impl TerrainSession {
    pub fn new(settings: RegionSettings) -> TerrainResult<Self> {
        settings.validate()?;
        let seed = settings.resolve_seed();
        let region = HexRegion::from_settings(seed, &settings)?;
        let action_points = settings.movement.action_points;

        Ok(Self {
            seed,
            settings,
            region,
            selected: None,
            action_points,
            occupied: OccupiedTiles::new(),
        })
    }

    /// Rebuild the region from a new seed, keeping the settings
    pub fn regenerate(&mut self, seed: u32) -> TerrainResult<()> {
        self.region = HexRegion::from_settings(seed, &self.settings)?;
        self.seed = seed;
        self.selected = None;
        self.occupied.clear();
        self.action_points = self.settings.movement.action_points;
        Ok(())
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn settings(&self) -> &RegionSettings {
        &self.settings
    }

    pub fn region(&self) -> &HexRegion {
        &self.region
    }

    /// Select the tile under a world position; clears the selection when
    /// the position is off the map.
    pub fn select_tile_at(&mut self, world: Vec3) -> Option<Tile> {
        let tile = self.region.tile_at(world).copied();
        self.selected = tile.map(|t| t.index);
        tile
    }

    pub fn select_tile(&mut self, index: TileIndex) -> TerrainResult<Tile> {
        let tile = self
            .region
            .tile(index)
            .copied()
            .ok_or(TerrainError::TileNotFound { index })?;
        self.selected = Some(index);
        Ok(tile)
    }

    pub fn selected_tile(&self) -> Option<Tile> {
        self.selected.and_then(|index| self.region.tile(index).copied())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn action_points(&self) -> f32 {
        self.action_points
    }

    pub fn set_action_points(&mut self, points: f32) {
        self.action_points = points.clamp(0.0, self.settings.movement.max_action_points);
    }

    /// Deduct the cost of a move; false if the budget does not cover it
    pub fn spend_action_points(&mut self, cost: f32) -> bool {
        if cost > self.action_points {
            return false;
        }
        self.action_points -= cost;
        true
    }

    pub fn occupied_tiles(&self) -> &OccupiedTiles {
        &self.occupied
    }

    pub fn occupied_tiles_mut(&mut self) -> &mut OccupiedTiles {
        &mut self.occupied
    }

    fn move_limits(&self) -> SearchLimits {
        SearchLimits::for_move(self.action_points, self.settings.movement.max_action_points)
    }

    fn move_finder(&self) -> DijkstraPathFinder {
        let movement = &self.settings.movement;
        DijkstraPathFinder::new(self.move_limits())
            .with_elevation_costs(movement.up_elevation_per_point, movement.down_elevation_per_point)
    }

    /// Tiles the selected tile can reach with the remaining action points
    pub fn move_range(&self) -> Option<PathResult> {
        let start = self.selected_tile()?;
        let context = SearchContext::new().blocking(&self.occupied);
        Some(self.move_finder().reachable_from(&self.region, &start, &context))
    }

    /// Path from the selected tile toward the tile under `world`. Goals
    /// beyond the budget yield the longest affordable approach.
    pub fn plan_move_to(&self, world: Vec3) -> Option<PathResult> {
        let start = self.selected_tile()?;
        let goal = *self.region.tile_at(world)?;
        let movement = &self.settings.movement;
        let route_limits = SearchLimits::new(
            LONG_DISTANCE_MAX_DEPTH,
            LONG_DISTANCE_MAX_COST,
            movement.max_action_points,
        );
        let finder = LongDistancePathFinder::from_parts(
            self.move_finder(),
            AstarPathFinder::new(route_limits)
                .with_elevation_costs(movement.up_elevation_per_point, movement.down_elevation_per_point),
        );
        let context = SearchContext::new().blocking(&self.occupied);
        Some(finder.path_from_with(&self.region, &start, &goal, &context))
    }

    /// Commit a planned move: pay for it and select its last tile
    pub fn apply_move(&mut self, result: &PathResult) -> bool {
        let Some(destination) = result.path_tiles().first() else {
            return false;
        };
        if !result.reached_goal() || !self.spend_action_points(result.path_cost()) {
            return false;
        }
        self.selected = Some(destination.index());
        true
    }
}
