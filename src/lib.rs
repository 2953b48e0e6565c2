pub mod config;
pub mod errors;
pub mod map;
pub mod pathfinding;
pub mod plugins;
pub mod resources;
pub mod terrain;
pub mod terrain_generation;

// Selective re-exports for external consumers

pub use plugins::*;

pub use errors::{TerrainError, TerrainResult};

pub use config::{ElevationConfig, ErosionConfig, MovementConfig, NoiseConfig, RegionGenConfig, RegionSettings};

pub use map::{HexRegion, Region, SquareRegion};

pub use crate::pathfinding::{
    AstarPathFinder, DijkstraPathFinder, LongDistancePathFinder, PathFinder, PathResult, SearchContext,
    SearchLimits, SearchOutcome,
};

pub use resources::TerrainSession;

pub use terrain::{Tile, TileIndex};
