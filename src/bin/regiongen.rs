use clap::Parser;
use hexterrain::config::{load_settings, load_settings_from};
use hexterrain::pathfinding::{DijkstraPathFinder, LongDistancePathFinder, PathFinder, SearchLimits};
use hexterrain::{HexRegion, RegionSettings, TerrainError, TerrainResult, TileIndex};
use std::path::PathBuf;
use validator::Validate;

mod regiongen {
    pub mod cli_utils;
}

use regiongen::cli_utils::*;

#[derive(Parser, Clone, Debug)]
#[command(name = "regiongen")]
#[command(about = "Generate a hex terrain region and plan moves across it")]
struct Args {
    /// Settings file (TOML); defaults to the user settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducible generation
    #[arg(long)]
    seed: Option<u32>,

    /// Requested number of tiles
    #[arg(long)]
    tiles: Option<u32>,

    /// Tile size in world units
    #[arg(long)]
    tile_size: Option<f32>,

    /// World height of the highest elevation
    #[arg(long)]
    max_elevation: Option<f32>,

    /// Start tile as axial "Q,R"
    #[arg(long, allow_hyphen_values = true)]
    from: Option<String>,

    /// Goal tile as axial "Q,R"
    #[arg(long, allow_hyphen_values = true)]
    to: Option<String>,

    /// Action points available for the move. The cost of a single step
    /// stays capped by `max_action_points` from the settings.
    #[arg(long)]
    action_points: Option<f32>,

    /// Move toward goals beyond the action point budget
    #[arg(long)]
    long_distance: bool,
}

fn build_settings(args: &Args) -> TerrainResult<RegionSettings> {
    let mut settings = match &args.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings(),
    };

    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if let Some(tiles) = args.tiles {
        settings.region.number_of_tiles = tiles;
    }
    if let Some(tile_size) = args.tile_size {
        settings.region.tile_size = tile_size;
    }
    if let Some(max_elevation) = args.max_elevation {
        settings.region.max_elevation = max_elevation;
    }
    if let Some(action_points) = args.action_points {
        settings.movement.action_points = action_points;
    }

    settings.validate()?;
    Ok(settings)
}

fn plan_move(args: &Args, settings: &RegionSettings, region: &HexRegion) -> TerrainResult<()> {
    let (Some(from), Some(to)) = (&args.from, &args.to) else {
        if args.from.is_some() || args.to.is_some() {
            return Err(TerrainError::InvalidConfig {
                reason: "--from and --to must be given together".to_string(),
            });
        }
        return Ok(());
    };

    let lookup = |axial: TileIndex| {
        region
            .tile_at_axial(axial)
            .copied()
            .ok_or(TerrainError::TileNotFound { index: axial })
    };
    let start = lookup(parse_axial(from)?)?;
    let goal = lookup(parse_axial(to)?)?;

    let movement = &settings.movement;
    let limits = SearchLimits::for_move(movement.action_points, movement.max_action_points);
    let dijkstra = DijkstraPathFinder::new(limits)
        .with_elevation_costs(movement.up_elevation_per_point, movement.down_elevation_per_point);

    let result = if args.long_distance {
        let finder = LongDistancePathFinder::new(limits);
        let astar = finder
            .astar()
            .clone()
            .with_elevation_costs(movement.up_elevation_per_point, movement.down_elevation_per_point);
        LongDistancePathFinder::from_parts(dijkstra, astar).path_from(region, &start, &goal)
    } else {
        dijkstra.path_from(region, &start, &goal)
    };

    print_path(region, &result);
    Ok(())
}

fn main() -> TerrainResult<()> {
    let args = Args::parse();

    let settings = build_settings(&args)?;
    let seed = settings.resolve_seed();
    let region = HexRegion::from_settings(seed, &settings)?;

    print_region_summary(&region, seed);
    plan_move(&args, &settings, &region)
}
