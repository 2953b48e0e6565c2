use hexterrain::map::HexRegion;
use hexterrain::pathfinding::PathResult;
use hexterrain::{Region, TerrainError, TerrainResult, TileIndex};
use std::str::FromStr;

/// Split `input` on `delimiter` into exactly `N` parsed values
pub fn parse_delimited<T, const N: usize>(input: &str, delimiter: char, type_name: &str) -> TerrainResult<[T; N]>
where
    T: Copy + Default + FromStr,
{
    let parts: Vec<&str> = input.split(delimiter).map(str::trim).collect();
    if parts.len() != N {
        return Err(TerrainError::InvalidConfig {
            reason: format!("Invalid {type_name} format '{input}'. Expected {N} {delimiter}-separated values"),
        });
    }

    let mut result = [T::default(); N];
    for (slot, part) in result.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| TerrainError::InvalidConfig {
            reason: format!("Invalid {type_name} value: '{part}'"),
        })?;
    }

    Ok(result)
}

/// Parse an axial coordinate "Q,R"
pub fn parse_axial(input: &str) -> TerrainResult<TileIndex> {
    let [q, r] = parse_delimited::<i32, 2>(input, ',', "axial coordinate")?;
    Ok(TileIndex::new(q, r))
}

pub fn print_region_summary(region: &HexRegion, seed: u32) {
    let stats = region.stats();
    println!("Region generated (seed {seed})");
    println!("  Grid radius: {}", region.grid_radius());
    println!("  Tiles: {}", stats.tile_count);
    println!("  Tile size: {}", region.tile_size());
    println!(
        "  Elevation: min {:.3}, max {:.3}, avg {:.3} (max elevation {})",
        stats.min_elevation,
        stats.max_elevation,
        stats.average_elevation,
        region.max_elevation()
    );

    if let Some(report) = region.height_map().map(|map| map.erosion_report()) {
        println!(
            "  Erosion: {} iterations, last movement {:.5}{}",
            report.iterations_run,
            report.last_movement,
            if report.converged { " (converged)" } else { "" }
        );
    }
}

pub fn print_path(region: &HexRegion, result: &PathResult) {
    println!("\nPath search: {:?}", result.outcome());
    println!("  Explored tiles: {}", result.explored_path_tiles().len());
    if !result.reached_goal() {
        println!("  Goal not reached");
        return;
    }

    println!("  Cost: {:.3}", result.path_cost());
    for tile in result.tiles_on_path_start_first() {
        println!("    {} elevation {:.3}", region.axial_of(tile.index), tile.elevation());
    }
}
