use super::{AstarPathFinder, DijkstraPathFinder, PathFinder, PathResult, SearchContext, SearchLimits};
use crate::map::Region;
use crate::terrain::Tile;
use crate::terrain::constants::{LONG_DISTANCE_MAX_COST, LONG_DISTANCE_MAX_DEPTH};
use bevy::prelude::*;

/// Move toward goals beyond the move budget.
///
/// Tries a budgeted Dijkstra first. When the goal is out of range, a wide
/// A* finds the general route and the move stops at the last tile of that
/// route still inside the reachable area.
#[derive(Debug, Clone)]
pub struct LongDistancePathFinder {
    dijkstra: DijkstraPathFinder,
    astar: AstarPathFinder,
}

impl LongDistancePathFinder {
    pub fn new(limits: SearchLimits) -> Self {
        let route_limits = SearchLimits::new(
            LONG_DISTANCE_MAX_DEPTH,
            LONG_DISTANCE_MAX_COST,
            limits.max_incremental_cost,
        );
        Self {
            dijkstra: DijkstraPathFinder::new(limits),
            astar: AstarPathFinder::new(route_limits),
        }
    }

    /// Build from explicitly configured inner finders
    pub fn from_parts(dijkstra: DijkstraPathFinder, astar: AstarPathFinder) -> Self {
        Self { dijkstra, astar }
    }

    pub fn dijkstra(&self) -> &DijkstraPathFinder {
        &self.dijkstra
    }

    pub fn astar(&self) -> &AstarPathFinder {
        &self.astar
    }
}

impl PathFinder for LongDistancePathFinder {
    fn path_from_with(
        &self,
        region: &dyn Region,
        start: &Tile,
        goal: &Tile,
        context: &SearchContext<'_>,
    ) -> PathResult {
        let direct = self.dijkstra.path_from_with(region, start, goal, context);
        if direct.reached_goal() {
            return direct;
        }

        let route = self.astar.path_from_with(region, start, goal, context);
        let reachable = self.dijkstra.reachable_from(region, start, context);

        let mut waypoint: Option<Tile> = None;
        if route.reached_goal() {
            for tile in route.tiles_on_path_start_first() {
                if !reachable.has_explored(tile.index) {
                    break;
                }
                waypoint = Some(tile);
            }
        }

        match waypoint {
            Some(waypoint) => {
                debug!(
                    "Goal {goal} out of range, moving toward {waypoint}",
                    goal = goal.index,
                    waypoint = waypoint.index
                );
                self.dijkstra.path_from_with(region, start, &waypoint, context)
            }
            None => reachable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::HexRegion;
    use crate::pathfinding::SearchOutcome;
    use crate::terrain::TileIndex;

    fn hex_tile(region: &HexRegion, q: i32, r: i32) -> Tile {
        *region.tile(region.index_of_axial(TileIndex::new(q, r))).unwrap()
    }

    #[test]
    fn test_goal_in_range_uses_direct_path() {
        let region = HexRegion::flat(3, 1.0);
        let finder = LongDistancePathFinder::new(SearchLimits::for_move(3.0, 5.0));
        let start = hex_tile(&region, 0, 0);
        let goal = hex_tile(&region, 2, 0);

        let result = finder.path_from(&region, &start, &goal);
        assert!(result.reached_goal());
        assert_eq!(result.path_cost(), 2.0);
    }

    #[test]
    fn test_far_goal_stops_at_edge_of_range() {
        let region = HexRegion::flat(6, 0.5);
        let finder = LongDistancePathFinder::new(SearchLimits::for_move(2.0, 5.0));
        let start = hex_tile(&region, -6, 0);
        let goal = hex_tile(&region, 6, 0);

        let result = finder.path_from(&region, &start, &goal);
        assert!(result.reached_goal());
        assert_eq!(result.path_cost(), 2.0);
        let path = result.tiles_on_path_start_first();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&hex_tile(&region, -4, 0)));
    }

    #[test]
    fn test_unroutable_goal_returns_reachable_area() {
        // A wall of steep tiles at q = 0 cuts the region in two
        let region = HexRegion::from_elevation_fn(3, 1.0, 10.0, |axial, _| {
            if axial.i == 0 { 1.0 } else { 0.0 }
        });
        let finder = LongDistancePathFinder::new(SearchLimits::for_move(2.0, 5.0));
        let start = hex_tile(&region, -3, 0);
        let goal = hex_tile(&region, 3, 0);

        let result = finder.path_from(&region, &start, &goal);
        assert!(!result.reached_goal());
        assert_eq!(result.outcome(), SearchOutcome::FrontierExhausted);
        assert!(result.has_explored(start.index));
        assert!(result.explored_tiles().iter().all(|t| region.axial_of(t.index).i < 0));
    }
}
