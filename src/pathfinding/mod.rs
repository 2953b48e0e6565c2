use crate::map::Region;
use crate::terrain::constants::*;
use crate::terrain::{Tile, TileIndex};
use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

pub mod cancellation;
pub mod long_distance;
pub mod occupancy;
pub mod priority_queue;

pub use cancellation::CancellationToken;
pub use long_distance::LongDistancePathFinder;
pub use occupancy::{OccupiedTiles, TileOccupancy};
pub use priority_queue::PriorityQueue;

/// Caps applied to a single search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchLimits {
    /// Maximum number of steps from the start
    pub max_depth: u32,
    /// Maximum accumulated cost; costlier nodes are pruned
    pub max_cost: f32,
    /// Steps costing more than this are impassable
    pub max_incremental_cost: f32,
}

impl SearchLimits {
    pub fn new(max_depth: u32, max_cost: f32, max_incremental_cost: f32) -> Self {
        Self {
            max_depth,
            max_cost,
            max_incremental_cost,
        }
    }

    /// Limits for a move paid from an action point budget
    pub fn for_move(action_points: f32, max_action_points: f32) -> Self {
        Self::new(max_action_points.ceil().max(0.0) as u32, action_points, max_action_points)
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::new(50, 1000.0, DEFAULT_ACTION_POINTS)
    }
}

/// How much a single step between adjacent tiles costs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepCost {
    /// Base cost 1 (or `sqrt(2)` for long grid steps) plus an elevation
    /// penalty in either direction
    Terrain {
        up_elevation_per_point: f32,
        down_elevation_per_point: f32,
    },
    /// Fixed cost per step regardless of terrain
    Uniform(f32),
}

impl Default for StepCost {
    fn default() -> Self {
        StepCost::Terrain {
            up_elevation_per_point: UP_ELEVATION_PER_POINT,
            down_elevation_per_point: DOWN_ELEVATION_PER_POINT,
        }
    }
}

impl StepCost {
    pub fn between(&self, region: &dyn Region, from: &Tile, to: &Tile, max_incremental_cost: f32) -> f32 {
        match *self {
            StepCost::Uniform(cost) => cost,
            StepCost::Terrain {
                up_elevation_per_point,
                down_elevation_per_point,
            } => {
                let mut cost = if region.step_length(from.index, to.index) > 1.0 {
                    DIAGONAL_STEP_COST
                } else {
                    1.0
                };
                let delta = to.elevation() - from.elevation();
                if delta < 0.0 {
                    cost -= delta / down_elevation_per_point;
                } else {
                    cost += delta / up_elevation_per_point;
                }
                if cost > max_incremental_cost {
                    f32::INFINITY
                } else {
                    cost
                }
            }
        }
    }
}

/// Estimate of the remaining cost from a tile to the goal
pub trait Heuristic: Send + Sync {
    fn estimate(&self, region: &dyn Region, from: &Tile, goal: &Tile) -> f32;
}

/// No estimate: plain uniform-cost search
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _region: &dyn Region, _from: &Tile, _goal: &Tile) -> f32 {
        0.0
    }
}

/// World distance to the goal plus an elevation term for the height
/// difference. Not admissible on arbitrary terrain.
#[derive(Debug, Clone, Copy)]
pub struct TerrainHeuristic {
    pub up_elevation_per_point: f32,
    pub down_elevation_per_point: f32,
}

impl Default for TerrainHeuristic {
    fn default() -> Self {
        Self {
            up_elevation_per_point: UP_ELEVATION_PER_POINT,
            down_elevation_per_point: DOWN_ELEVATION_PER_POINT,
        }
    }
}

impl Heuristic for TerrainHeuristic {
    fn estimate(&self, region: &dyn Region, from: &Tile, goal: &Tile) -> f32 {
        let mut cost = region.distance(from, goal);
        let delta = from.elevation() - goal.elevation();
        if delta < 0.0 {
            cost -= delta / self.down_elevation_per_point;
        } else {
            cost += delta / self.up_elevation_per_point;
        }
        cost
    }
}

/// A tile reached during a search, with its step count from the start
#[derive(Debug, Clone, Copy)]
pub struct PathTile {
    pub tile: Tile,
    pub depth: u32,
}

impl PathTile {
    pub fn new(tile: Tile, depth: u32) -> Self {
        Self { tile, depth }
    }

    pub fn index(&self) -> TileIndex {
        self.tile.index
    }
}

impl PartialEq for PathTile {
    fn eq(&self, other: &Self) -> bool {
        self.tile == other.tile
    }
}

impl Eq for PathTile {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    GoalReached,
    FrontierExhausted,
    Cancelled,
}

/// Result of one search: the path (if any) and everything explored
#[derive(Debug, Clone)]
pub struct PathResult {
    /// Goal first, start last
    path: Vec<PathTile>,
    explored: Vec<PathTile>,
    explored_lookup: HashSet<TileIndex>,
    path_cost: f32,
    outcome: SearchOutcome,
}

impl PathResult {
    pub fn reached_goal(&self) -> bool {
        self.outcome == SearchOutcome::GoalReached
    }

    pub fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    /// Total cost of the path; zero when the goal was not reached
    pub fn path_cost(&self) -> f32 {
        self.path_cost
    }

    /// Path tiles ordered from the goal back to the start
    pub fn path_tiles(&self) -> &[PathTile] {
        &self.path
    }

    pub fn tiles_on_path(&self, start_first: bool) -> Vec<Tile> {
        let tiles = self.path.iter().map(|p| p.tile);
        if start_first {
            tiles.rev().collect()
        } else {
            tiles.collect()
        }
    }

    pub fn tiles_on_path_start_first(&self) -> Vec<Tile> {
        self.tiles_on_path(true)
    }

    /// Every finalized node, in the order it left the frontier
    pub fn explored_path_tiles(&self) -> &[PathTile] {
        &self.explored
    }

    pub fn explored_tiles(&self) -> Vec<Tile> {
        self.explored.iter().map(|p| p.tile).collect()
    }

    pub fn has_explored(&self, index: TileIndex) -> bool {
        self.explored_lookup.contains(&index)
    }
}

/// Optional collaborators for a search.
///
/// Supplying an occupancy makes occupied tiles impassable (apart from the
/// goal). A cancellation token is polled before every frontier pop.
#[derive(Clone, Copy, Default)]
pub struct SearchContext<'a> {
    pub occupancy: Option<&'a dyn TileOccupancy>,
    pub cancellation: Option<&'a CancellationToken>,
}

impl<'a> SearchContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocking(mut self, occupancy: &'a dyn TileOccupancy) -> Self {
        self.occupancy = Some(occupancy);
        self
    }

    pub fn cancellable(mut self, token: &'a CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation.is_some_and(|token| token.is_cancelled())
    }
}

/// Finds paths between tiles of a region
pub trait PathFinder: Send + Sync {
    fn path_from_with(
        &self,
        region: &dyn Region,
        start: &Tile,
        goal: &Tile,
        context: &SearchContext<'_>,
    ) -> PathResult;

    fn path_from(&self, region: &dyn Region, start: &Tile, goal: &Tile) -> PathResult {
        self.path_from_with(region, start, goal, &SearchContext::default())
    }
}

#[derive(Clone, Copy)]
struct Queued {
    tile: PathTile,
    cost: f32,
}

/// Best-first search with depth and cost caps, parameterized by heuristic
#[derive(Debug, Clone)]
pub struct BestFirstPathFinder<H> {
    limits: SearchLimits,
    step_cost: StepCost,
    heuristic: H,
    depth_influence: f32,
}

pub type DijkstraPathFinder = BestFirstPathFinder<ZeroHeuristic>;
pub type AstarPathFinder = BestFirstPathFinder<TerrainHeuristic>;

impl DijkstraPathFinder {
    pub fn new(limits: SearchLimits) -> Self {
        Self::with_heuristic(limits, ZeroHeuristic)
    }

    /// Dijkstra that charges the same cost for every step
    pub fn uniform(cost: f32, limits: SearchLimits) -> Self {
        let mut finder = Self::new(limits);
        finder.step_cost = StepCost::Uniform(cost.max(0.0));
        finder
    }

    pub fn with_elevation_costs(mut self, up_elevation_per_point: f32, down_elevation_per_point: f32) -> Self {
        self.step_cost = StepCost::Terrain {
            up_elevation_per_point,
            down_elevation_per_point,
        };
        self
    }
}

impl AstarPathFinder {
    pub fn new(limits: SearchLimits) -> Self {
        Self::with_heuristic(limits, TerrainHeuristic::default())
    }

    /// Set the elevation costs of both the step cost and the heuristic
    pub fn with_elevation_costs(mut self, up_elevation_per_point: f32, down_elevation_per_point: f32) -> Self {
        self.step_cost = StepCost::Terrain {
            up_elevation_per_point,
            down_elevation_per_point,
        };
        self.heuristic = TerrainHeuristic {
            up_elevation_per_point,
            down_elevation_per_point,
        };
        self
    }
}

impl<H: Heuristic> BestFirstPathFinder<H> {
    pub fn with_heuristic(limits: SearchLimits, heuristic: H) -> Self {
        Self {
            limits,
            step_cost: StepCost::default(),
            heuristic,
            depth_influence: HEURISTIC_DEPTH_INFLUENCE,
        }
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn set_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    pub fn step_cost(&self) -> &StepCost {
        &self.step_cost
    }

    pub fn cost_between(&self, region: &dyn Region, from: &Tile, to: &Tile) -> f32 {
        self.step_cost
            .between(region, from, to, self.limits.max_incremental_cost)
    }

    /// Explore everything reachable within the limits. The explored set
    /// of the result is the reachable area.
    pub fn reachable_from(&self, region: &dyn Region, start: &Tile, context: &SearchContext<'_>) -> PathResult {
        self.search(region, start, None, context)
    }

    fn search(
        &self,
        region: &dyn Region,
        start: &Tile,
        goal: Option<&Tile>,
        context: &SearchContext<'_>,
    ) -> PathResult {
        let goal_index = goal.map(|g| g.index);
        let mut frontier = PriorityQueue::new();
        let mut costs: HashMap<TileIndex, f32> = HashMap::new();
        let mut came_from: HashMap<TileIndex, PathTile> = HashMap::new();
        let mut explored: Vec<PathTile> = Vec::new();
        let mut explored_slots: HashMap<TileIndex, usize> = HashMap::new();

        costs.insert(start.index, 0.0);
        frontier.enqueue(
            Queued {
                tile: PathTile::new(*start, 0),
                cost: 0.0,
            },
            0.0,
        );

        let mut outcome = SearchOutcome::FrontierExhausted;
        let mut reached: Option<PathTile> = None;

        loop {
            if context.is_cancelled() {
                outcome = SearchOutcome::Cancelled;
                break;
            }
            let Some(current) = frontier.dequeue() else {
                break;
            };
            // A cheaper route to this tile was queued after this entry
            if costs.get(&current.tile.index()).is_some_and(|&best| current.cost > best) {
                continue;
            }

            match explored_slots.get(&current.tile.index()) {
                Some(&slot) => explored[slot] = current.tile,
                None => {
                    explored_slots.insert(current.tile.index(), explored.len());
                    explored.push(current.tile);
                }
            }

            if Some(current.tile.index()) == goal_index {
                outcome = SearchOutcome::GoalReached;
                reached = Some(current.tile);
                break;
            }

            let depth = current.tile.depth + 1;
            if depth > self.limits.max_depth {
                continue;
            }

            for neighbor in region.neighbors_of(current.tile.index()) {
                if context
                    .occupancy
                    .is_some_and(|occupancy| occupancy.blocks(neighbor.index, goal_index))
                {
                    continue;
                }
                let step = self.cost_between(region, &current.tile.tile, &neighbor);
                if !step.is_finite() {
                    continue;
                }
                let cost = current.cost + step;
                if cost > self.limits.max_cost {
                    continue;
                }
                if costs.get(&neighbor.index).is_some_and(|&known| known <= cost) {
                    continue;
                }

                costs.insert(neighbor.index, cost);
                came_from.insert(neighbor.index, current.tile);
                let estimate = goal.map_or(0.0, |g| self.heuristic.estimate(region, &neighbor, g));
                let priority = cost + estimate - depth as f32 * self.depth_influence;
                frontier.enqueue(
                    Queued {
                        tile: PathTile::new(neighbor, depth),
                        cost,
                    },
                    priority,
                );
            }
        }

        let (path, path_cost) = match reached {
            Some(goal_tile) => {
                let cost = costs.get(&goal_tile.index()).copied().unwrap_or(0.0);
                (reconstruct_path(&came_from, start.index, goal_tile), cost)
            }
            None => (Vec::new(), 0.0),
        };

        debug!(
            "Search from {start} finished with {outcome:?}: {explored} tiles explored, path cost {path_cost:.3}",
            start = start.index,
            explored = explored.len()
        );

        PathResult {
            path,
            explored_lookup: explored.iter().map(|p| p.index()).collect(),
            explored,
            path_cost,
            outcome,
        }
    }
}

/// Walk predecessors back from the goal; goal first, start last
fn reconstruct_path(came_from: &HashMap<TileIndex, PathTile>, start: TileIndex, goal: PathTile) -> Vec<PathTile> {
    let mut path = vec![goal];
    let mut cursor = goal.index();
    while cursor != start {
        let Some(previous) = came_from.get(&cursor).copied() else {
            panic!("path reconstruction lost the predecessor of tile {cursor}");
        };
        path.push(previous);
        cursor = previous.index();
    }
    path
}

impl<H: Heuristic> PathFinder for BestFirstPathFinder<H> {
    fn path_from_with(
        &self,
        region: &dyn Region,
        start: &Tile,
        goal: &Tile,
        context: &SearchContext<'_>,
    ) -> PathResult {
        self.search(region, start, Some(goal), context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{HexRegion, SquareRegion};

    fn tile(region: &dyn Region, index: TileIndex) -> Tile {
        *region.tile(index).unwrap()
    }

    fn hex_tile(region: &HexRegion, q: i32, r: i32) -> Tile {
        tile(region, region.index_of_axial(TileIndex::new(q, r)))
    }

    fn open_limits() -> SearchLimits {
        SearchLimits::new(20, 100.0, 100.0)
    }

    #[test]
    fn test_flat_hex_step_costs_one() {
        let region = HexRegion::flat(1, 1.0);
        let finder = DijkstraPathFinder::new(open_limits());
        let center = hex_tile(&region, 0, 0);
        for neighbor in region.neighbors_of(center.index) {
            assert_eq!(finder.cost_between(&region, &center, &neighbor), 1.0);
        }
    }

    #[test]
    fn test_square_diagonal_costs_sqrt_two() {
        let region = SquareRegion::flat(1, 1.0);
        let finder = DijkstraPathFinder::new(open_limits());
        let center = tile(&region, TileIndex::new(1, 1));
        let diagonal = tile(&region, TileIndex::new(2, 2));
        let straight = tile(&region, TileIndex::new(1, 2));
        assert!((finder.cost_between(&region, &center, &diagonal) - 2f32.sqrt()).abs() < 1e-6);
        assert_eq!(finder.cost_between(&region, &center, &straight), 1.0);
    }

    #[test]
    fn test_elevation_costs() {
        // Center tile one unit higher than the rest
        let region = HexRegion::from_elevation_fn(1, 1.0, 1.0, |axial, _| {
            if axial == TileIndex::default() { 1.0 } else { 0.0 }
        });
        let finder = DijkstraPathFinder::new(open_limits());
        let center = hex_tile(&region, 0, 0);
        let right = hex_tile(&region, 1, 0);

        let up = finder.cost_between(&region, &right, &center);
        let down = finder.cost_between(&region, &center, &right);
        assert!((up - (1.0 + 1.0 / UP_ELEVATION_PER_POINT)).abs() < 1e-5);
        assert!((down - (1.0 + 1.0 / DOWN_ELEVATION_PER_POINT)).abs() < 1e-5);
        assert!(down < up);

        let capped = DijkstraPathFinder::new(SearchLimits::new(20, 100.0, 2.5));
        assert_eq!(capped.cost_between(&region, &right, &center), f32::INFINITY);
        assert!(capped.cost_between(&region, &center, &right).is_finite());
    }

    #[test]
    fn test_radius_one_center_to_top_right() {
        let region = HexRegion::flat(1, 1.0);
        let finder = DijkstraPathFinder::new(SearchLimits::new(10, 10.0, 10.0));
        let center = hex_tile(&region, 0, 0);
        let top_right = hex_tile(&region, 1, -1);

        let result = finder.path_from(&region, &center, &top_right);
        assert!(result.reached_goal());
        assert_eq!(result.path_cost(), 1.0);
        assert_eq!(result.tiles_on_path_start_first(), vec![center, top_right]);
        assert_eq!(result.tiles_on_path(false), vec![top_right, center]);
        assert_eq!(result.path_tiles()[0].depth, 1);
    }

    #[test]
    fn test_start_equals_goal() {
        let region = HexRegion::flat(1, 1.0);
        let center = hex_tile(&region, 0, 0);
        let result = DijkstraPathFinder::new(open_limits()).path_from(&region, &center, &center);
        assert!(result.reached_goal());
        assert_eq!(result.path_cost(), 0.0);
        assert_eq!(result.tiles_on_path_start_first(), vec![center]);
    }

    #[test]
    fn test_zero_budget_is_unreachable() {
        let region = HexRegion::flat(2, 1.0);
        let finder = DijkstraPathFinder::new(SearchLimits::new(10, 0.0, 10.0));
        let start = hex_tile(&region, 0, 0);
        let goal = hex_tile(&region, 1, 0);

        let result = finder.path_from(&region, &start, &goal);
        assert!(!result.reached_goal());
        assert_eq!(result.outcome(), SearchOutcome::FrontierExhausted);
        assert!(result.path_tiles().is_empty());
        assert_eq!(result.explored_tiles(), vec![start]);
    }

    #[test]
    fn test_depth_limit_stops_search() {
        let region = HexRegion::flat(3, 1.0);
        let start = hex_tile(&region, -3, 0);
        let goal = hex_tile(&region, 0, 0);

        let shallow = DijkstraPathFinder::new(SearchLimits::new(2, 100.0, 100.0));
        let result = shallow.path_from(&region, &start, &goal);
        assert!(!result.reached_goal());
        assert!(result.explored_path_tiles().iter().all(|p| p.depth <= 2));

        let deep = DijkstraPathFinder::new(SearchLimits::new(3, 100.0, 100.0));
        assert_eq!(deep.path_from(&region, &start, &goal).path_cost(), 3.0);
    }

    #[test]
    fn test_path_avoids_hill() {
        let region = HexRegion::from_elevation_fn(2, 1.0, 3.0, |axial, _| {
            if axial == TileIndex::default() { 1.0 } else { 0.0 }
        });
        let finder = DijkstraPathFinder::new(open_limits());
        let start = hex_tile(&region, -1, 0);
        let goal = hex_tile(&region, 1, 0);
        let center = hex_tile(&region, 0, 0);

        let result = finder.path_from(&region, &start, &goal);
        assert!(result.reached_goal());
        assert_eq!(result.path_cost(), 3.0);
        assert!(!result.tiles_on_path_start_first().contains(&center));
    }

    #[test]
    fn test_uniform_cost_ignores_terrain() {
        let region = HexRegion::from_elevation_fn(2, 1.0, 3.0, |axial, _| {
            if axial == TileIndex::default() { 1.0 } else { 0.0 }
        });
        let finder = DijkstraPathFinder::uniform(1.0, open_limits());
        let start = hex_tile(&region, -1, 0);
        let goal = hex_tile(&region, 1, 0);
        let result = finder.path_from(&region, &start, &goal);
        assert_eq!(result.path_cost(), 2.0);
        assert_eq!(result.path_tiles().len(), 3);
    }

    #[test]
    fn test_occupied_tiles_are_avoided_unless_goal() {
        let region = HexRegion::flat(2, 1.0);
        let finder = DijkstraPathFinder::new(open_limits());
        let start = hex_tile(&region, -2, 0);
        let goal = hex_tile(&region, 2, 0);
        let blocker = hex_tile(&region, 0, 0);

        let mut occupied = OccupiedTiles::new();
        occupied.occupy(blocker.index);
        occupied.occupy(goal.index);
        let context = SearchContext::new().blocking(&occupied);

        let free = finder.path_from(&region, &start, &goal);
        assert_eq!(free.path_cost(), 4.0);

        let blocked = finder.path_from_with(&region, &start, &goal, &context);
        assert!(blocked.reached_goal());
        assert_eq!(blocked.path_cost(), 5.0);
        assert!(!blocked.tiles_on_path_start_first().contains(&blocker));
        assert!(!blocked.has_explored(blocker.index));
    }

    #[test]
    fn test_cancelled_search() {
        let region = HexRegion::flat(2, 1.0);
        let finder = DijkstraPathFinder::new(open_limits());
        let token = CancellationToken::new();
        token.cancel();
        let context = SearchContext::new().cancellable(&token);

        let start = hex_tile(&region, 0, 0);
        let goal = hex_tile(&region, 2, 0);
        let result = finder.path_from_with(&region, &start, &goal, &context);
        assert_eq!(result.outcome(), SearchOutcome::Cancelled);
        assert!(!result.reached_goal());
        assert!(result.path_tiles().is_empty());
    }

    #[test]
    fn test_reachable_area() {
        let region = HexRegion::flat(2, 1.0);
        let finder = DijkstraPathFinder::new(SearchLimits::new(10, 1.0, 10.0));
        let center = hex_tile(&region, 0, 0);
        let result = finder.reachable_from(&region, &center, &SearchContext::new());
        assert_eq!(result.outcome(), SearchOutcome::FrontierExhausted);
        assert_eq!(result.explored_tiles().len(), 7);
        for neighbor in region.neighbors_of(center.index) {
            assert!(result.has_explored(neighbor.index));
        }
    }

    #[test]
    fn test_astar_matches_dijkstra_on_flat_square() {
        let region = SquareRegion::flat(2, 1.0);
        let dijkstra = DijkstraPathFinder::new(open_limits());
        let astar = AstarPathFinder::new(open_limits());
        for start in region.tiles() {
            for goal in region.tiles() {
                let expected = dijkstra.path_from(&region, start, goal);
                let actual = astar.path_from(&region, start, goal);
                assert!(actual.reached_goal());
                assert!((expected.path_cost() - actual.path_cost()).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_astar_explores_less_than_dijkstra() {
        let region = HexRegion::flat(4, 0.5);
        let dijkstra = DijkstraPathFinder::new(open_limits());
        let astar = AstarPathFinder::new(open_limits());
        let start = hex_tile(&region, -4, 0);
        let goal = hex_tile(&region, 4, 0);

        let d = dijkstra.path_from(&region, &start, &goal);
        let a = astar.path_from(&region, &start, &goal);
        assert_eq!(d.path_cost(), a.path_cost());
        assert!(a.explored_tiles().len() < d.explored_tiles().len());
    }

    #[test]
    fn test_terrain_heuristic() {
        let region = HexRegion::from_elevation_fn(1, 1.0, 1.0, |axial, _| {
            if axial == TileIndex::default() { 0.6 } else { 0.0 }
        });
        let heuristic = TerrainHeuristic::default();
        let center = hex_tile(&region, 0, 0);
        let right = hex_tile(&region, 1, 0);
        let distance = region.distance(&center, &right);

        let downhill = heuristic.estimate(&region, &center, &right);
        assert!((downhill - (distance + 0.6 / UP_ELEVATION_PER_POINT)).abs() < 1e-5);
        let uphill = heuristic.estimate(&region, &right, &center);
        assert!((uphill - (distance + 0.6 / DOWN_ELEVATION_PER_POINT)).abs() < 1e-5);
    }

    #[test]
    fn test_limits_for_move() {
        let limits = SearchLimits::for_move(3.5, 5.0);
        assert_eq!(limits.max_depth, 5);
        assert_eq!(limits.max_cost, 3.5);
        assert_eq!(limits.max_incremental_cost, 5.0);
    }
}
