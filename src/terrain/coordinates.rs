use super::TileIndex;
use super::constants::SQRT_3;

/// Cube coordinates for a hex grid. Valid hex centers satisfy `x + y + z == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeCoord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl CubeCoord {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Hex neighbor directions in axial offsets, ordered
/// top-right, right, bottom-right, bottom-left, left, top-left.
pub const HEX_NEIGHBORS: [TileIndex; 6] = [
    TileIndex::new(1, -1),
    TileIndex::new(1, 0),
    TileIndex::new(0, 1),
    TileIndex::new(-1, 1),
    TileIndex::new(-1, 0),
    TileIndex::new(0, -1),
];

/// Square neighbor directions, ordered top, top-right, right,
/// bottom-right, bottom, bottom-left, left, top-left.
pub const SQUARE_NEIGHBORS: [TileIndex; 8] = [
    TileIndex::new(-1, 0),
    TileIndex::new(-1, 1),
    TileIndex::new(0, 1),
    TileIndex::new(1, 1),
    TileIndex::new(1, 0),
    TileIndex::new(1, -1),
    TileIndex::new(0, -1),
    TileIndex::new(-1, -1),
];

/// Radius of the hexagonal region holding roughly `target_tiles` tiles.
///
/// Walks the centered hexagonal numbers 1, 7, 19, 37, ... and stops one
/// ring short of the first count exceeding the target, so the resulting
/// region never holds more tiles than requested.
pub fn compute_grid_radius(target_tiles: u32) -> u32 {
    if target_tiles == 0 {
        return 0;
    }
    let mut hexes: u64 = 1;
    let mut size: u64 = 1;
    while hexes <= target_tiles as u64 {
        hexes += size * 6;
        size += 1;
    }
    (size - 2) as u32
}

/// Number of tiles in a hexagonal region of the given radius
pub fn hex_tile_count(radius: u32) -> u32 {
    1 + 3 * radius * (radius + 1)
}

/// Radius of the square region for a target tile count; never negative
pub fn compute_square_radius(target_tiles: u32) -> u32 {
    let side = (target_tiles as f32).sqrt().floor() as i32;
    (side / 2 - 1).max(0) as u32
}

pub fn axial_to_cube(x: f32, y: f32) -> CubeCoord {
    CubeCoord::new(x, y, -x - y)
}

/// Round fractional cube coordinates to the nearest hex center.
///
/// The component with the largest rounding error is recomputed from the
/// other two. Ties resolve x first, then y, then z.
pub fn round_cube_to_nearest_hex(cube: CubeCoord) -> CubeCoord {
    let mut rx = cube.x.round();
    let mut ry = cube.y.round();
    let mut rz = cube.z.round();

    let x_diff = (rx - cube.x).abs();
    let y_diff = (ry - cube.y).abs();
    let z_diff = (rz - cube.z).abs();

    if x_diff >= y_diff && x_diff >= z_diff {
        rx = -ry - rz;
    } else if y_diff >= z_diff {
        ry = -rx - rz;
    } else {
        rz = -rx - ry;
    }

    CubeCoord::new(rx, ry, rz)
}

/// Fractional axial coordinates of a world-space point on a flat-top hex layout
pub fn world_to_axial(world_x: f32, world_z: f32, tile_size: f32) -> (f32, f32) {
    let q = world_x * 2.0 / 3.0 / tile_size;
    let r = (-world_x / 3.0 + SQRT_3 / 3.0 * world_z) / tile_size;
    (q, r)
}

/// Whole grid coordinate as an integer; `None` for NaN, infinities and
/// values outside the `i32` range
fn grid_coordinate(value: f32) -> Option<i32> {
    (value.is_finite() && value >= i32::MIN as f32 && value < i32::MAX as f32).then_some(value as i32)
}

/// Axial hex coordinate (relative to the region center) containing a world
/// point, or `None` when the point has no integer hex address
pub fn world_to_hex(world_x: f32, world_z: f32, tile_size: f32) -> Option<TileIndex> {
    let (q, r) = world_to_axial(world_x, world_z, tile_size);
    let cube = round_cube_to_nearest_hex(axial_to_cube(q, r));
    Some(TileIndex::new(grid_coordinate(cube.x)?, grid_coordinate(cube.y)?))
}

/// Vertical distance between hex rows
pub fn hex_height(tile_size: f32) -> f32 {
    tile_size * SQRT_3 / 2.0
}

/// World-space (x, z) of a hex center given its axial offset from the region center
pub fn hex_to_world(axial: TileIndex, tile_size: f32) -> (f32, f32) {
    let x = axial.i as f32;
    let y = axial.j as f32;
    let z = -x - y;
    (tile_size * x * 1.5, hex_height(tile_size) * (y - z))
}

/// Number of hex steps between two axial coordinates
pub fn hex_distance(a: TileIndex, b: TileIndex) -> i32 {
    let delta = a - b;
    let dz = -delta.i - delta.j;
    delta.i.abs().max(delta.j.abs()).max(dz.abs())
}

/// Square grid coordinate containing a world point
pub fn world_to_square(world_x: f32, world_z: f32, tile_size: f32) -> Option<TileIndex> {
    Some(TileIndex::new(
        grid_coordinate((world_x / tile_size + 0.5).floor())?,
        grid_coordinate((world_z / tile_size + 0.5).floor())?,
    ))
}

/// Normalized (u, v) lookup coordinate of a world point in a region of
/// `array_size` cells, clamped to the unit square.
pub fn world_to_uv(world_x: f32, world_z: f32, tile_size: f32, array_size: u32) -> (f32, f32) {
    let region_size = tile_size * array_size as f32 * 2.0;
    let offset = region_size / 2.0;
    let u = ((world_x + offset) / region_size).clamp(0.0, 1.0);
    let v = ((world_z + offset) / region_size).clamp(0.0, 1.0);
    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_grid_radius() {
        assert_eq!(compute_grid_radius(1), 0);
        assert_eq!(compute_grid_radius(6), 0);
        assert_eq!(compute_grid_radius(7), 1);
        assert_eq!(compute_grid_radius(18), 1);
        assert_eq!(compute_grid_radius(19), 2);
        assert_eq!(compute_grid_radius(37), 3);
        assert_eq!(compute_grid_radius(0), 0);
    }

    #[test]
    fn test_hex_tile_count_matches_radius() {
        for radius in 0..10 {
            assert_eq!(compute_grid_radius(hex_tile_count(radius)), radius);
        }
    }

    #[test]
    fn test_square_radius() {
        assert_eq!(compute_square_radius(1), 0);
        assert_eq!(compute_square_radius(25), 1);
        assert_eq!(compute_square_radius(100), 4);
    }

    #[test]
    fn test_round_integral_cube_is_unchanged() {
        for x in -3..=3 {
            for y in -3..=3 {
                let cube = axial_to_cube(x as f32, y as f32);
                assert_eq!(round_cube_to_nearest_hex(cube), cube);
            }
        }
    }

    #[test]
    fn test_round_tie_prefers_x_correction() {
        // Halfway between (0, 0, 0) and (1, -1, 0): x and y errors tie
        let rounded = round_cube_to_nearest_hex(CubeCoord::new(0.5, -0.5, 0.0));
        assert_eq!(rounded.x + rounded.y + rounded.z, 0.0);
        assert_eq!(rounded.y, (-0.5f32).round());
        assert_eq!(rounded.x, -rounded.y - rounded.z);

        // Same input always rounds the same way
        let again = round_cube_to_nearest_hex(CubeCoord::new(0.5, -0.5, 0.0));
        assert_eq!(rounded, again);
    }

    #[test]
    fn test_world_hex_round_trip() {
        let tile_size = 0.75;
        for q in -4..=4 {
            for r in -4..=4 {
                let axial = TileIndex::new(q, r);
                let (x, z) = hex_to_world(axial, tile_size);
                assert_eq!(world_to_hex(x, z, tile_size), Some(axial));
                // Small nudges stay inside the same hex
                assert_eq!(world_to_hex(x + 0.1, z - 0.1, tile_size), Some(axial));
            }
        }
    }

    #[test]
    fn test_hex_neighbors_are_one_step_away() {
        for offset in HEX_NEIGHBORS {
            assert_eq!(hex_distance(offset, TileIndex::default()), 1);
        }
        assert_eq!(hex_distance(TileIndex::new(2, -1), TileIndex::new(-1, 1)), 3);
    }

    #[test]
    fn test_world_to_square() {
        assert_eq!(world_to_square(0.4, -0.4, 1.0), Some(TileIndex::new(0, 0)));
        assert_eq!(world_to_square(2.6, 1.5, 1.0), Some(TileIndex::new(3, 2)));
    }

    #[test]
    fn test_unaddressable_world_points() {
        for (x, z) in [(f32::NAN, 0.0), (0.0, f32::INFINITY), (1e12, 0.0), (0.0, -1e12)] {
            assert_eq!(world_to_hex(x, z, 1.0), None, "hex ({x}, {z})");
            assert_eq!(world_to_square(x, z, 1.0), None, "square ({x}, {z})");
        }
        // Far but still addressable
        assert_eq!(world_to_square(1e6, 0.0, 1.0), Some(TileIndex::new(1_000_000, 0)));
    }

    #[test]
    fn test_world_to_uv_is_clamped() {
        assert_eq!(world_to_uv(0.0, 0.0, 1.0, 3), (0.5, 0.5));
        assert_eq!(world_to_uv(-100.0, 100.0, 1.0, 3), (0.0, 1.0));
    }
}
