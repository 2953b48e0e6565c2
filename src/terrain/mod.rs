use bevy::prelude::*;
use derive_more::{Add, Display, From, Sub};

pub mod constants;
pub mod coordinates;

/// Integer address of a tile inside a region's backing array.
///
/// Indices are array positions, so the region center sits at
/// `(radius, radius)`. Offsets between indices (neighbor directions)
/// use the same type and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Add, Sub, Display, From)]
#[display("({i}, {j})")]
pub struct TileIndex {
    pub i: i32,
    pub j: i32,
}

impl TileIndex {
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Component-wise sum; `None` when either component overflows
    pub fn checked_add(self, other: TileIndex) -> Option<TileIndex> {
        Some(Self::new(self.i.checked_add(other.i)?, self.j.checked_add(other.j)?))
    }

    /// Euclidean length of this index treated as an offset vector
    pub fn magnitude(&self) -> f32 {
        ((self.i * self.i + self.j * self.j) as f32).sqrt()
    }
}

/// A single terrain tile. Identity is the grid index; the world
/// position (with `y` as elevation) is carried along for geometry.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub position: Vec3,
    pub index: TileIndex,
}

impl Tile {
    pub fn new(position: Vec3, index: TileIndex) -> Self {
        Self { position, index }
    }

    pub fn elevation(&self) -> f32 {
        self.position.y
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Tile {}

impl std::hash::Hash for Tile {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}
