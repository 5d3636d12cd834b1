//! Offset hex grid geometry

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the offset hex grid.
///
/// Coordinates are signed so that off-board neighbors can be computed and
/// rejected by a bounds check instead of wrapping at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Odd rows are shifted half a hex to the right.
    pub fn odd_row(&self) -> bool {
        self.y.rem_euclid(2) != 0
    }

    /// The tile one step away in `direction`.
    ///
    /// The result may be off-board; callers must bounds-check before indexing.
    pub fn step(&self, direction: Direction) -> Tile {
        let (dx, dy) = direction.offset(self.odd_row());
        Tile::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The six hex directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Left,
        Direction::Right,
        Direction::TopLeft,
        Direction::TopRight,
        Direction::BottomRight,
        Direction::BottomLeft,
    ];

    /// Coordinate offset (dx, dy) for this direction.
    ///
    /// Row-parity dependent: on odd rows every diagonal neighbor sits one
    /// column further right than on even rows.
    pub fn offset(self, odd_row: bool) -> (i32, i32) {
        let shift = if odd_row { 1 } else { 0 };
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::TopLeft => (shift - 1, 1),
            Direction::TopRight => (shift, 1),
            Direction::BottomRight => (shift, -1),
            Direction::BottomLeft => (shift - 1, -1),
        }
    }
}
