//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// Width and height of every board.
pub const BOARD_SIZE: usize = 10;

/// A cell address: `x` selects the row, `y` the column.
///
/// Coordinates arrive from clients unchecked, so they are signed and may lie
/// off the board. Use [`Coordinate::index`] before touching a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row, 0-based.
    pub x: i32,
    /// Column, 0-based.
    pub y: i32,
}

impl Coordinate {
    /// Creates a coordinate without checking bounds.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true if both axes fall within `0..BOARD_SIZE`.
    pub fn is_on_board(&self) -> bool {
        self.index().is_some()
    }

    /// Row-major `(row, column)` pair, or `None` when off the board.
    pub fn index(&self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.x).ok()?;
        let col = usize::try_from(self.y).ok()?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
