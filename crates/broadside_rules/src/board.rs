//! 10×10 cell grids used for fleets and guesses.

use crate::coordinate::{BOARD_SIZE, Coordinate};
use crate::fleet::Ship;
use serde::{Deserialize, Serialize};

/// State of a single cell.
///
/// `Ship` is only written during placement. `Hit` and `Miss` are terminal.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CellState {
    /// Nothing here, nothing fired at.
    #[default]
    Empty,
    /// An un-hit ship segment.
    Ship,
    /// A ship segment that has been hit.
    Hit,
    /// A shot that landed in open water.
    Miss,
}

impl CellState {
    /// True for `Hit` and `Miss`.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// A square grid of [`CellState`], indexed `[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an all-empty board.
    pub fn new() -> Self {
        Self {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a fresh board with every ship position marked `Ship`.
    ///
    /// Off-board positions are skipped; fleets are validated before this is called.
    pub fn from_ships(ships: &[Ship]) -> Self {
        let mut board = Self::new();
        for position in ships.iter().flat_map(|ship| ship.positions()) {
            board.set(*position, CellState::Ship);
        }
        board
    }

    /// Gets the cell at `at`, or `None` when off the board.
    pub fn get(&self, at: Coordinate) -> Option<CellState> {
        at.index().map(|(row, col)| self.cells[row][col])
    }

    /// Overwrites the cell at `at`. Returns false if `at` is off the board.
    pub(crate) fn set(&mut self, at: Coordinate, state: CellState) -> bool {
        match at.index() {
            Some((row, col)) => {
                self.cells[row][col] = state;
                true
            }
            None => false,
        }
    }

    /// Rows in `x` order.
    pub fn rows(&self) -> &[[CellState; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == state)
            .count()
    }

    /// Copy of this board with un-hit ship segments shown as open water.
    pub fn redacted(&self) -> Self {
        let mut board = self.clone();
        for cell in board.cells.iter_mut().flatten() {
            if *cell == CellState::Ship {
                *cell = CellState::Empty;
            }
        }
        board
    }

    /// Formats the board as a human-readable grid, one row per line.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        CellState::Empty => '.',
                        CellState::Ship => 'S',
                        CellState::Hit => 'X',
                        CellState::Miss => 'o',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ships_marks_every_position() {
        let ships = vec![
            Ship::new(vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]),
            Ship::new(vec![Coordinate::new(5, 5)]),
        ];
        let board = Board::from_ships(&ships);
        assert_eq!(board.count(CellState::Ship), 3);
        assert_eq!(board.get(Coordinate::new(0, 1)), Some(CellState::Ship));
        assert_eq!(board.get(Coordinate::new(1, 1)), Some(CellState::Empty));
    }

    #[test]
    fn test_redacted_hides_only_unhit_ships() {
        let mut board = Board::from_ships(&[Ship::new(vec![
            Coordinate::new(2, 2),
            Coordinate::new(2, 3),
        ])]);
        board.set(Coordinate::new(2, 2), CellState::Hit);
        board.set(Coordinate::new(7, 7), CellState::Miss);

        let redacted = board.redacted();
        assert_eq!(redacted.get(Coordinate::new(2, 2)), Some(CellState::Hit));
        assert_eq!(redacted.get(Coordinate::new(2, 3)), Some(CellState::Empty));
        assert_eq!(redacted.get(Coordinate::new(7, 7)), Some(CellState::Miss));
        assert_eq!(redacted.count(CellState::Ship), 0);
    }

    #[test]
    fn test_set_off_board_is_refused() {
        let mut board = Board::new();
        assert!(!board.set(Coordinate::new(10, 0), CellState::Miss));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_cells_serialize_lowercase() {
        let json = serde_json::to_value(Board::new()).unwrap();
        assert_eq!(json[0][0], "empty");
        assert_eq!(json.as_array().unwrap().len(), BOARD_SIZE);
    }
}
