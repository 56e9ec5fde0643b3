//! A participant in a match.

use crate::board::Board;
use crate::fleet::Ship;
use crate::ids::PlayerId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One of the two player slots in a match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Player's unique ID.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Own fleet plus incoming hits and misses.
    board: Board,
    /// What this player has learned about the opponent's board.
    guesses: Board,
    /// Committed ships, exactly as submitted.
    ships: Vec<Ship>,
    /// Whether a fleet has been committed.
    ships_placed: bool,
}

impl Player {
    /// Creates a player with empty boards and no fleet.
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            board: Board::new(),
            guesses: Board::new(),
            ships: Vec::new(),
            ships_placed: false,
        }
    }

    /// Replaces the fleet wholesale. Callers validate `ships` first.
    pub(crate) fn commit_fleet(&mut self, ships: Vec<Ship>) {
        self.board = Board::from_ships(&ships);
        self.ships = ships;
        self.ships_placed = true;
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn guesses_mut(&mut self) -> &mut Board {
        &mut self.guesses
    }

    /// True once every ship cell has been hit.
    ///
    /// A player with no ships is never defeated.
    pub fn is_defeated(&self) -> bool {
        let mut cells = self.ships.iter().flat_map(|ship| ship.positions()).peekable();
        cells.peek().is_some()
            && cells.all(|at| self.board.get(*at) == Some(crate::board::CellState::Hit))
    }
}
