//! Ships and fleet validation.

use crate::coordinate::Coordinate;
use crate::error::MatchError;
use crate::rules::MatchRules;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// One ship: the set of cells it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    /// Occupied cells, in the order the client sent them.
    positions: Vec<Coordinate>,
}

impl Ship {
    /// Creates a ship from its cells.
    pub fn new(positions: Vec<Coordinate>) -> Self {
        Self { positions }
    }

    /// Returns the occupied cells.
    pub fn positions(&self) -> &[Coordinate] {
        &self.positions
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if the ship occupies no cells.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True if the cells form one gap-free horizontal or vertical run.
    pub fn is_straight_line(&self) -> bool {
        let Some(first) = self.positions.first() else {
            return false;
        };
        let same_row = self.positions.iter().all(|p| p.x == first.x);
        let same_col = self.positions.iter().all(|p| p.y == first.y);

        let mut along: Vec<i32> = match (same_row, same_col) {
            (true, _) => self.positions.iter().map(|p| p.y).collect(),
            (false, true) => self.positions.iter().map(|p| p.x).collect(),
            (false, false) => return false,
        };
        along.sort_unstable();
        along.windows(2).all(|w| w[1] == w[0] + 1)
    }
}

/// Checks a submitted fleet against board geometry and `rules`.
///
/// A fleet must contain at least one ship, every ship at least one cell, every
/// cell on the board, and no cell claimed twice. When the rules fix ship
/// lengths, each ship must also be a straight line and the lengths must match.
#[instrument(skip_all, fields(ships = ships.len()))]
pub fn validate_fleet(ships: &[Ship], rules: &MatchRules) -> Result<(), MatchError> {
    if ships.is_empty() {
        return Err(MatchError::InvalidFleet("fleet has no ships".to_string()));
    }

    let mut occupied = HashSet::new();
    for (index, ship) in ships.iter().enumerate() {
        if ship.is_empty() {
            return Err(MatchError::InvalidFleet(format!("ship {index} has no positions")));
        }
        for position in ship.positions() {
            if !position.is_on_board() {
                return Err(MatchError::InvalidFleet(format!(
                    "ship {index} has position {position} off the board"
                )));
            }
            if !occupied.insert(*position) {
                return Err(MatchError::InvalidFleet(format!(
                    "ship {index} overlaps another ship at {position}"
                )));
            }
        }
    }

    if let Some(required) = rules.ship_lengths() {
        check_ship_lengths(ships, required)?;
    }

    debug!(cells = occupied.len(), "Fleet validated");
    Ok(())
}

fn check_ship_lengths(ships: &[Ship], required: &[usize]) -> Result<(), MatchError> {
    if let Some(index) = ships.iter().position(|ship| !ship.is_straight_line()) {
        return Err(MatchError::InvalidFleet(format!(
            "ship {index} is not a straight line"
        )));
    }

    let mut submitted: Vec<usize> = ships.iter().map(Ship::len).collect();
    let mut expected = required.to_vec();
    submitted.sort_unstable();
    expected.sort_unstable();
    if submitted != expected {
        return Err(MatchError::InvalidFleet(format!(
            "ship lengths {submitted:?} do not match required {expected:?}"
        )));
    }
    Ok(())
}
