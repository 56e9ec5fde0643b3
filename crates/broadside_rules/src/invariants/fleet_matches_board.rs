//! Fleet-matches-board invariant: committed ships and the board agree.

use super::Invariant;
use crate::board::CellState;
use crate::coordinate::{BOARD_SIZE, Coordinate};
use crate::game::Match;
use crate::player::Player;
use std::collections::HashSet;

/// Invariant: for every player, the cells marked `ship` or `hit` are exactly
/// the union of that player's ship positions, and no two ships share a cell.
pub struct FleetMatchesBoardInvariant;

fn fleet_matches_board(player: &Player) -> bool {
    let mut claimed = HashSet::new();
    for position in player.ships().iter().flat_map(|s| s.positions()) {
        if !claimed.insert(*position) {
            return false;
        }
    }

    (0..BOARD_SIZE as i32)
        .flat_map(|x| (0..BOARD_SIZE as i32).map(move |y| Coordinate::new(x, y)))
        .all(|at| {
            let occupied = matches!(
                player.board().get(at),
                Some(CellState::Ship | CellState::Hit)
            );
            occupied == claimed.contains(&at)
        })
}

impl Invariant<Match> for FleetMatchesBoardInvariant {
    fn holds(game: &Match) -> bool {
        game.players().iter().all(fleet_matches_board)
    }

    fn description() -> &'static str {
        "Fleet board ship cells match committed ship positions without overlap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchId, MatchRules, Ship};

    #[test]
    fn test_placed_fleet_holds() {
        let mut game = Match::new(MatchId::random(), MatchRules::default());
        let a = game.join("Alice").unwrap();
        game.place_fleet(
            a,
            vec![
                Ship::new(vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]),
                Ship::new(vec![Coordinate::new(9, 9)]),
            ],
        )
        .unwrap();
        assert!(FleetMatchesBoardInvariant::holds(&game));
    }

    #[test]
    fn test_stray_ship_cell_violates() {
        let mut game = Match::new(MatchId::random(), MatchRules::default());
        let a = game.join("Alice").unwrap();
        game.place_fleet(a, vec![Ship::new(vec![Coordinate::new(0, 0)])])
            .unwrap();

        let mut json = serde_json::to_value(&game).unwrap();
        json["players"][0]["board"][3][3] = serde_json::json!("ship");
        let tampered: Match = serde_json::from_value(json).unwrap();

        assert!(!FleetMatchesBoardInvariant::holds(&tampered));
    }
}
