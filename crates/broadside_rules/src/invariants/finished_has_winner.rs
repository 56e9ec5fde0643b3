//! Finished-has-winner invariant: a match ends exactly when someone has won.

use super::Invariant;
use crate::game::Match;

/// Invariant: `finished` is set iff `winner` is, the winner is a player in
/// the match, and the winner's opponent has no un-hit ship cell left.
pub struct FinishedHasWinnerInvariant;

impl Invariant<Match> for FinishedHasWinnerInvariant {
    fn holds(game: &Match) -> bool {
        match (game.finished(), game.winner()) {
            (false, None) => true,
            (true, Some(winner)) => {
                game.player(*winner).is_some()
                    && game
                        .opponent_of(*winner)
                        .is_some_and(|loser| loser.is_defeated())
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Finished exactly when a winner has destroyed the opposing fleet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, MatchId, MatchRules, Ship};

    fn finished_match() -> Match {
        let mut game = Match::new(MatchId::random(), MatchRules::default());
        let a = game.join("Alice").unwrap();
        let b = game.join("Bob").unwrap();
        game.place_fleet(a, vec![Ship::new(vec![Coordinate::new(0, 0)])])
            .unwrap();
        game.place_fleet(b, vec![Ship::new(vec![Coordinate::new(5, 5)])])
            .unwrap();
        game.fire(a, Coordinate::new(5, 5)).unwrap();
        game
    }

    #[test]
    fn test_won_match_holds() {
        assert!(FinishedHasWinnerInvariant::holds(&finished_match()));
    }

    #[test]
    fn test_finished_without_winner_violates() {
        let mut json = serde_json::to_value(finished_match()).unwrap();
        json["winner"] = serde_json::Value::Null;
        let tampered: Match = serde_json::from_value(json).unwrap();
        assert!(!FinishedHasWinnerInvariant::holds(&tampered));
    }
}
