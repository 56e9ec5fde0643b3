//! Turn-held-by-player invariant: the turn always belongs to someone in the match.

use super::Invariant;
use crate::game::Match;

/// Invariant: the turn is unset exactly when nobody has joined, and otherwise
/// names a current player.
pub struct TurnHeldByPlayerInvariant;

impl Invariant<Match> for TurnHeldByPlayerInvariant {
    fn holds(game: &Match) -> bool {
        match game.turn() {
            None => game.players().is_empty(),
            Some(holder) => game.player(*holder).is_some(),
        }
    }

    fn description() -> &'static str {
        "Turn is unset before anyone joins and otherwise held by a current player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchId, MatchRules, PlayerId};

    #[test]
    fn test_empty_match_holds() {
        let game = Match::new(MatchId::random(), MatchRules::default());
        assert!(TurnHeldByPlayerInvariant::holds(&game));
    }

    #[test]
    fn test_stranger_holding_turn_violates() {
        let mut game = Match::new(MatchId::random(), MatchRules::default());
        game.join("Alice").unwrap();

        let mut json = serde_json::to_value(&game).unwrap();
        json["turn"] = serde_json::to_value(PlayerId::random()).unwrap();
        let tampered: Match = serde_json::from_value(json).unwrap();

        assert!(!TurnHeldByPlayerInvariant::holds(&tampered));
    }
}
