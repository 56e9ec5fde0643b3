//! Player capacity invariant: a match never holds more than two players.

use super::Invariant;
use crate::game::{MAX_PLAYERS, Match};
use std::collections::HashSet;

/// Invariant: at most two players, each with a distinct ID.
pub struct PlayerCapacityInvariant;

impl Invariant<Match> for PlayerCapacityInvariant {
    fn holds(game: &Match) -> bool {
        let players = game.players();
        let distinct: HashSet<_> = players.iter().map(|p| *p.id()).collect();
        players.len() <= MAX_PLAYERS && distinct.len() == players.len()
    }

    fn description() -> &'static str {
        "At most two players, with distinct IDs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchId, MatchRules};

    #[test]
    fn test_full_match_holds() {
        let mut game = Match::new(MatchId::random(), MatchRules::default());
        game.join("Alice").unwrap();
        game.join("Bob").unwrap();
        let _ = game.join("Carol");
        assert!(PlayerCapacityInvariant::holds(&game));
    }

    #[test]
    fn test_third_player_violates() {
        let mut game = Match::new(MatchId::random(), MatchRules::default());
        game.join("Alice").unwrap();
        game.join("Bob").unwrap();

        let mut json = serde_json::to_value(&game).unwrap();
        let extra = json["players"][0].clone();
        json["players"].as_array_mut().unwrap().push(extra);
        let tampered: Match = serde_json::from_value(json).unwrap();

        assert!(!PlayerCapacityInvariant::holds(&tampered));
    }
}
