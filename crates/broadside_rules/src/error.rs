//! Error taxonomy for match operations.
//!
//! Every error is a caller error: retrying with corrected input is always
//! safe, and no failed operation mutates the match.

use crate::coordinate::Coordinate;
use crate::ids::{MatchId, PlayerId};
use serde::{Deserialize, Serialize};

/// Machine-checkable error category, stable across releases.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Unknown match identifier.
    NotFound,
    /// Unknown player identifier within a match.
    PlayerNotFound,
    /// Match already has two players.
    MatchFull,
    /// Caller does not hold the turn.
    WrongTurn,
    /// Target is off the board.
    InvalidCoordinate,
    /// Fleet is malformed or breaks the ship rules.
    InvalidFleet,
    /// Player name is blank.
    InvalidName,
    /// Fleet can no longer change.
    FleetLocked,
    /// Match cannot accept shots yet.
    NotReady,
    /// Target cell was already resolved.
    AlreadyFired,
    /// Match is over.
    MatchFinished,
}

/// Error that can occur when applying an operation to a match.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// No match with this identifier exists.
    #[display("Match {} not found", _0)]
    MatchNotFound(MatchId),

    /// The match has no player with this identifier.
    #[display("Player {} not found", _0)]
    PlayerNotFound(PlayerId),

    /// Two players have already joined.
    #[display("Match already has 2 players")]
    MatchFull,

    /// Someone else holds the turn (or nobody does yet).
    #[display("Not your turn")]
    WrongTurn,

    /// Shot target lies outside the board.
    #[display("Coordinate {} is off the board", _0)]
    InvalidCoordinate(Coordinate),

    /// Submitted fleet was rejected.
    #[display("Invalid fleet: {}", _0)]
    InvalidFleet(String),

    /// Player name was empty after trimming.
    #[display("Player name must not be empty")]
    InvalidName,

    /// Shots have been fired, so fleets are fixed.
    #[display("Fleet cannot change once firing has begun")]
    FleetLocked,

    /// Opponent missing or fleets not committed.
    #[display("Match not ready: {}", _0)]
    NotReady(&'static str),

    /// Cell was already hit or missed.
    #[display("Already fired at {}", _0)]
    AlreadyFired(Coordinate),

    /// The match has a winner.
    #[display("Match is already finished")]
    MatchFinished,
}

impl std::error::Error for MatchError {}

impl MatchError {
    /// Returns the machine-checkable category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatchError::MatchNotFound(_) => ErrorKind::NotFound,
            MatchError::PlayerNotFound(_) => ErrorKind::PlayerNotFound,
            MatchError::MatchFull => ErrorKind::MatchFull,
            MatchError::WrongTurn => ErrorKind::WrongTurn,
            MatchError::InvalidCoordinate(_) => ErrorKind::InvalidCoordinate,
            MatchError::InvalidFleet(_) => ErrorKind::InvalidFleet,
            MatchError::InvalidName => ErrorKind::InvalidName,
            MatchError::FleetLocked => ErrorKind::FleetLocked,
            MatchError::NotReady(_) => ErrorKind::NotReady,
            MatchError::AlreadyFired(_) => ErrorKind::AlreadyFired,
            MatchError::MatchFinished => ErrorKind::MatchFinished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kinds_render_snake_case() {
        assert_eq!(ErrorKind::NotFound.as_ref(), "not_found");
        assert_eq!(ErrorKind::WrongTurn.to_string(), "wrong_turn");
        assert_eq!(
            serde_json::to_value(ErrorKind::InvalidCoordinate).unwrap(),
            "invalid_coordinate"
        );
    }

    #[test]
    fn test_kind_strings_are_unique() {
        let mut names: Vec<String> = ErrorKind::iter().map(|k| k.to_string()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_message_names_the_coordinate() {
        let err = MatchError::InvalidCoordinate(Coordinate::new(10, -1));
        assert_eq!(err.to_string(), "Coordinate (10, -1) is off the board");
        assert_eq!(err.kind(), ErrorKind::InvalidCoordinate);
    }
}
