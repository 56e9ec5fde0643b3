//! Pure match rules for two-player grid battles.
//!
//! Two players join a match, each commits a fleet to a 10×10 board, and they
//! alternate shots until one fleet is fully destroyed. This crate holds the
//! state machine and its invariants; it performs no I/O and knows nothing
//! about how matches are stored or served.
//!
//! # Example
//!
//! ```
//! use broadside_rules::{Coordinate, Match, MatchId, MatchRules, Ship, Shot};
//!
//! let mut game = Match::new(MatchId::random(), MatchRules::default());
//! let alice = game.join("Alice").unwrap();
//! let bob = game.join("Bob").unwrap();
//! game.place_fleet(alice, vec![Ship::new(vec![Coordinate::new(0, 0)])]).unwrap();
//! game.place_fleet(bob, vec![Ship::new(vec![Coordinate::new(5, 5)])]).unwrap();
//!
//! let outcome = game.fire(alice, Coordinate::new(5, 5)).unwrap();
//! assert_eq!(*outcome.shot(), Shot::Hit);
//! assert_eq!(*outcome.winner(), Some(alice));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coordinate;
mod error;
mod fleet;
mod game;
mod ids;
pub mod invariants;
mod player;
mod rules;
mod view;

pub use board::{Board, CellState};
pub use coordinate::{BOARD_SIZE, Coordinate};
pub use error::{ErrorKind, MatchError};
pub use fleet::{Ship, validate_fleet};
pub use game::{FireOutcome, MAX_PLAYERS, Match, Phase, Shot};
pub use ids::{MatchId, PlayerId};
pub use player::Player;
pub use rules::{CLASSIC_SHIP_LENGTHS, MatchRules};
pub use view::{MatchSummary, MatchView, PlayerView};
