//! First-class match invariants.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are checked as postconditions in debug builds and tested on their own.

mod finished_has_winner;
mod fleet_matches_board;
mod player_capacity;
mod turn_held_by_player;

pub use finished_has_winner::FinishedHasWinnerInvariant;
pub use fleet_matches_board::FleetMatchesBoardInvariant;
pub use player_capacity::PlayerCapacityInvariant;
pub use turn_held_by_player::TurnHeldByPlayerInvariant;

use crate::game::Match;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together, implemented for tuples.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! invariant_tuple {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

invariant_tuple!(I1, I2);
invariant_tuple!(I1, I2, I3);
invariant_tuple!(I1, I2, I3, I4);

/// Every match invariant as one composable set.
pub type MatchInvariants = (
    PlayerCapacityInvariant,
    TurnHeldByPlayerInvariant,
    FleetMatchesBoardInvariant,
    FinishedHasWinnerInvariant,
);

/// Postcondition check run after each transition in debug builds.
pub(crate) fn assert_invariants(game: &Match) {
    #[cfg(debug_assertions)]
    if let Err(violations) = MatchInvariants::check_all(game) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::error!(match_id = %game.id(), %descriptions, "Match invariant violated");
        panic!("Postcondition failed: {descriptions}");
    }
    #[cfg(not(debug_assertions))]
    let _ = game;
}
