//! Gameplay policy shared by every match in a registry.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Ship lengths of the classic five-ship fleet.
pub const CLASSIC_SHIP_LENGTHS: [usize; 5] = [5, 4, 3, 3, 2];

/// Tunable rules a match is created with.
///
/// The defaults accept any ship shape, require both fleets before the first
/// shot, and let a player fire at a cell that has already been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct MatchRules {
    /// Required ship lengths. When set, every ship must be a straight,
    /// contiguous line and the lengths must match this list as a multiset.
    #[setters(strip_option)]
    ship_lengths: Option<Vec<usize>>,

    /// Refuse shots until both players have committed a fleet.
    require_fleets_before_fire: bool,

    /// Refuse shots at a cell that is already `hit` or `miss`.
    reject_repeat_shots: bool,
}

impl MatchRules {
    /// Standard rules with the classic 5-4-3-3-2 fleet enforced.
    pub fn classic() -> Self {
        Self::default().with_ship_lengths(CLASSIC_SHIP_LENGTHS.to_vec())
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            ship_lengths: None,
            require_fleets_before_fire: true,
            reject_repeat_shots: false,
        }
    }
}
