//! Per-viewer projections of a match.
//!
//! A [`MatchView`] shows the viewer's own fleet in full and the opponent's
//! board with un-hit ship cells rendered as open water. Without a viewer
//! (a spectator) both fleets are redacted.

use crate::board::Board;
use crate::error::MatchError;
use crate::fleet::Ship;
use crate::game::{Match, Phase};
use crate::ids::{MatchId, PlayerId};
use crate::player::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// One player as seen by a particular viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Player ID.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Whether a fleet has been committed.
    pub ships_placed: bool,
    /// Fleet board, redacted unless this is the viewer.
    pub board: Board,
    /// What this player knows about the opponent. Only hits and misses.
    pub guesses: Board,
    /// Ship positions, present only for the viewer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ships: Option<Vec<Ship>>,
}

impl PlayerView {
    fn project(player: &Player, is_viewer: bool) -> Self {
        Self {
            id: *player.id(),
            name: player.name().clone(),
            ships_placed: *player.ships_placed(),
            board: if is_viewer {
                player.board().clone()
            } else {
                player.board().redacted()
            },
            guesses: player.guesses().clone(),
            ships: is_viewer.then(|| player.ships().clone()),
        }
    }
}

/// A match as one viewer is allowed to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    /// Match ID.
    pub id: MatchId,
    /// Current phase.
    pub phase: Phase,
    /// Player entitled to fire next.
    pub turn: Option<PlayerId>,
    /// Whether the match is over.
    pub finished: bool,
    /// Winner, once finished.
    pub winner: Option<PlayerId>,
    /// Shots fired so far.
    pub shots_fired: u32,
    /// Whose perspective this is; `None` for spectators.
    pub viewer: Option<PlayerId>,
    /// Players in join order.
    pub players: Vec<PlayerView>,
}

/// Short description of a match for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Match ID.
    pub id: MatchId,
    /// Current phase.
    pub phase: Phase,
    /// Player names in join order.
    pub players: Vec<String>,
    /// Whether the match is over.
    pub finished: bool,
}

impl Match {
    /// Projects the match for `viewer`, or for a spectator when `None`.
    #[instrument(skip(self), fields(match_id = %self.id()))]
    pub fn view(&self, viewer: Option<PlayerId>) -> Result<MatchView, MatchError> {
        if let Some(viewer) = viewer.filter(|v| self.player(*v).is_none()) {
            warn!(%viewer, "View requested by unknown player");
            return Err(MatchError::PlayerNotFound(viewer));
        }

        let players = self
            .players()
            .iter()
            .map(|p| PlayerView::project(p, Some(*p.id()) == viewer))
            .collect();

        debug!("Projected match view");
        Ok(MatchView {
            id: *self.id(),
            phase: self.phase(),
            turn: *self.turn(),
            finished: *self.finished(),
            winner: *self.winner(),
            shots_fired: *self.shots_fired(),
            viewer,
            players,
        })
    }

    /// Summarises the match for listings.
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            id: *self.id(),
            phase: self.phase(),
            players: self.players().iter().map(|p| p.name().clone()).collect(),
            finished: *self.finished(),
        }
    }
}
