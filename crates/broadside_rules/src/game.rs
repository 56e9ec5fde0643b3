//! The match state machine.
//!
//! A match moves through [`Phase::AwaitingPlayers`] → [`Phase::AwaitingFleets`]
//! → [`Phase::InProgress`] → [`Phase::Finished`]. Every operation validates all
//! of its preconditions before touching state, so a rejected call leaves the
//! match exactly as it was.

use crate::board::CellState;
use crate::coordinate::Coordinate;
use crate::error::MatchError;
use crate::fleet::{Ship, validate_fleet};
use crate::ids::{MatchId, PlayerId};
use crate::invariants::assert_invariants;
use crate::player::Player;
use crate::rules::MatchRules;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Most players a match will ever hold.
pub const MAX_PLAYERS: usize = 2;

/// Where a match is in its lifecycle. Derived from match state, never stored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Fewer than two players have joined.
    AwaitingPlayers,
    /// Both players present, at least one fleet not committed.
    AwaitingFleets,
    /// Both fleets committed, shots being exchanged.
    InProgress,
    /// One fleet has been destroyed.
    Finished,
}

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Shot {
    /// Struck an un-hit ship segment.
    Hit,
    /// Anything else, including a cell already resolved.
    Miss,
}

/// What a successful `fire` reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct FireOutcome {
    /// Hit or miss.
    shot: Shot,
    /// Set when this shot destroyed the last opponent ship.
    #[serde(skip_serializing_if = "Option::is_none")]
    winner: Option<PlayerId>,
}

/// One game between up to two players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Match {
    /// Match ID.
    id: MatchId,
    /// Players in join order.
    players: Vec<Player>,
    /// Player entitled to fire next.
    turn: Option<PlayerId>,
    /// Monotonic: never reverts once set.
    finished: bool,
    /// Set together with `finished`.
    winner: Option<PlayerId>,
    /// Successful shots so far.
    shots_fired: u32,
    /// Policy this match was created with.
    rules: MatchRules,
}

impl Match {
    /// Creates an empty match.
    #[instrument(skip(rules))]
    pub fn new(id: MatchId, rules: MatchRules) -> Self {
        info!(match_id = %id, "Creating new match");
        Self {
            id,
            players: Vec::new(),
            turn: None,
            finished: false,
            winner: None,
            shots_fired: 0,
            rules,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.players.len() < MAX_PLAYERS {
            Phase::AwaitingPlayers
        } else if self.players.iter().all(|p| *p.ships_placed()) {
            Phase::InProgress
        } else {
            Phase::AwaitingFleets
        }
    }

    /// Gets the player with the given ID.
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| *p.id() == player_id)
    }

    /// Gets the other player, if one has joined.
    pub fn opponent_of(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| *p.id() != player_id)
    }

    fn player_index(&self, player_id: PlayerId) -> Result<usize, MatchError> {
        self.players
            .iter()
            .position(|p| *p.id() == player_id)
            .ok_or_else(|| {
                warn!(match_id = %self.id, %player_id, "Unknown player");
                MatchError::PlayerNotFound(player_id)
            })
    }

    /// Adds a player and returns the new player's ID.
    ///
    /// The first player to join holds the first turn.
    #[instrument(skip(self), fields(match_id = %self.id))]
    pub fn join(&mut self, player_name: &str) -> Result<PlayerId, MatchError> {
        if self.players.len() >= MAX_PLAYERS {
            warn!("Match already has 2 players");
            return Err(MatchError::MatchFull);
        }
        let name = player_name.trim();
        if name.is_empty() {
            warn!("Rejected blank player name");
            return Err(MatchError::InvalidName);
        }

        let player_id = PlayerId::random();
        self.players.push(Player::new(player_id, name.to_string()));
        if self.turn.is_none() {
            self.turn = Some(player_id);
        }

        info!(
            %player_id,
            name,
            slot = self.players.len(),
            phase = %self.phase(),
            "Player joined"
        );
        assert_invariants(self);
        Ok(player_id)
    }

    /// Replaces a player's fleet with `ships`.
    ///
    /// Can be repeated freely until the first shot of the match.
    #[instrument(skip(self, ships), fields(match_id = %self.id, ships = ships.len()))]
    pub fn place_fleet(&mut self, player_id: PlayerId, ships: Vec<Ship>) -> Result<(), MatchError> {
        let index = self.player_index(player_id)?;
        if self.finished {
            warn!("Fleet placement after match end");
            return Err(MatchError::MatchFinished);
        }
        if self.shots_fired > 0 {
            warn!(shots_fired = self.shots_fired, "Fleet placement after firing began");
            return Err(MatchError::FleetLocked);
        }
        validate_fleet(&ships, &self.rules).inspect_err(|e| {
            warn!(error = %e, "Rejected fleet");
        })?;

        self.players[index].commit_fleet(ships);

        info!(phase = %self.phase(), "Fleet placed");
        assert_invariants(self);
        Ok(())
    }

    /// Fires at `target` on the opponent's board.
    ///
    /// Checks, in order: match not finished, player known, player holds the
    /// turn, target on board, opponent ready, repeat-shot policy. Then the
    /// opponent cell resolves, the turn passes to the opponent, and the
    /// opponent's fleet is checked for total destruction.
    #[instrument(skip(self), fields(match_id = %self.id))]
    pub fn fire(&mut self, player_id: PlayerId, target: Coordinate) -> Result<FireOutcome, MatchError> {
        if self.finished {
            warn!("Shot after match end");
            return Err(MatchError::MatchFinished);
        }
        let shooter = self.player_index(player_id)?;
        if self.turn != Some(player_id) {
            warn!(turn = ?self.turn, "Player tried to fire out of turn");
            return Err(MatchError::WrongTurn);
        }
        if !target.is_on_board() {
            warn!(%target, "Shot off the board");
            return Err(MatchError::InvalidCoordinate(target));
        }
        let Some(opponent) = self.players.iter().position(|p| *p.id() != player_id) else {
            warn!("Shot with no opponent");
            return Err(MatchError::NotReady("waiting for an opponent to join"));
        };
        if *self.rules.require_fleets_before_fire() && self.phase() != Phase::InProgress {
            warn!(phase = %self.phase(), "Shot before fleets were placed");
            return Err(MatchError::NotReady("both fleets must be placed before firing"));
        }

        let before = self.players[opponent].board().get(target).unwrap_or_default();
        if before.is_resolved() && *self.rules.reject_repeat_shots() {
            warn!(%target, cell = %before, "Repeat shot rejected");
            return Err(MatchError::AlreadyFired(target));
        }

        let (shot, after) = match before {
            CellState::Ship => (Shot::Hit, CellState::Hit),
            CellState::Empty => (Shot::Miss, CellState::Miss),
            resolved => (Shot::Miss, resolved),
        };
        self.players[opponent].board_mut().set(target, after);
        self.players[shooter].guesses_mut().set(target, after);
        self.shots_fired += 1;

        let opponent_id = *self.players[opponent].id();
        self.turn = Some(opponent_id);

        let winner = if self.players[opponent].is_defeated() {
            self.finished = true;
            self.winner = Some(player_id);
            info!(winner = %player_id, shots_fired = self.shots_fired, "Match won");
            Some(player_id)
        } else {
            None
        };

        debug!(%target, %shot, next_turn = %opponent_id, "Shot resolved");
        assert_invariants(self);
        Ok(FireOutcome { shot, winner })
    }
}
