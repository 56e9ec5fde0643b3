//! Request and response bodies.

use broadside_rules::{Board, CellState, Coordinate, Match, MatchId, MatchView, PlayerId, Ship, Shot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response to creating a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatchResponse {
    /// New match ID.
    pub match_id: String,
}

/// Request for joining a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinMatchRequest {
    /// Display name.
    pub player_name: String,
}

/// Response to joining a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinMatchResponse {
    /// New player ID; keep it to place a fleet and fire.
    pub player_id: String,
}

/// Request for placing a fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceFleetRequest {
    /// Ships, each a list of `{x, y}` positions.
    pub ships: Vec<Ship>,
}

/// Acknowledgement with no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always true.
    pub success: bool,
}

impl SuccessResponse {
    /// The only value this response takes.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Request for firing a shot.
///
/// Axes are read as `i64` so that any JSON integer reaches the board check
/// and is refused as `invalid_coordinate` rather than as a parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireRequest {
    /// Target row.
    pub x: i64,
    /// Target column.
    pub y: i64,
}

impl FireRequest {
    /// Target cell, with out-of-range axes saturated off the board.
    pub fn target(&self) -> Coordinate {
        target(self.x, self.y)
    }
}

fn saturate(axis: i64) -> i32 {
    i32::try_from(axis).unwrap_or(if axis < 0 { i32::MIN } else { i32::MAX })
}

fn target(x: i64, y: i64) -> Coordinate {
    Coordinate::new(saturate(x), saturate(y))
}

/// Query string for the match view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewQuery {
    /// Whose perspective to render; omit for a spectator view.
    pub player_id: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always true while the server answers.
    pub ok: bool,
    /// Matches currently held.
    pub matches: usize,
}

/// Legacy `create-game` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCreateResponse {
    /// New match ID.
    pub game_id: String,
}

/// Legacy `join-game` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyJoinRequest {
    /// Match ID.
    pub game_id: String,
    /// Display name.
    pub player_name: String,
}

/// Legacy `join-game` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyJoinResponse {
    /// New player ID.
    pub player_id: String,
}

/// Legacy `place-ships` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPlaceShipsRequest {
    /// Match ID.
    pub game_id: String,
    /// Player ID.
    pub player_id: String,
    /// Ships, each a list of `{x, y}` positions.
    pub ships: Vec<Ship>,
}

/// Legacy `fire` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyFireRequest {
    /// Match ID.
    pub game_id: String,
    /// Player ID.
    pub player_id: String,
    /// Target row.
    pub x: i64,
    /// Target column.
    pub y: i64,
}

impl LegacyFireRequest {
    /// Target cell, with out-of-range axes saturated off the board.
    pub fn target(&self) -> Coordinate {
        target(self.x, self.y)
    }
}

/// Legacy `fire` response; the shot is reported as `result`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyFireResponse {
    /// Hit or miss.
    pub result: Shot,
    /// Present when the shot won the match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerId>,
}

/// Legacy `state` query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyStateQuery {
    /// Whose perspective to render when full state is disabled.
    pub player_id: Option<String>,
}

/// One cell in the first-generation board encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyCell {
    /// Cell state.
    pub status: CellState,
}

fn legacy_board(board: &Board) -> Vec<Vec<LegacyCell>> {
    board
        .rows()
        .iter()
        .map(|row| row.iter().map(|&status| LegacyCell { status }).collect())
        .collect()
}

/// A player in the first-generation state shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPlayer {
    /// Player ID.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Fleet board indexed `[x][y]`.
    pub board: Vec<Vec<LegacyCell>>,
    /// Shots this player has fired, indexed `[x][y]`.
    pub guesses: Vec<Vec<LegacyCell>>,
    /// Whether a fleet has been committed.
    pub ships_placed: bool,
    /// Ship positions; empty when hidden from the requester.
    pub ships: Vec<Ship>,
}

/// Legacy `state` response: players keyed by ID, camelCase fields and
/// `{"status"}` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyGameState {
    /// Match ID.
    pub id: MatchId,
    /// Players keyed by player ID.
    pub players: BTreeMap<String, LegacyPlayer>,
    /// Player entitled to fire next.
    pub turn: Option<PlayerId>,
    /// Whether the match is over.
    pub finished: bool,
    /// Winner, once finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerId>,
}

impl LegacyGameState {
    /// Unredacted state with both fleets.
    pub fn full(game: &Match) -> Self {
        let players = game
            .players()
            .iter()
            .map(|player| {
                let legacy = LegacyPlayer {
                    id: *player.id(),
                    name: player.name().clone(),
                    board: legacy_board(player.board()),
                    guesses: legacy_board(player.guesses()),
                    ships_placed: *player.ships_placed(),
                    ships: player.ships().clone(),
                };
                (player.id().to_string(), legacy)
            })
            .collect();
        Self {
            id: *game.id(),
            players,
            turn: *game.turn(),
            finished: *game.finished(),
            winner: *game.winner(),
        }
    }

    /// State as one viewer is allowed to see it.
    pub fn projected(view: MatchView) -> Self {
        let players = view
            .players
            .into_iter()
            .map(|player| {
                let legacy = LegacyPlayer {
                    id: player.id,
                    name: player.name,
                    board: legacy_board(&player.board),
                    guesses: legacy_board(&player.guesses),
                    ships_placed: player.ships_placed,
                    ships: player.ships.unwrap_or_default(),
                };
                (player.id.to_string(), legacy)
            })
            .collect();
        Self {
            id: view.id,
            players,
            turn: view.turn,
            finished: view.finished,
            winner: view.winner,
        }
    }
}
