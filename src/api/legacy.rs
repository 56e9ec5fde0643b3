//! Flat routes kept for clients of the first-generation JSON API.
//!
//! Bodies use camelCase IDs (`gameId`, `playerId`) and the fire response
//! reports the shot as `result`.

use super::AppState;
use super::error::ApiError;
use super::extract::JsonBody;
use super::handlers::{parse_match_id, parse_player_id, parse_viewer};
use super::models::{
    LegacyCreateResponse, LegacyFireRequest, LegacyFireResponse, LegacyGameState,
    LegacyJoinRequest, LegacyJoinResponse, LegacyPlaceShipsRequest, LegacyStateQuery,
    SuccessResponse,
};
use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;

/// `POST /create-game`
#[instrument(skip(state))]
pub async fn create_game(State(state): State<AppState>) -> Json<LegacyCreateResponse> {
    Json(LegacyCreateResponse {
        game_id: state.registry.create_match().to_string(),
    })
}

/// `POST /join-game`
#[instrument(skip(state, req), fields(game_id = %req.game_id))]
pub async fn join_game(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LegacyJoinRequest>,
) -> Result<Json<LegacyJoinResponse>, ApiError> {
    let match_id = parse_match_id(&req.game_id)?;
    let player_id = state.registry.join(match_id, &req.player_name)?;
    Ok(Json(LegacyJoinResponse {
        player_id: player_id.to_string(),
    }))
}

/// `POST /place-ships`
#[instrument(skip(state, req), fields(game_id = %req.game_id, player_id = %req.player_id))]
pub async fn place_ships(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LegacyPlaceShipsRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let match_id = parse_match_id(&req.game_id)?;
    let player_id = parse_player_id(&req.player_id)?;
    state.registry.place_fleet(match_id, player_id, req.ships)?;
    Ok(Json(SuccessResponse::ok()))
}

/// `POST /fire`
#[instrument(skip(state))]
pub async fn fire(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LegacyFireRequest>,
) -> Result<Json<LegacyFireResponse>, ApiError> {
    let match_id = parse_match_id(&req.game_id)?;
    let player_id = parse_player_id(&req.player_id)?;
    let outcome = state
        .registry
        .fire(match_id, player_id, req.target())?;
    Ok(Json(LegacyFireResponse {
        result: *outcome.shot(),
        winner: *outcome.winner(),
    }))
}

/// `GET /state/{game_id}`
///
/// Both fleets when enabled in config, otherwise the view for `playerId`
/// (or a spectator). Either way in the first-generation shape.
#[instrument(skip(state))]
pub async fn state(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Query(query): Query<LegacyStateQuery>,
) -> Result<Json<LegacyGameState>, ApiError> {
    let match_id = parse_match_id(&game_id)?;
    if state.expose_full_state {
        let game = state.registry.with_match(match_id, LegacyGameState::full)?;
        return Ok(Json(game));
    }
    let viewer = parse_viewer(query.player_id.as_deref())?;
    let view = state.registry.view(match_id, viewer)?;
    Ok(Json(LegacyGameState::projected(view)))
}
