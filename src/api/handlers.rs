//! Handlers for the `/matches` resource.

use super::AppState;
use super::error::ApiError;
use super::extract::JsonBody;
use super::models::{
    CreateMatchResponse, FireRequest, HealthResponse, JoinMatchRequest, JoinMatchResponse,
    PlaceFleetRequest, SuccessResponse, ViewQuery,
};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use broadside_rules::{FireOutcome, Match, MatchId, MatchSummary, MatchView, PlayerId};
use tracing::{info, instrument};

pub(super) fn parse_match_id(raw: &str) -> Result<MatchId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::MalformedMatchId(raw.to_string()))
}

pub(super) fn parse_player_id(raw: &str) -> Result<PlayerId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::MalformedPlayerId(raw.to_string()))
}

pub(super) fn parse_viewer(raw: Option<&str>) -> Result<Option<PlayerId>, ApiError> {
    raw.map(parse_player_id).transpose()
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        matches: state.registry.len(),
    })
}

/// `POST /matches`
#[instrument(skip(state))]
pub async fn create_match(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateMatchResponse>) {
    let match_id = state.registry.create_match();
    info!(%match_id, "Match created over HTTP");
    (
        StatusCode::CREATED,
        Json(CreateMatchResponse {
            match_id: match_id.to_string(),
        }),
    )
}

/// `GET /matches`
#[instrument(skip(state))]
pub async fn list_matches(State(state): State<AppState>) -> Json<Vec<MatchSummary>> {
    Json(state.registry.list_matches())
}

/// `POST /matches/{match_id}/players`
#[instrument(skip(state, req), fields(player_name = %req.player_name))]
pub async fn join_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    JsonBody(req): JsonBody<JoinMatchRequest>,
) -> Result<(StatusCode, Json<JoinMatchResponse>), ApiError> {
    let match_id = parse_match_id(&match_id)?;
    let player_id = state.registry.join(match_id, &req.player_name)?;
    Ok((
        StatusCode::CREATED,
        Json(JoinMatchResponse {
            player_id: player_id.to_string(),
        }),
    ))
}

/// `PUT /matches/{match_id}/players/{player_id}/fleet`
#[instrument(skip(state, req), fields(ships = req.ships.len()))]
pub async fn place_fleet(
    State(state): State<AppState>,
    Path((match_id, player_id)): Path<(String, String)>,
    JsonBody(req): JsonBody<PlaceFleetRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let match_id = parse_match_id(&match_id)?;
    let player_id = parse_player_id(&player_id)?;
    state.registry.place_fleet(match_id, player_id, req.ships)?;
    Ok(Json(SuccessResponse::ok()))
}

/// `POST /matches/{match_id}/players/{player_id}/shots`
#[instrument(skip(state))]
pub async fn fire(
    State(state): State<AppState>,
    Path((match_id, player_id)): Path<(String, String)>,
    JsonBody(req): JsonBody<FireRequest>,
) -> Result<Json<FireOutcome>, ApiError> {
    let match_id = parse_match_id(&match_id)?;
    let player_id = parse_player_id(&player_id)?;
    let outcome = state
        .registry
        .fire(match_id, player_id, req.target())?;
    Ok(Json(outcome))
}

/// `GET /matches/{match_id}?player_id=`
#[instrument(skip(state))]
pub async fn view_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<MatchView>, ApiError> {
    let match_id = parse_match_id(&match_id)?;
    let viewer = parse_viewer(query.player_id.as_deref())?;
    Ok(Json(state.registry.view(match_id, viewer)?))
}

/// `GET /matches/{match_id}/state`
///
/// Unredacted snapshot of both fleets, served only when enabled in config.
#[instrument(skip(state))]
pub async fn get_state(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<Match>, ApiError> {
    if !state.expose_full_state {
        return Err(ApiError::FullStateDisabled);
    }
    let match_id = parse_match_id(&match_id)?;
    Ok(Json(state.registry.get_match(match_id)?))
}
