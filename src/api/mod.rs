//! JSON-over-HTTP binding for the match registry.

mod error;
mod extract;
mod handlers;
mod legacy;
mod models;

pub use error::{ApiError, ErrorBody};
pub use extract::JsonBody;
pub use models::{
    CreateMatchResponse, FireRequest, HealthResponse, JoinMatchRequest, JoinMatchResponse,
    LegacyCell, LegacyCreateResponse, LegacyFireRequest, LegacyFireResponse, LegacyGameState,
    LegacyJoinRequest, LegacyJoinResponse, LegacyPlaceShipsRequest, LegacyPlayer,
    LegacyStateQuery, PlaceFleetRequest, SuccessResponse, ViewQuery,
};

use crate::registry::MatchRegistry;
use axum::Router;
use axum::routing::{get, post, put};
use derive_new::new;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Debug, Clone, new)]
pub struct AppState {
    /// All matches.
    pub registry: MatchRegistry,
    /// Whether unredacted snapshots may be served.
    pub expose_full_state: bool,
}

/// Builds the full router: resource routes, legacy routes, CORS and tracing.
pub fn router(state: AppState) -> Router {
    let matches = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/matches",
            post(handlers::create_match).get(handlers::list_matches),
        )
        .route("/matches/{match_id}", get(handlers::view_match))
        .route("/matches/{match_id}/state", get(handlers::get_state))
        .route("/matches/{match_id}/players", post(handlers::join_match))
        .route(
            "/matches/{match_id}/players/{player_id}/fleet",
            put(handlers::place_fleet),
        )
        .route(
            "/matches/{match_id}/players/{player_id}/shots",
            post(handlers::fire),
        );

    let legacy = Router::new()
        .route("/create-game", post(legacy::create_game))
        .route("/join-game", post(legacy::join_game))
        .route("/place-ships", post(legacy::place_ships))
        .route("/fire", post(legacy::fire))
        .route("/state/{game_id}", get(legacy::state));

    matches
        .merge(legacy)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
