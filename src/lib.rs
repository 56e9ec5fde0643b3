//! Broadside - two-player grid battle match coordinator
//!
//! Clients create a match, join it as one of two players, privately place a
//! fleet on a 10×10 grid and alternate shots until one fleet is destroyed.
//!
//! # Architecture
//!
//! - **Rules**: the match state machine, in the `broadside_rules` crate
//! - **Registry**: process-wide store of matches with per-match locking
//! - **API**: JSON-over-HTTP routes served by axum
//! - **Config**: TOML file, environment and CLI overrides
//!
//! # Example
//!
//! ```no_run
//! use broadside::{AppState, MatchRegistry, ServerConfig, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::load(None)?;
//! let registry = MatchRegistry::new(config.rules().clone());
//! let app = router(AppState::new(registry, *config.expose_full_state()));
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()?).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod registry;
mod telemetry;

pub use api::{
    ApiError, AppState, CreateMatchResponse, ErrorBody, FireRequest, HealthResponse,
    JoinMatchRequest, JoinMatchResponse, JsonBody, LegacyCell, LegacyCreateResponse,
    LegacyFireRequest, LegacyFireResponse, LegacyGameState, LegacyJoinRequest,
    LegacyJoinResponse, LegacyPlaceShipsRequest, LegacyPlayer, LegacyStateQuery,
    PlaceFleetRequest, SuccessResponse, ViewQuery, router,
};
pub use config::{ConfigError, EXPOSE_FULL_STATE_ENV, HOST_ENV, PORT_ENV, ServerConfig};
pub use registry::MatchRegistry;
pub use telemetry::init_tracing;

pub use broadside_rules as rules;
