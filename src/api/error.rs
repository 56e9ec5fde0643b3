//! HTTP error responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use broadside_rules::{ErrorKind, MatchError};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-checkable kind, e.g. `wrong_turn`.
    pub error: String,
    /// Human-readable explanation.
    pub message: String,
}

/// Anything a handler can fail with.
#[derive(Debug, Display, From)]
pub enum ApiError {
    /// A rule of the match was broken.
    #[display("{}", _0)]
    Match(MatchError),

    /// Match ID in the request is not a valid identifier.
    #[from(ignore)]
    #[display("Match {} not found", _0)]
    MalformedMatchId(String),

    /// Player ID in the request is not a valid identifier.
    #[from(ignore)]
    #[display("Player {} not found", _0)]
    MalformedPlayerId(String),

    /// Request body was not valid JSON for the route.
    #[display("{}", _0.body_text())]
    BadRequest(JsonRejection),

    /// Unredacted snapshots are switched off.
    #[from(ignore)]
    #[display("Full match state is disabled on this server")]
    FullStateDisabled,
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Wire name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Match(e) => kind_name(e.kind()),
            ApiError::MalformedMatchId(_) => kind_name(ErrorKind::NotFound),
            ApiError::MalformedPlayerId(_) => kind_name(ErrorKind::PlayerNotFound),
            ApiError::BadRequest(_) => "bad_request",
            ApiError::FullStateDisabled => "full_state_disabled",
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Match(e) => match e.kind() {
                ErrorKind::NotFound | ErrorKind::PlayerNotFound => StatusCode::NOT_FOUND,
                ErrorKind::MatchFull
                | ErrorKind::WrongTurn
                | ErrorKind::FleetLocked
                | ErrorKind::NotReady
                | ErrorKind::AlreadyFired
                | ErrorKind::MatchFinished => StatusCode::CONFLICT,
                ErrorKind::InvalidCoordinate | ErrorKind::InvalidFleet | ErrorKind::InvalidName => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            },
            ApiError::MalformedMatchId(_) | ApiError::MalformedPlayerId(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(rejection) => rejection.status(),
            ApiError::FullStateDisabled => StatusCode::FORBIDDEN,
        }
    }
}

fn kind_name(kind: ErrorKind) -> &'static str {
    kind.into()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(%status, kind = self.kind(), error = %self, "Request rejected");
        let body = ErrorBody {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
