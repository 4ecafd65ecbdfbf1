//! HTTP error mapping.
//!
//! Domain errors become a status code plus a JSON [`ErrorResponse`]. The
//! presentation decision lives here, not in the domain.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::poker::PokerError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Rejection and error type of all poker endpoints.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// No participant token was presented.
    Unauthenticated,
    /// A domain operation failed.
    Poker(PokerError),
}

impl From<PokerError> for ApiError {
    fn from(err: PokerError) -> Self {
        ApiError::Poker(err)
    }
}

/// Status code for a domain error.
pub fn status_for(err: &PokerError) -> StatusCode {
    match err {
        PokerError::InvalidDeck { .. }
        | PokerError::InvalidVote { .. }
        | PokerError::InvalidName(_)
        | PokerError::MalformedInput(_) => StatusCode::BAD_REQUEST,
        PokerError::UnknownParticipant => StatusCode::UNAUTHORIZED,
        PokerError::NotAuthorized { .. } => StatusCode::FORBIDDEN,
        PokerError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(
                    "UNAUTHENTICATED",
                    "Participant token required",
                )),
            )
                .into_response(),
            ApiError::Poker(err) => {
                let status = status_for(&err);
                tracing::debug!(status = status.as_u16(), error = %err, "Request rejected");
                (
                    status,
                    Json(ErrorResponse::new(err.code().to_string(), err.to_string())),
                )
                    .into_response()
            }
        }
    }
}
