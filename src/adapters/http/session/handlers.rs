//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, FromRef, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{token_cookie, RequireParticipant};
use crate::application::handlers::{
    cast_vote, get_status, reset_votes, set_reveal, view_session, AuthorizeHandler,
    CastVoteCommand, CreateSessionCommand, CreateSessionHandler, DeleteSessionHandler,
    JoinSessionCommand, JoinSessionHandler, SetRevealCommand,
};
use crate::domain::foundation::{ParticipantId, SessionId};
use crate::domain::poker::PokerError;
use crate::ports::SessionStore;

use super::dto::{
    CreateSessionForm, JoinSessionForm, RevealRequest, SessionTokenResponse, SessionViewResponse,
    StatusResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    create_handler: Arc<CreateSessionHandler>,
    join_handler: Arc<JoinSessionHandler>,
    delete_handler: Arc<DeleteSessionHandler>,
    authorize_handler: Arc<AuthorizeHandler>,
}

impl SessionHandlers {
    /// Wires every handler to the same store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            create_handler: Arc::new(CreateSessionHandler::new(store.clone())),
            join_handler: Arc::new(JoinSessionHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteSessionHandler::new(store.clone())),
            authorize_handler: Arc::new(AuthorizeHandler::new(store)),
        }
    }
}

impl FromRef<SessionHandlers> for Arc<AuthorizeHandler> {
    fn from_ref(handlers: &SessionHandlers) -> Self {
        handlers.authorize_handler.clone()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /create - Create a session; the caller becomes moderator
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    form: Result<Form<CreateSessionForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(form) = form.map_err(|e| PokerError::malformed(e.body_text()))?;

    let result = handlers.create_handler.handle(CreateSessionCommand {
        moderator_name: form.username,
        cards: form.cards,
    })?;

    let token = result.token;
    Ok(with_token_cookie(StatusCode::CREATED, &token, result.into()))
}

/// POST /join - Join an existing session
pub async fn join_session(
    State(handlers): State<SessionHandlers>,
    form: Result<Form<JoinSessionForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(form) = form.map_err(|e| PokerError::malformed(e.body_text()))?;
    let session_id = form
        .session_id
        .parse::<SessionId>()
        .map_err(|_| PokerError::malformed("invalid session id"))?;

    let result = handlers.join_handler.handle(JoinSessionCommand {
        session_id,
        name: form.username,
    })?;

    let token = result.token;
    Ok(with_token_cookie(StatusCode::OK, &token, result.into()))
}

/// GET /session/:id - Session page model for the caller
pub async fn get_session(RequireParticipant(auth): RequireParticipant) -> Json<SessionViewResponse> {
    Json(view_session(&auth).into())
}

/// PUT /session/:id - Show or hide all votes (moderator only)
pub async fn reveal_votes(
    RequireParticipant(auth): RequireParticipant,
    body: Result<Json<RevealRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = body.map_err(|e| PokerError::malformed(e.body_text()))?;
    set_reveal(
        &auth,
        SetRevealCommand {
            show: body.should_show,
        },
    )?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /session/:id - Delete the session (moderator only)
pub async fn delete_session(
    State(handlers): State<SessionHandlers>,
    RequireParticipant(auth): RequireParticipant,
) -> Result<StatusCode, ApiError> {
    handlers.delete_handler.handle(&auth)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /session/:id/:vote - Cast a vote
pub async fn vote(
    RequireParticipant(auth): RequireParticipant,
    Path((_, label)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    cast_vote(&auth, CastVoteCommand { label })?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /session/:id/reset - Cast a vote for a card labelled `reset`
///
/// The static reset path shadows the vote route for that one label.
pub async fn vote_reset_card(
    RequireParticipant(auth): RequireParticipant,
) -> Result<StatusCode, ApiError> {
    cast_vote(
        &auth,
        CastVoteCommand {
            label: "reset".to_string(),
        },
    )?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /session/:id/status - Votes visible to the caller, plus the average
pub async fn status(RequireParticipant(auth): RequireParticipant) -> Json<StatusResponse> {
    Json(get_status(&auth).into())
}

/// GET|POST /session/:id/reset - Clear all votes
pub async fn reset(RequireParticipant(auth): RequireParticipant) -> StatusCode {
    reset_votes(&auth);
    StatusCode::NO_CONTENT
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn with_token_cookie(
    status: StatusCode,
    token: &ParticipantId,
    body: SessionTokenResponse,
) -> Response {
    (
        status,
        [(header::SET_COOKIE, token_cookie(token))],
        Json(body),
    )
        .into_response()
}
