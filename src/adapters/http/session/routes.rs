//! HTTP routes for session endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    create_session, delete_session, get_session, join_session, reset, reveal_votes, status, vote,
    vote_reset_card, SessionHandlers,
};

/// Creates the session router with all endpoints.
///
/// `/session/:id/status` and `/session/:id/reset` are static segments and
/// win over the `:vote` parameter. `status` is never a card; a `reset` card
/// is voted through the PUT on the reset path.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/create", post(create_session))
        .route("/join", post(join_session))
        .route(
            "/session/:id",
            get(get_session).put(reveal_votes).delete(delete_session),
        )
        .route("/session/:id/status", get(status))
        .route(
            "/session/:id/reset",
            get(reset).post(reset).put(vote_reset_card),
        )
        .route("/session/:id/:vote", put(vote))
        .with_state(handlers)
}
