//! HTTP adapter for session endpoints.
//!
//! - `POST /create` - Create a session, caller becomes moderator
//! - `POST /join` - Join a session
//! - `GET /session/:id` - Session page model
//! - `PUT /session/:id` - Show or hide votes
//! - `DELETE /session/:id` - Delete the session
//! - `PUT /session/:id/:vote` - Vote
//! - `GET /session/:id/status` - Current votes and average
//! - `GET|POST /session/:id/reset` - Clear votes

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateSessionForm, JoinSessionForm, RevealRequest, SessionTokenResponse, SessionViewResponse,
    StatusResponse, VoteResponse,
};
pub use handlers::SessionHandlers;
pub use routes::session_routes;
