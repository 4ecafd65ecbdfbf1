//! HTTP middleware and extractors for axum.
//!
//! - `auth` - Participant token extraction and session authorization

pub mod auth;

pub use auth::{presented_token, token_cookie, RequireParticipant, TOKEN_COOKIE};
