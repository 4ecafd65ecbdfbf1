//! Participant authentication extractor for axum.
//!
//! Session-scoped routes take a [`RequireParticipant`] argument. Extraction
//! reads the session id from the path and the participant token from the
//! request, then runs the [`AuthorizeHandler`]. The resolved session and
//! member are handed to the route handler by value.
//!
//! # Token Sources
//!
//! ```text
//! Authorization: Bearer <token>     (API clients, the session page's fetch calls)
//! Cookie: uuid_token=<token>        (browser landing on the page after create/join)
//! ```
//!
//! The header wins when both are present.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Path},
    http::{header, request::Parts, HeaderMap},
};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::{AuthorizeHandler, AuthorizeQuery, Authorized};
use crate::domain::foundation::{ParticipantId, SessionId};
use crate::domain::poker::PokerError;

/// Name of the cookie carrying the participant token.
pub const TOKEN_COOKIE: &str = "uuid_token";

/// Extractor that requires an authorized session member.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireParticipant(auth): RequireParticipant) -> impl IntoResponse {
///     format!("Hello, {}!", auth.participant.name())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireParticipant(pub Authorized);

#[async_trait]
impl<S> FromRequestParts<S> for RequireParticipant
where
    S: Send + Sync,
    Arc<AuthorizeHandler>: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| PokerError::malformed(e.body_text()))?;

        let session_id = params
            .get("id")
            .ok_or_else(|| PokerError::malformed("missing session id"))?
            .parse::<SessionId>()
            .map_err(|_| PokerError::malformed("invalid session id"))?;

        let token = presented_token(&parts.headers).ok_or(ApiError::Unauthenticated)?;
        let token = token
            .parse::<ParticipantId>()
            .map_err(|_| PokerError::UnknownParticipant)?;

        let handler = Arc::<AuthorizeHandler>::from_ref(state);
        let authorized = handler.handle(AuthorizeQuery { session_id, token })?;
        Ok(RequireParticipant(authorized))
    }
}

/// Finds the participant token in the bearer header or the token cookie.
pub fn presented_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if bearer.is_some() {
        return bearer;
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == TOKEN_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|t| !t.is_empty())
}

/// `Set-Cookie` value handing a token to the browser.
pub fn token_cookie(token: &ParticipantId) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Strict", TOKEN_COOKIE, token)
}
