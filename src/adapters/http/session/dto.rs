//! HTTP DTOs for session endpoints.
//!
//! Field names follow the browser client: the landing page posts lower-case
//! form fields (older pages used `Username`, `Cards` and `SessionID`), and the
//! session page reads a PascalCase status payload.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{CreateSessionResult, JoinSessionResult, SessionView};
use crate::domain::poker::{ParticipantVote, RoundStatus};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Form posted to `/create`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSessionForm {
    #[serde(default, alias = "Username")]
    pub username: String,
    #[serde(default, alias = "Cards")]
    pub cards: String,
}

/// Form posted to `/join`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinSessionForm {
    #[serde(default, alias = "Username")]
    pub username: String,
    #[serde(default, alias = "SessionID")]
    pub session_id: String,
}

/// Body of `PUT /session/:id`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RevealRequest {
    #[serde(rename = "ShouldShow", alias = "should_show")]
    pub should_show: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Returned by create and join.
#[derive(Debug, Clone, Serialize)]
pub struct SessionTokenResponse {
    pub session_id: String,
    pub token: String,
}

impl From<CreateSessionResult> for SessionTokenResponse {
    fn from(result: CreateSessionResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            token: result.token.to_string(),
        }
    }
}

impl From<JoinSessionResult> for SessionTokenResponse {
    fn from(result: JoinSessionResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            token: result.token.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoteResponse {
    pub name: String,
    pub vote: String,
}

impl From<ParticipantVote> for VoteResponse {
    fn from(vote: ParticipantVote) -> Self {
        Self {
            name: vote.name,
            vote: vote.vote,
        }
    }
}

/// Status payload polled by the session page.
///
/// `Average` and `Closest` are empty strings when no average applies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusResponse {
    pub votes: Vec<VoteResponse>,
    pub average: String,
    pub closest: String,
}

impl From<RoundStatus> for StatusResponse {
    fn from(status: RoundStatus) -> Self {
        Self {
            votes: status.votes.into_iter().map(VoteResponse::from).collect(),
            average: status.average.unwrap_or_default(),
            closest: status.closest.unwrap_or_default(),
        }
    }
}

/// Session page model.
#[derive(Debug, Clone, Serialize)]
pub struct SessionViewResponse {
    pub session_id: String,
    pub name: String,
    pub token: String,
    pub cards: Vec<String>,
    pub participants: Vec<String>,
    pub is_moderator: bool,
    pub poll_interval_ms: u32,
}

impl From<SessionView> for SessionViewResponse {
    fn from(view: SessionView) -> Self {
        Self {
            session_id: view.session_id.to_string(),
            name: view.participant_name,
            token: view.token.to_string(),
            cards: view.cards,
            participants: view.participants,
            is_moderator: view.is_moderator,
            poll_interval_ms: view.poll_interval_ms,
        }
    }
}
