//! Poker-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, SessionId, ValidationError};

/// Errors returned by session and voting operations.
///
/// Every failure is recoverable at the request boundary; none of these
/// abort the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokerError {
    /// Fewer than two usable card labels after filtering.
    #[error("At least {min} distinct cards are needed, got {actual}")]
    InvalidDeck { min: usize, actual: usize },

    /// Unknown session id.
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// Token does not belong to any participant of the session.
    #[error("Participant is not a member of this session")]
    UnknownParticipant,

    /// A non-moderator attempted a moderator-only action.
    #[error("Only the moderator may {action}")]
    NotAuthorized { action: &'static str },

    /// Vote label is not one of the session's cards.
    #[error("Card '{label}' is not part of this session's deck")]
    InvalidVote { label: String },

    /// Participant name failed validation.
    #[error("Invalid participant name: {0}")]
    InvalidName(#[from] ValidationError),

    /// Request payload could not be interpreted.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl PokerError {
    pub fn not_found(id: SessionId) -> Self {
        PokerError::NotFound(id)
    }

    pub fn not_authorized(action: &'static str) -> Self {
        PokerError::NotAuthorized { action }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        PokerError::MalformedInput(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PokerError::InvalidDeck { .. } => ErrorCode::InvalidDeck,
            PokerError::NotFound(_) => ErrorCode::SessionNotFound,
            PokerError::UnknownParticipant => ErrorCode::Unauthorized,
            PokerError::NotAuthorized { .. } => ErrorCode::Forbidden,
            PokerError::InvalidVote { .. } => ErrorCode::InvalidVote,
            PokerError::InvalidName(_) => ErrorCode::ValidationFailed,
            PokerError::MalformedInput(_) => ErrorCode::MalformedInput,
        }
    }
}
