//! Voting round operations.
//!
//! Every operation acts on an [`Authorized`] member of a session; the
//! authorization step has already resolved the session and the token.

use crate::domain::foundation::{ParticipantId, SessionId};
use crate::domain::poker::{PokerError, RoundStatus};

use super::session::Authorized;

/// How often the session page polls for status, in milliseconds.
pub const STATUS_POLL_INTERVAL_MS: u32 = 2500;

/// Command to cast (or withdraw, with a blank label) a vote.
#[derive(Debug, Clone)]
pub struct CastVoteCommand {
    pub label: String,
}

/// Command to show or hide all votes.
#[derive(Debug, Clone, Copy)]
pub struct SetRevealCommand {
    pub show: bool,
}

/// Everything the session page needs to render for one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub session_id: SessionId,
    pub participant_name: String,
    pub token: ParticipantId,
    pub cards: Vec<String>,
    pub participants: Vec<String>,
    pub is_moderator: bool,
    pub poll_interval_ms: u32,
}

/// Records the member's card.
///
/// # Errors
///
/// - `InvalidVote` if the label is not in the deck
/// - `UnknownParticipant` if the member was evicted meanwhile
pub fn cast_vote(auth: &Authorized, cmd: CastVoteCommand) -> Result<(), PokerError> {
    auth.entry.vote(auth.participant.id(), &cmd.label)?;
    tracing::debug!(session_id = %auth.session_id(), "Vote recorded");
    Ok(())
}

/// Reveals or hides the votes.
///
/// # Errors
///
/// - `NotAuthorized` unless the member is the moderator
pub fn set_reveal(auth: &Authorized, cmd: SetRevealCommand) -> Result<(), PokerError> {
    if let Err(err) = auth.entry.reveal(auth.participant.id(), cmd.show) {
        tracing::warn!(session_id = %auth.session_id(), "Non-moderator attempted to reveal votes");
        return Err(err);
    }
    tracing::debug!(session_id = %auth.session_id(), show = cmd.show, "Reveal flag changed");
    Ok(())
}

/// Clears all votes. Any member may start a new round.
pub fn reset_votes(auth: &Authorized) {
    auth.entry.reset();
    tracing::debug!(session_id = %auth.session_id(), "Votes reset");
}

/// Status as seen by the member.
pub fn get_status(auth: &Authorized) -> RoundStatus {
    auth.entry.status(auth.participant.id())
}

/// Page model for the member.
pub fn view_session(auth: &Authorized) -> SessionView {
    SessionView {
        session_id: *auth.session_id(),
        participant_name: auth.participant.name().to_string(),
        token: *auth.participant.id(),
        cards: auth.entry.deck().cards().to_vec(),
        participants: auth
            .entry
            .roster()
            .iter()
            .map(|p| p.name().to_string())
            .collect(),
        is_moderator: auth.is_moderator(),
        poll_interval_ms: STATUS_POLL_INTERVAL_MS,
    }
}
