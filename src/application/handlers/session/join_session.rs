//! JoinSessionHandler - Command handler for adding participants.

use std::sync::Arc;

use crate::domain::foundation::{ParticipantId, SessionId};
use crate::domain::poker::{Participant, PokerError};
use crate::ports::SessionStore;

/// Command to join an existing session.
#[derive(Debug, Clone)]
pub struct JoinSessionCommand {
    pub session_id: SessionId,
    pub name: String,
}

/// Result of joining a session.
#[derive(Debug, Clone)]
pub struct JoinSessionResult {
    pub session_id: SessionId,
    /// Bearer token of the new participant.
    pub token: ParticipantId,
}

/// Handler for joining sessions.
pub struct JoinSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl JoinSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: JoinSessionCommand) -> Result<JoinSessionResult, PokerError> {
        let participant = Participant::new(&cmd.name)?;
        let token = *participant.id();

        let entry = self.store.join(&cmd.session_id, participant)?;

        Ok(JoinSessionResult {
            session_id: *entry.id(),
            token,
        })
    }
}
