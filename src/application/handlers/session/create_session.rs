//! CreateSessionHandler - Command handler for opening new poker sessions.

use std::sync::Arc;

use crate::domain::foundation::{ParticipantId, SessionId};
use crate::domain::poker::{Participant, PokerError};
use crate::ports::SessionStore;

/// Command to create a new session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub moderator_name: String,
    /// Comma-separated card labels, e.g. `"1,2,3,5,8"`.
    pub cards: String,
}

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateSessionResult {
    pub session_id: SessionId,
    /// Bearer token of the moderator.
    pub token: ParticipantId,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl CreateSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, cmd: CreateSessionCommand) -> Result<CreateSessionResult, PokerError> {
        let moderator = Participant::new(&cmd.moderator_name)?;
        let token = *moderator.id();

        let cards: Vec<String> = cmd.cards.split(',').map(str::to_string).collect();
        let entry = self.store.create(moderator, &cards)?;

        Ok(CreateSessionResult {
            session_id: *entry.id(),
            token,
        })
    }
}
