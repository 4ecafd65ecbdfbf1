//! AuthorizeHandler - Resolves a presented token to a session member.
//!
//! Every session-scoped request passes through here first. The result is
//! an explicit [`Authorized`] value handed to the operation, so no request
//! state is ever shared between concurrent requests.

use std::sync::Arc;

use crate::domain::foundation::{ParticipantId, SessionId};
use crate::domain::poker::{Participant, PokerError, SessionEntry};
use crate::ports::SessionStore;

/// Query to authorize a token against a session.
#[derive(Debug, Clone)]
pub struct AuthorizeQuery {
    pub session_id: SessionId,
    pub token: ParticipantId,
}

/// A session together with the member who is acting on it.
#[derive(Debug, Clone)]
pub struct Authorized {
    pub entry: Arc<SessionEntry>,
    pub participant: Participant,
}

impl Authorized {
    pub fn session_id(&self) -> &SessionId {
        self.entry.id()
    }

    pub fn is_moderator(&self) -> bool {
        self.entry.is_moderator(self.participant.id())
    }
}

/// Handler for authorizing participants.
pub struct AuthorizeHandler {
    store: Arc<dyn SessionStore>,
}

impl AuthorizeHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// - `NotFound` if the session does not exist
    /// - `UnknownParticipant` if the token is not on the roster
    pub fn handle(&self, query: AuthorizeQuery) -> Result<Authorized, PokerError> {
        let entry = self.store.get(&query.session_id)?;
        let participant = entry.participant(&query.token)?;
        Ok(Authorized { entry, participant })
    }
}
