//! DeleteSessionHandler - Command handler for closing a session.

use std::sync::Arc;

use super::Authorized;
use crate::domain::poker::PokerError;
use crate::ports::SessionStore;

/// Handler for deleting sessions. Only the moderator may delete.
pub struct DeleteSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl DeleteSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, auth: &Authorized) -> Result<(), PokerError> {
        self.store.delete(auth.session_id(), auth.participant.id())
    }
}
