//! In-memory session store.
//!
//! A `RwLock<HashMap>` maps ids to `Arc<SessionEntry>`. Each entry carries
//! its own mutex, so voting traffic on one session never blocks another.
//!
//! Lock order is map first, entry second. Nothing takes the map lock while
//! holding an entry lock.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use crate::domain::foundation::{ParticipantId, SessionId, Timestamp};
use crate::domain::poker::{Deck, Participant, PokerError, SessionEntry};
use crate::ports::SessionStore;

/// Process-local session store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Arc<SessionEntry>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<SessionId, Arc<SessionEntry>>> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<SessionId, Arc<SessionEntry>>> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` on the entry while the map read lock is held.
    ///
    /// Sweep needs the write lock, so it cannot evict the entry between
    /// the lookup and the activity stamp `f` leaves on it.
    fn with_entry<R>(
        &self,
        id: &SessionId,
        f: impl FnOnce(&SessionEntry) -> R,
    ) -> Result<(Arc<SessionEntry>, R), PokerError> {
        let sessions = self.read();
        let entry = sessions
            .get(id)
            .cloned()
            .ok_or_else(|| PokerError::not_found(*id))?;
        let out = f(&entry);
        Ok((entry, out))
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(
        &self,
        moderator: Participant,
        cards: &[String],
    ) -> Result<Arc<SessionEntry>, PokerError> {
        let deck = Deck::new(cards)?;

        let mut sessions = self.write();
        let mut id = SessionId::new();
        while sessions.contains_key(&id) {
            id = SessionId::new();
        }
        let entry = Arc::new(SessionEntry::new(id, moderator, deck));
        sessions.insert(id, Arc::clone(&entry));

        tracing::info!(
            session_id = %id,
            cards = entry.deck().len(),
            numeric = entry.deck().is_numeric(),
            "Session created"
        );
        Ok(entry)
    }

    fn join(
        &self,
        id: &SessionId,
        participant: Participant,
    ) -> Result<Arc<SessionEntry>, PokerError> {
        let (entry, ()) = self.with_entry(id, |entry| entry.join(participant))?;
        tracing::debug!(session_id = %id, "Participant joined");
        Ok(entry)
    }

    fn get(&self, id: &SessionId) -> Result<Arc<SessionEntry>, PokerError> {
        let (entry, ()) = self.with_entry(id, SessionEntry::touch)?;
        Ok(entry)
    }

    fn delete(&self, id: &SessionId, requester: &ParticipantId) -> Result<(), PokerError> {
        let mut sessions = self.write();
        let entry = sessions.get(id).ok_or_else(|| PokerError::not_found(*id))?;
        if !entry.is_moderator(requester) {
            tracing::warn!(session_id = %id, "Non-moderator attempted to delete session");
            return Err(PokerError::not_authorized("delete the session"));
        }
        sessions.remove(id);
        tracing::info!(session_id = %id, "Session deleted");
        Ok(())
    }

    fn sweep(&self, now: Timestamp, max_lifetime: Duration) -> usize {
        let mut sessions = self.write();
        let before = sessions.len();
        let mut busy = 0usize;

        sessions.retain(|_, entry| match entry.try_expired(now, max_lifetime) {
            Some(expired) => !expired,
            None => {
                busy += 1;
                true
            }
        });

        let evicted = before - sessions.len();
        if evicted > 0 || busy > 0 {
            tracing::info!(
                evicted,
                busy,
                remaining = sessions.len(),
                "Swept idle sessions"
            );
        }
        evicted
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
