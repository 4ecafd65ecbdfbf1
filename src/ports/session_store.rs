//! Session store port.
//!
//! The single source of truth mapping session ids to live entries. The store
//! owns entry lifetime: entries leave it only through moderator deletion or
//! the idle sweep.
//!
//! # Design
//!
//! - **Synchronous**: all work is in-memory and lock-bound, nothing awaits
//! - **Shared**: handlers hold the store behind `Arc<dyn SessionStore>`
//! - **Touching**: `join` and `get` refresh the entry's last activity

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::{ParticipantId, SessionId, Timestamp};
use crate::domain::poker::{Participant, PokerError, SessionEntry};

/// Store port for live poker sessions.
pub trait SessionStore: Send + Sync {
    /// Create a session moderated by `moderator` with the given card labels.
    ///
    /// # Errors
    ///
    /// - `InvalidDeck` if fewer than two usable labels remain after filtering
    fn create(
        &self,
        moderator: Participant,
        cards: &[String],
    ) -> Result<Arc<SessionEntry>, PokerError>;

    /// Add a participant to an existing session.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session does not exist
    fn join(
        &self,
        id: &SessionId,
        participant: Participant,
    ) -> Result<Arc<SessionEntry>, PokerError>;

    /// Look up a session, refreshing its last activity.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session does not exist
    fn get(&self, id: &SessionId) -> Result<Arc<SessionEntry>, PokerError>;

    /// Remove a session on behalf of its moderator.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session does not exist
    /// - `NotAuthorized` if `requester` is not the moderator
    fn delete(&self, id: &SessionId, requester: &ParticipantId) -> Result<(), PokerError>;

    /// Evict every session idle for longer than `max_lifetime` at `now`.
    ///
    /// Sessions locked by an in-flight operation are kept. Returns the
    /// number of evicted sessions.
    fn sweep(&self, now: Timestamp, max_lifetime: Duration) -> usize;

    /// Number of live sessions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
