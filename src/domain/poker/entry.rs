//! Shared, lock-guarded session state.

use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};
use std::time::Duration;

use super::{Deck, Participant, PokerError, RoundStatus, VotingRound};
use crate::domain::foundation::{ParticipantId, SessionId, Timestamp};

/// A live session: immutable identity plus a mutex-guarded voting round.
///
/// Every operation that reads or mutates the round also refreshes the
/// last-activity stamp under the same lock, so the sweeper observes a
/// consistent pair.
#[derive(Debug)]
pub struct SessionEntry {
    id: SessionId,
    deck: Deck,
    moderator: Participant,
    state: Mutex<EntryState>,
}

#[derive(Debug)]
pub(crate) struct EntryState {
    round: VotingRound,
    last_activity: Timestamp,
}

impl SessionEntry {
    pub fn new(id: SessionId, moderator: Participant, deck: Deck) -> Self {
        Self {
            id,
            deck,
            moderator: moderator.clone(),
            state: Mutex::new(EntryState {
                round: VotingRound::new(moderator),
                last_activity: Timestamp::now(),
            }),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Immutable identity
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn moderator(&self) -> &Participant {
        &self.moderator
    }

    pub fn is_moderator(&self, token: &ParticipantId) -> bool {
        self.moderator.id().matches(token)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Round operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Refreshes the last-activity stamp.
    pub fn touch(&self) {
        self.with_round(|_| ());
    }

    pub fn last_activity(&self) -> Timestamp {
        self.lock().last_activity
    }

    pub fn join(&self, participant: Participant) {
        self.with_round(|round| round.join(participant));
    }

    /// Resolves a presented token to the roster member holding it.
    pub fn participant(&self, token: &ParticipantId) -> Result<Participant, PokerError> {
        self.with_round(|round| round.member(token).cloned())
            .ok_or(PokerError::UnknownParticipant)
    }

    pub fn roster(&self) -> Vec<Participant> {
        self.with_round(|round| round.roster().to_vec())
    }

    pub fn is_revealed(&self) -> bool {
        self.with_round(|round| round.is_revealed())
    }

    pub fn recorded_votes(&self) -> usize {
        self.with_round(|round| round.recorded_votes())
    }

    pub fn vote(&self, voter: &ParticipantId, label: &str) -> Result<(), PokerError> {
        self.with_round(|round| round.vote(&self.deck, voter, label))
    }

    pub fn reveal(&self, requester: &ParticipantId, show: bool) -> Result<(), PokerError> {
        self.with_round(|round| round.reveal(requester, show))
    }

    pub fn reset(&self) {
        self.with_round(VotingRound::reset);
    }

    pub fn status(&self, requester: &ParticipantId) -> RoundStatus {
        self.with_round(|round| round.status(&self.deck, requester))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Eviction
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks idleness without waiting for the lock.
    ///
    /// Returns `None` while another operation holds the entry, otherwise
    /// whether the entry has been idle longer than `max_lifetime` at `now`.
    pub fn try_expired(&self, now: Timestamp, max_lifetime: Duration) -> Option<bool> {
        let state = match self.state.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return None,
        };
        Some(now.elapsed_since(&state.last_activity) > max_lifetime)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lock helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn with_round<R>(&self, f: impl FnOnce(&mut VotingRound) -> R) -> R {
        let mut state = self.lock();
        state.last_activity = Timestamp::now();
        f(&mut state.round)
    }

    // Round transitions never leave the state half-updated, so a poisoned
    // lock still guards consistent data.
    pub(crate) fn lock(&self) -> MutexGuard<'_, EntryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
