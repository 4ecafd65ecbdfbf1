//! Voting round state machine.
//!
//! A round is either open (`revealed == false`) or revealed. Votes may be
//! cast in both states; only the moderator flips between them. The round
//! knows nothing about locking or timestamps, [`super::SessionEntry`]
//! wraps it for shared use.

use std::collections::HashMap;

use super::deck::card_value;
use super::{Deck, Participant, PokerError};
use crate::domain::foundation::ParticipantId;

/// One row of a status view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantVote {
    pub name: String,
    /// The real vote, or empty when hidden from the requester.
    pub vote: String,
}

/// Status view of a round as seen by one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStatus {
    pub votes: Vec<ParticipantVote>,
    /// Mean of all votes over the full roster, two decimals.
    pub average: Option<String>,
    /// Deck card nearest to the average.
    pub closest: Option<String>,
}

/// Roster, votes and reveal flag of a session.
///
/// # Invariants
///
/// - the moderator is `roster[0]`
/// - every key in `votes` belongs to a roster member
/// - every stored vote is a card of the deck passed to [`VotingRound::vote`]
#[derive(Debug, Clone)]
pub struct VotingRound {
    roster: Vec<Participant>,
    votes: HashMap<ParticipantId, String>,
    revealed: bool,
}

impl VotingRound {
    /// Opens a round with the moderator as sole member.
    pub fn new(moderator: Participant) -> Self {
        Self {
            roster: vec![moderator],
            votes: HashMap::new(),
            revealed: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Finds the member holding `token`.
    pub fn member(&self, token: &ParticipantId) -> Option<&Participant> {
        self.roster.iter().find(|p| p.id().matches(token))
    }

    pub fn is_moderator(&self, token: &ParticipantId) -> bool {
        self.roster
            .first()
            .is_some_and(|moderator| moderator.id().matches(token))
    }

    /// Recorded vote of a member, empty when unset.
    pub fn vote_of(&self, id: &ParticipantId) -> &str {
        self.votes.get(id).map(String::as_str).unwrap_or("")
    }

    /// Number of members with a recorded vote.
    pub fn recorded_votes(&self) -> usize {
        self.votes.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    pub fn join(&mut self, participant: Participant) {
        self.roster.push(participant);
    }

    /// Records `label` as the voter's card. A blank label withdraws the vote.
    ///
    /// # Errors
    ///
    /// - `UnknownParticipant` if the voter is not on the roster
    /// - `InvalidVote` if the label is not a card of `deck`
    pub fn vote(
        &mut self,
        deck: &Deck,
        voter: &ParticipantId,
        label: &str,
    ) -> Result<(), PokerError> {
        let id = *self.member(voter).ok_or(PokerError::UnknownParticipant)?.id();

        let label = label.trim();
        if label.is_empty() {
            self.votes.remove(&id);
            return Ok(());
        }
        if !deck.contains(label) {
            return Err(PokerError::InvalidVote {
                label: label.to_string(),
            });
        }

        self.votes.insert(id, label.to_string());
        Ok(())
    }

    /// Shows or hides all votes.
    ///
    /// # Errors
    ///
    /// - `NotAuthorized` if the requester is not the moderator
    pub fn reveal(&mut self, requester: &ParticipantId, show: bool) -> Result<(), PokerError> {
        if !self.is_moderator(requester) {
            return Err(PokerError::not_authorized("reveal or hide votes"));
        }
        self.revealed = show;
        Ok(())
    }

    /// Clears every vote. The reveal flag is left as it is.
    pub fn reset(&mut self) {
        self.votes.clear();
    }

    /// Builds the status view for `requester`.
    ///
    /// Votes of others stay blank until revealed. For numeric decks a
    /// revealed round also carries the average, where members without a
    /// vote count as zero and the divisor is the full roster size.
    pub fn status(&self, deck: &Deck, requester: &ParticipantId) -> RoundStatus {
        let votes = self
            .roster
            .iter()
            .map(|p| {
                let visible = self.revealed || p.id().matches(requester);
                ParticipantVote {
                    name: p.name().to_string(),
                    vote: if visible {
                        self.vote_of(p.id()).to_string()
                    } else {
                        String::new()
                    },
                }
            })
            .collect();

        let (average, closest) = match self.average(deck) {
            Some(mean) => (
                Some(format!("{:.2}", mean)),
                deck.closest_to(mean).map(str::to_string),
            ),
            None => (None, None),
        };

        RoundStatus {
            votes,
            average,
            closest,
        }
    }

    fn average(&self, deck: &Deck) -> Option<f64> {
        if !deck.is_numeric() || !self.revealed || self.roster.is_empty() {
            return None;
        }
        let sum: f64 = self
            .roster
            .iter()
            .map(|p| card_value(self.vote_of(p.id())).unwrap_or(0.0))
            .sum();
        Some(sum / self.roster.len() as f64)
    }
}
