//! Poker domain module.
//!
//! A session is a [`SessionEntry`]: a fixed [`Deck`], a moderator and a
//! [`VotingRound`] behind a mutex. Participants vote with cards from the
//! deck; the moderator reveals or hides the votes; any member may reset the
//! round.

mod deck;
mod entry;
mod errors;
mod participant;
mod round;

pub use deck::{card_value, Deck, MIN_CARDS, RESERVED_LABELS};
pub use entry::SessionEntry;
pub use errors::PokerError;
pub use participant::Participant;
pub use round::{ParticipantVote, RoundStatus, VotingRound};
