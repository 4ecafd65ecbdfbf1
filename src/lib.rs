//! Scrum Poker - Planning poker sessions with a moderated vote reveal
//!
//! Sessions live in memory only. A moderator creates a session with a deck
//! of cards, participants join and vote, and the moderator decides when the
//! votes are shown. Idle sessions are swept after a configurable lifetime.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
