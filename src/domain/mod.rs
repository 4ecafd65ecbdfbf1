//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, error codes)
//! - `poker` - Decks, participants, the voting round and shared session entries

pub mod foundation;
pub mod poker;
