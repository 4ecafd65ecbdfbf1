//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Session lifecycle goes through handlers holding the store; round
//! operations act on an already authorized member.

pub mod handlers;

pub use handlers::{
    AuthorizeHandler, AuthorizeQuery, Authorized, CastVoteCommand, CreateSessionCommand,
    CreateSessionHandler, CreateSessionResult, DeleteSessionHandler, JoinSessionCommand,
    JoinSessionHandler, JoinSessionResult, SessionView, SetRevealCommand,
};
