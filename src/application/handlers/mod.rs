//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod round;
pub mod session;

pub use round::{
    cast_vote, get_status, reset_votes, set_reveal, view_session, CastVoteCommand,
    SessionView, SetRevealCommand, STATUS_POLL_INTERVAL_MS,
};
pub use session::{
    AuthorizeHandler, AuthorizeQuery, Authorized, CreateSessionCommand, CreateSessionHandler,
    CreateSessionResult, DeleteSessionHandler, JoinSessionCommand, JoinSessionHandler,
    JoinSessionResult,
};
