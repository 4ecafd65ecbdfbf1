//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error vocabulary shared by the
//! poker domain and its adapters.

mod errors;
mod ids;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ParticipantId, SessionId};
pub use timestamp::Timestamp;
