//! Session command and query handlers.

mod authorize;
mod create_session;
mod delete_session;
mod join_session;

pub use authorize::{AuthorizeHandler, AuthorizeQuery, Authorized};
pub use create_session::{CreateSessionCommand, CreateSessionHandler, CreateSessionResult};
pub use delete_session::DeleteSessionHandler;
pub use join_session::{JoinSessionCommand, JoinSessionHandler, JoinSessionResult};
