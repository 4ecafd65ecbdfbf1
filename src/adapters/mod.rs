//! Adapters - Implementations of port interfaces and outer surfaces.
//!
//! - `store` - In-memory session store
//! - `sweeper` - Background eviction of idle sessions
//! - `http` - axum router over the application handlers

pub mod http;
pub mod store;
pub mod sweeper;

pub use http::{app_router, SessionHandlers};
pub use store::InMemorySessionStore;
pub use sweeper::{SessionSweeper, SweeperConfig};
