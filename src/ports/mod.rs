//! Ports - Interfaces between the domain and the outside world.
//!
//! Following hexagonal architecture, ports define the contracts that
//! adapters implement.
//!
//! - `SessionStore` - Registry of live poker sessions

mod session_store;

pub use session_store::SessionStore;
