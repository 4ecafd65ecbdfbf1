//! Session store adapters.
//!
//! ## Available Adapters
//!
//! - `InMemorySessionStore` - process-local store; sessions are lost on restart

mod in_memory;

pub use in_memory::InMemorySessionStore;
