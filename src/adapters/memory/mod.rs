//! In-memory port implementations.
//!
//! The production configuration for this service: state is process-scoped
//! by design and owes nothing across restarts.

mod result_log;
mod session_store;

pub use result_log::InMemoryResultLog;
pub use session_store::InMemorySessionStore;
