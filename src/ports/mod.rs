//! Ports - async traits the application layer depends on.

mod result_log;
mod session_store;

pub use result_log::ResultLog;
pub use session_store::SessionStore;
