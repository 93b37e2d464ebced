//! Session aggregate and its errors.

mod aggregate;
mod errors;

pub use aggregate::{Session, SessionStatus};
pub use errors::SessionError;
