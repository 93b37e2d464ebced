//! Session store port.
//!
//! Holds in-progress sessions for the request/re-render cycle. Sessions
//! are ephemeral; implementations owe no durability across restarts.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};

/// Store for in-progress questionnaire sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Saves a session, replacing any previous state under the same id.
    async fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Loads a session by id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no session exists with that id
    async fn load(&self, id: &SessionId) -> Result<Session, SessionError>;

    /// Removes a session. Removing an unknown id is not an error.
    async fn remove(&self, id: &SessionId) -> Result<(), SessionError>;
}
