//! Result log port.
//!
//! The one process-wide shared resource: an ordered, append-only sequence
//! of completed submissions. Implementations must serialize appends so
//! concurrent respondents preserve insertion order and lose no updates;
//! reads may observe any valid prefix of past appends.

use async_trait::async_trait;

use crate::domain::results::Submission;
use crate::domain::session::SessionError;

/// Append-only log of completed submissions.
#[async_trait]
pub trait ResultLog: Send + Sync {
    /// Appends a submission to the end of the log.
    async fn append(&self, submission: Submission) -> Result<(), SessionError>;

    /// Returns all submissions in insertion order.
    async fn all(&self) -> Result<Vec<Submission>, SessionError>;

    /// Whether the log holds no submissions yet.
    async fn is_empty(&self) -> Result<bool, SessionError>;
}
