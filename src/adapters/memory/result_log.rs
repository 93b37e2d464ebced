//! In-memory result log adapter.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::results::Submission;
use crate::domain::session::SessionError;
use crate::ports::ResultLog;

/// Append-only, insertion-ordered log of submissions.
///
/// The write lock serializes appends, so concurrent respondents cannot
/// interleave or lose entries. Lives for the whole process; reset only on
/// restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultLog {
    entries: Arc<RwLock<Vec<Submission>>>,
}

impl InMemoryResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of logged submissions (useful for tests).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl ResultLog for InMemoryResultLog {
    async fn append(&self, submission: Submission) -> Result<(), SessionError> {
        self.entries.write().await.push(submission);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Submission>, SessionError> {
        Ok(self.entries.read().await.clone())
    }

    async fn is_empty(&self) -> Result<bool, SessionError> {
        Ok(self.entries.read().await.is_empty())
    }
}
