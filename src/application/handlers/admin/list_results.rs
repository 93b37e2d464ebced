//! ListResultsHandler - the admin's read-only table view.

use std::sync::Arc;

use crate::domain::results::Submission;
use crate::domain::session::SessionError;
use crate::ports::ResultLog;

/// Snapshot of the result log for the admin view.
#[derive(Debug, Clone)]
pub struct ResultsView {
    pub submissions: Vec<Submission>,
}

impl ResultsView {
    /// Whether any respondent has finished yet.
    pub fn has_data(&self) -> bool {
        !self.submissions.is_empty()
    }
}

/// Handler for the admin results listing.
pub struct ListResultsHandler {
    log: Arc<dyn ResultLog>,
}

impl ListResultsHandler {
    pub fn new(log: Arc<dyn ResultLog>) -> Self {
        Self { log }
    }

    pub async fn handle(&self) -> Result<ResultsView, SessionError> {
        let submissions = self.log.all().await?;
        Ok(ResultsView { submissions })
    }
}
