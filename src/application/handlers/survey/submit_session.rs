//! SubmitSessionHandler - finalizes a session into a logged submission.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, TestDate};
use crate::domain::instrument::{narrative, NarrativeText};
use crate::domain::results::Submission;
use crate::domain::session::SessionError;
use crate::ports::{ResultLog, SessionStore};

/// Command to submit a completed questionnaire.
///
/// Identity fields travel with the submit, mirroring a form that posts
/// its text inputs alongside the confirm action. `None` leaves the
/// session's current value untouched.
#[derive(Debug, Clone)]
pub struct SubmitSessionCommand {
    pub session_id: SessionId,
    pub name: Option<String>,
    pub test_date: Option<TestDate>,
    pub email: Option<String>,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitSessionResult {
    pub submission: Submission,
    pub narrative: &'static NarrativeText,
}

/// Handler for session submission.
pub struct SubmitSessionHandler {
    store: Arc<dyn SessionStore>,
    log: Arc<dyn ResultLog>,
}

impl SubmitSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, log: Arc<dyn ResultLog>) -> Self {
        Self { store, log }
    }

    /// Validates, scores, classifies, and appends to the result log.
    ///
    /// A rejected submission leaves both the session and the log exactly
    /// as they were; the respondent corrects the input and retries.
    pub async fn handle(
        &self,
        cmd: SubmitSessionCommand,
    ) -> Result<SubmitSessionResult, SessionError> {
        let mut session = self.store.load(&cmd.session_id).await?;

        session.update_identity(cmd.name.as_deref(), cmd.test_date, cmd.email.as_deref())?;
        let submission = session.finalize()?;

        // Finalize succeeded: persist the submitted state, then append.
        self.store.save(&session).await?;
        self.log.append(submission.clone()).await?;

        tracing::info!(
            session_id = %cmd.session_id,
            dominant_style = %submission.dominant_style(),
            rational = submission.rational_score(),
            intuitive = submission.intuitive_score(),
            "submission recorded"
        );

        Ok(SubmitSessionResult {
            narrative: narrative(submission.dominant_style()),
            submission,
        })
    }
}
