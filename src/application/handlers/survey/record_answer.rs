//! RecordAnswerHandler - records answers in a session, singly or in batch.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::instrument::Answer;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionStore;

/// Command to record (or correct) one answer.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub session_id: SessionId,
    /// 1-based position in the session's presentation order.
    pub position: usize,
    pub answer: Answer,
}

/// One position/answer pair of a batch.
#[derive(Debug, Clone, Copy)]
pub struct AnswerAt {
    pub position: usize,
    pub answer: Answer,
}

/// Command to record several answers in one round trip.
#[derive(Debug, Clone)]
pub struct RecordAnswersCommand {
    pub session_id: SessionId,
    pub answers: Vec<AnswerAt>,
}

/// Handler for answer recording.
pub struct RecordAnswerHandler {
    store: Arc<dyn SessionStore>,
}

impl RecordAnswerHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RecordAnswerCommand) -> Result<Session, SessionError> {
        let mut session = self.store.load(&cmd.session_id).await?;
        session.record_answer(cmd.position, cmd.answer)?;
        self.store.save(&session).await?;
        Ok(session)
    }

    /// Records a whole batch in one round trip.
    ///
    /// The batch is atomic: one invalid position rejects the whole
    /// request and persists nothing.
    pub async fn handle_batch(&self, cmd: RecordAnswersCommand) -> Result<Session, SessionError> {
        let mut session = self.store.load(&cmd.session_id).await?;
        for entry in &cmd.answers {
            session.record_answer(entry.position, entry.answer)?;
        }
        self.store.save(&session).await?;
        Ok(session)
    }
}
