//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::SessionId;

/// Errors raised while collecting or submitting a questionnaire session.
///
/// Everything except `Infrastructure` is a local, user-correctable
/// validation failure; the respondent can fix the input and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No session exists with the given id.
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// Submission attempted with an empty or whitespace-only name.
    #[error("Respondent name is required before submitting")]
    NameRequired,

    /// Submission attempted before every item was answered.
    ///
    /// `missing` holds the unanswered 1-based presentation positions.
    #[error("{} item(s) still unanswered: {missing:?}", missing.len())]
    Incomplete { missing: Vec<usize> },

    /// An answer targeted a position outside the questionnaire.
    #[error("Item position {position} is out of range (1-{count})")]
    PositionOutOfRange { position: usize, count: usize },

    /// The session was already finalized; a new session must be begun.
    #[error("Session has already been submitted")]
    AlreadySubmitted,

    /// Store failure outside the domain's control.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl SessionError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }
}
