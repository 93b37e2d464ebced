//! BeginSessionHandler - starts a fresh questionnaire session.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, TestDate};
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionStore;

/// Command to begin a new session.
#[derive(Debug, Clone, Default)]
pub struct BeginSessionCommand {
    /// Respondent name; a non-empty name makes the shuffle reproducible.
    pub name: Option<String>,
    pub test_date: Option<TestDate>,
    pub email: Option<String>,
}

/// Handler for beginning sessions.
pub struct BeginSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl BeginSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: BeginSessionCommand) -> Result<Session, SessionError> {
        let name = cmd.name.unwrap_or_default();
        let mut session = Session::begin(SessionId::new(), &name, cmd.test_date);

        if let Some(email) = &cmd.email {
            session.update_identity(None, None, Some(email))?;
        }

        self.store.save(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            named = !session.respondent_name().is_empty(),
            "questionnaire session begun"
        );

        Ok(session)
    }
}
