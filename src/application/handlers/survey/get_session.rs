//! GetSessionHandler - re-reads a session for form re-rendering.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionStore;

/// Query for one session's current state.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for session reads.
///
/// Re-renders must observe the same cached item order the session began
/// with; this handler only ever returns stored state.
pub struct GetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<Session, SessionError> {
        self.store.load(&query.session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::application::handlers::survey::{BeginSessionCommand, BeginSessionHandler};

    #[tokio::test]
    async fn rereads_return_the_cached_order() {
        let store = Arc::new(InMemorySessionStore::new());
        let begin = BeginSessionHandler::new(store.clone());
        let get = GetSessionHandler::new(store);

        let session = begin.handle(BeginSessionCommand::default()).await.unwrap();

        let first = get
            .handle(GetSessionQuery {
                session_id: *session.id(),
            })
            .await
            .unwrap();
        let second = get
            .handle(GetSessionQuery {
                session_id: *session.id(),
            })
            .await
            .unwrap();

        assert_eq!(first.item_order(), session.item_order());
        assert_eq!(second.item_order(), session.item_order());
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let get = GetSessionHandler::new(store);
        let id = SessionId::new();

        assert_eq!(
            get.handle(GetSessionQuery { session_id: id }).await,
            Err(SessionError::NotFound(id))
        );
    }
}
