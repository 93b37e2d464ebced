//! Top-level API router composition.

use std::sync::Arc;

use axum::{routing::get, Router};
use secrecy::Secret;
use tower_http::trace::TraceLayer;

use crate::application::handlers::admin::{ExportResultsHandler, ListResultsHandler};
use crate::application::handlers::survey::{
    BeginSessionHandler, GetSessionHandler, RecordAnswerHandler, SubmitSessionHandler,
};
use crate::ports::{ResultLog, SessionStore};

use super::admin::{admin_routes, AdminHandlers};
use super::survey::{survey_routes, SurveyHandlers};

/// Builds the full API router over the given stores.
///
/// The stores are injected, process-scoped state; the router owns no
/// state of its own beyond the wired handlers.
pub fn api_router(
    session_store: Arc<dyn SessionStore>,
    result_log: Arc<dyn ResultLog>,
    admin_secret: Secret<String>,
) -> Router {
    let survey_handlers = SurveyHandlers::new(
        Arc::new(BeginSessionHandler::new(session_store.clone())),
        Arc::new(GetSessionHandler::new(session_store.clone())),
        Arc::new(RecordAnswerHandler::new(session_store.clone())),
        Arc::new(SubmitSessionHandler::new(session_store, result_log.clone())),
    );

    let admin_handlers = AdminHandlers::new(
        Arc::new(ListResultsHandler::new(result_log.clone())),
        Arc::new(ExportResultsHandler::new(result_log)),
        admin_secret,
    );

    Router::new()
        .route("/health", get(health))
        .nest("/api/sessions", survey_routes(survey_handlers))
        .nest("/api/admin", admin_routes(admin_handlers))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}
