//! HTTP routes for the survey endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{begin_session, get_session, record_answer, submit_session, SurveyHandlers};

/// Creates the survey router with all respondent-facing endpoints.
pub fn survey_routes(handlers: SurveyHandlers) -> Router {
    Router::new()
        .route("/", post(begin_session))
        .route("/:id", get(get_session))
        .route("/:id/answers", put(record_answer))
        .route("/:id/submit", post(submit_session))
        .with_state(handlers)
}
