//! HTTP handlers for the survey endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::survey::{
    AnswerAt, BeginSessionCommand, BeginSessionHandler, GetSessionHandler, GetSessionQuery,
    RecordAnswerCommand, RecordAnswerHandler, RecordAnswersCommand, SubmitSessionCommand,
    SubmitSessionHandler,
};
use crate::domain::foundation::{SessionId, TestDate};
use crate::domain::session::SessionError;

use super::dto::{
    BeginSessionRequest, ChartResponse, ErrorResponse, RecordAnswersRequest, SessionResponse,
    SubmitRequest, SubmitResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SurveyHandlers {
    begin_handler: Arc<BeginSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    record_handler: Arc<RecordAnswerHandler>,
    submit_handler: Arc<SubmitSessionHandler>,
}

impl SurveyHandlers {
    pub fn new(
        begin_handler: Arc<BeginSessionHandler>,
        get_handler: Arc<GetSessionHandler>,
        record_handler: Arc<RecordAnswerHandler>,
        submit_handler: Arc<SubmitSessionHandler>,
    ) -> Self {
        Self {
            begin_handler,
            get_handler,
            record_handler,
            submit_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Begin a new questionnaire session
pub async fn begin_session(
    State(handlers): State<SurveyHandlers>,
    Json(req): Json<BeginSessionRequest>,
) -> Response {
    let cmd = BeginSessionCommand {
        name: req.name,
        test_date: req.test_date.map(TestDate::from_date),
        email: req.email,
    };

    match handlers.begin_handler.handle(cmd).await {
        Ok(session) => {
            (StatusCode::CREATED, Json(SessionResponse::from(&session))).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions/:id - Re-read a session (same cached item order)
pub async fn get_session(
    State(handlers): State<SurveyHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// PUT /api/sessions/:id/answers - Record or correct answers, singly or in batch
pub async fn record_answer(
    State(handlers): State<SurveyHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<RecordAnswersRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let result = match req {
        RecordAnswersRequest::One(entry) => {
            handlers
                .record_handler
                .handle(RecordAnswerCommand {
                    session_id,
                    position: entry.position,
                    answer: entry.answer,
                })
                .await
        }
        RecordAnswersRequest::Many { answers } => {
            handlers
                .record_handler
                .handle_batch(RecordAnswersCommand {
                    session_id,
                    answers: answers
                        .into_iter()
                        .map(|entry| AnswerAt {
                            position: entry.position,
                            answer: entry.answer,
                        })
                        .collect(),
                })
                .await
        }
    };

    match result {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/sessions/:id/submit - Score, classify, and log the result
pub async fn submit_session(
    State(handlers): State<SurveyHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitSessionCommand {
        session_id,
        name: req.name,
        test_date: req.test_date.map(TestDate::from_date),
        email: req.email,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let scores = result.submission.scores();
            let response = SubmitResponse {
                rational_score: scores.rational,
                intuitive_score: scores.intuitive,
                dominant_style: result.submission.dominant_style(),
                chart: ChartResponse::from_scores(scores),
                narrative: result.narrative.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("BAD_REQUEST", "Invalid session ID")),
        )
            .into_response()
    })
}

fn handle_session_error(error: SessionError) -> Response {
    match error {
        SessionError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "SESSION_NOT_FOUND",
                format!("Session not found: {}", id),
            )),
        )
            .into_response(),
        SessionError::NameRequired => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new("NAME_REQUIRED", "Please fill in your name")),
        )
            .into_response(),
        SessionError::Incomplete { missing } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(
                ErrorResponse::new(
                    "INCOMPLETE",
                    format!("{} item(s) still unanswered", missing.len()),
                )
                .with_missing(missing),
            ),
        )
            .into_response(),
        SessionError::PositionOutOfRange { .. } | SessionError::AlreadySubmitted => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("BAD_REQUEST", error.to_string())),
        )
            .into_response(),
        SessionError::Infrastructure(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("INTERNAL_ERROR", msg)),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_session_error(SessionError::NotFound(SessionId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn name_required_maps_to_422() {
        let response = handle_session_error(SessionError::NameRequired);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn incomplete_maps_to_422() {
        let response = handle_session_error(SessionError::Incomplete {
            missing: vec![1, 2],
        });
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn already_submitted_maps_to_400() {
        let response = handle_session_error(SessionError::AlreadySubmitted);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_session_error(SessionError::infrastructure("store down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
