//! HTTP handlers for the admin endpoints.
//!
//! Every endpoint here sits behind the shared-secret gate. The secret
//! travels in the `x-admin-secret` header; a missing header is "not yet
//! attempted" (401), a wrong one is an explicit denial (403).

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use secrecy::Secret;

use crate::application::handlers::admin::{
    verify_secret, AdminError, ExportResultsHandler, ListResultsHandler,
};
use crate::domain::session::SessionError;

use super::super::survey::dto::ErrorResponse;
use super::dto::ResultsResponse;

/// Header carrying the admin shared secret.
pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AdminHandlers {
    list_handler: Arc<ListResultsHandler>,
    export_handler: Arc<ExportResultsHandler>,
    secret: Secret<String>,
}

impl AdminHandlers {
    pub fn new(
        list_handler: Arc<ListResultsHandler>,
        export_handler: Arc<ExportResultsHandler>,
        secret: Secret<String>,
    ) -> Self {
        Self {
            list_handler,
            export_handler,
            secret,
        }
    }

    fn authorize(&self, headers: &HeaderMap) -> Result<(), Response> {
        let provided = headers
            .get(ADMIN_SECRET_HEADER)
            .and_then(|v| v.to_str().ok());
        verify_secret(&self.secret, provided).map_err(handle_admin_error)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/admin/results - Read-only results table
pub async fn list_results(
    State(handlers): State<AdminHandlers>,
    headers: HeaderMap,
) -> Response {
    if let Err(denied) = handlers.authorize(&headers) {
        return denied;
    }

    match handlers.list_handler.handle().await {
        Ok(view) => (StatusCode::OK, Json(ResultsResponse::from(view))).into_response(),
        Err(e) => handle_log_error(e),
    }
}

/// GET /api/admin/export - Download the result log as CSV
pub async fn export_results(
    State(handlers): State<AdminHandlers>,
    headers: HeaderMap,
) -> Response {
    if let Err(denied) = handlers.authorize(&headers) {
        return denied;
    }

    match handlers.export_handler.handle().await {
        Ok(export) => {
            let disposition = format!("attachment; filename=\"{}\"", export.file_name);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                export.content,
            )
                .into_response()
        }
        Err(e) => handle_log_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_admin_error(error: AdminError) -> Response {
    match error {
        AdminError::SecretRequired => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("SECRET_REQUIRED", error.to_string())),
        )
            .into_response(),
        AdminError::SecretInvalid => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new("SECRET_INVALID", error.to_string())),
        )
            .into_response(),
    }
}

fn handle_log_error(error: SessionError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("INTERNAL_ERROR", error.to_string())),
    )
        .into_response()
}
