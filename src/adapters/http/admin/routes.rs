//! HTTP routes for the admin endpoints.

use axum::{routing::get, Router};

use super::handlers::{export_results, list_results, AdminHandlers};

/// Creates the admin router with the results view and CSV export.
pub fn admin_routes(handlers: AdminHandlers) -> Router {
    Router::new()
        .route("/results", get(list_results))
        .route("/export", get(export_results))
        .with_state(handlers)
}
