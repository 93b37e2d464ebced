//! HTTP adapters - REST API implementations.
//!
//! Two route groups: the respondent-facing survey surface and the
//! secret-gated admin surface.

pub mod admin;
mod router;
pub mod survey;

pub use admin::{admin_routes, AdminHandlers, ADMIN_SECRET_HEADER};
pub use router::api_router;
pub use survey::{survey_routes, SurveyHandlers};
