//! Respondent-facing HTTP surface.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::SurveyHandlers;
pub use routes::survey_routes;
