//! Admin-facing HTTP surface.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::{AdminHandlers, ADMIN_SECRET_HEADER};
pub use routes::admin_routes;
