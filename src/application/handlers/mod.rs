//! Application command and query handlers.

pub mod admin;
pub mod survey;
