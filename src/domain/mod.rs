//! Domain layer: pure questionnaire types and logic.

pub mod foundation;
pub mod instrument;
pub mod results;
pub mod session;
