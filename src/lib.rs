//! Style Compass - Decision-Style Questionnaire Service
//!
//! This crate implements a self-scored 14-item Likert instrument that
//! classifies a respondent's decision-making style as Rational,
//! Intuitive, or Balanced, with an in-memory result log and an
//! admin-facing CSV export.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
