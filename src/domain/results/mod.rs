//! Finalized submission records.

mod submission;

pub use submission::Submission;
