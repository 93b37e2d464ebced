//! HTTP DTOs for the admin endpoints.

use serde::Serialize;

use crate::application::handlers::admin::ResultsView;
use crate::domain::instrument::DominantStyle;
use crate::domain::results::Submission;

/// One row of the admin results table.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub name: String,
    pub test_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub rational_score: u16,
    pub intuitive_score: u16,
    pub dominant_style: DominantStyle,
}

impl From<&Submission> for ResultRow {
    fn from(submission: &Submission) -> Self {
        Self {
            name: submission.name().to_string(),
            test_date: submission.test_date().to_string(),
            email: submission.email().map(String::from),
            rational_score: submission.rational_score(),
            intuitive_score: submission.intuitive_score(),
            dominant_style: submission.dominant_style(),
        }
    }
}

/// The admin's read-only results view.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    pub rows: Vec<ResultRow>,
    pub total: usize,
    /// False while no respondent has finished yet ("no data" panel).
    pub has_data: bool,
}

impl From<ResultsView> for ResultsResponse {
    fn from(view: ResultsView) -> Self {
        let rows: Vec<ResultRow> = view.submissions.iter().map(Into::into).collect();
        Self {
            total: rows.len(),
            has_data: view.has_data(),
            rows,
        }
    }
}
