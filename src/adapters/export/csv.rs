//! CSV serialization of the result log.
//!
//! Six fixed columns, header row first, one row per submission in
//! insertion order, UTF-8. Fields containing commas, quotes, or newlines
//! are quoted RFC-4180 style.

use crate::domain::results::Submission;

/// Default download file name for the export.
pub const EXPORT_FILE_NAME: &str = "decision_style_results.csv";

const HEADER: &str = "Name,TestDate,Email,Rational_Score,Intuitive_Score,Dominant_Style";

/// Serializes submissions into a CSV table with a header row.
pub fn to_csv(submissions: &[Submission]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for submission in submissions {
        out.push_str(&row(submission));
        out.push('\n');
    }
    out
}

fn row(submission: &Submission) -> String {
    [
        escape(submission.name()),
        submission.test_date().to_string(),
        escape(submission.email().unwrap_or("")),
        submission.rational_score().to_string(),
        submission.intuitive_score().to_string(),
        submission.dominant_style().to_string(),
    ]
    .join(",")
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
