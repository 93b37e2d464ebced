//! Test-date value object.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar date of a questionnaire attempt.
///
/// Defaults to "today" (UTC) when the respondent does not pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestDate(NaiveDate);

impl TestDate {
    /// Creates a test date for today (UTC).
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Creates a test date from an explicit calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the inner date.
    pub fn as_date(&self) -> &NaiveDate {
        &self.0
    }
}

impl Default for TestDate {
    fn default() -> Self {
        Self::today()
    }
}

impl fmt::Display for TestDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // ISO 8601, the format the export table uses
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
