//! Submission record - the immutable, finalized outcome of one session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TestDate;
use crate::domain::instrument::{DominantStyle, Scores};

/// A completed, scored questionnaire result.
///
/// Created only by [`Session::finalize`](crate::domain::session::Session);
/// appended to the result log and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    name: String,
    test_date: TestDate,
    email: Option<String>,
    rational_score: u16,
    intuitive_score: u16,
    dominant_style: DominantStyle,
}

impl Submission {
    pub(crate) fn new(
        name: String,
        test_date: TestDate,
        email: Option<String>,
        scores: Scores,
        dominant_style: DominantStyle,
    ) -> Self {
        Self {
            name,
            test_date,
            email,
            rational_score: scores.rational,
            intuitive_score: scores.intuitive,
            dominant_style,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn test_date(&self) -> &TestDate {
        &self.test_date
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn rational_score(&self) -> u16 {
        self.rational_score
    }

    pub fn intuitive_score(&self) -> u16 {
        self.intuitive_score
    }

    pub fn dominant_style(&self) -> DominantStyle {
        self.dominant_style
    }

    /// The two aggregate sums as a [`Scores`] pair.
    pub fn scores(&self) -> Scores {
        Scores {
            rational: self.rational_score,
            intuitive: self.intuitive_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_exposes_scores_pair() {
        let submission = Submission::new(
            "Ana".to_string(),
            TestDate::today(),
            None,
            Scores {
                rational: 35,
                intuitive: 7,
            },
            DominantStyle::Rational,
        );

        assert_eq!(submission.scores().total(), 42);
        assert_eq!(submission.dominant_style(), DominantStyle::Rational);
    }
}
