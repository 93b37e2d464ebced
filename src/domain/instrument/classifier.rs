//! Dominant-style classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::scorer::Scores;

/// A respondent's overall decision-making classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantStyle {
    Rational,
    Intuitive,
    Balanced,
}

impl fmt::Display for DominantStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rational => write!(f, "Rational"),
            Self::Intuitive => write!(f, "Intuitive"),
            Self::Balanced => write!(f, "Balanced"),
        }
    }
}

/// Derives the dominant style from the two aggregate sums.
///
/// Equal sums classify as Balanced; that is the tie-breaking rule, not an
/// error case. Total over all score pairs.
pub fn classify(scores: Scores) -> DominantStyle {
    use std::cmp::Ordering;
    match scores.rational.cmp(&scores.intuitive) {
        Ordering::Greater => DominantStyle::Rational,
        Ordering::Less => DominantStyle::Intuitive,
        Ordering::Equal => DominantStyle::Balanced,
    }
}
