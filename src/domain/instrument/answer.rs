//! The five-point Likert answer scale.
//!
//! The integer mapping (STS=1 through SS=5) is the scoring contract and
//! must stay exact; everything downstream sums these values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One answer on the five-point agreement scale.
///
/// Variants are ordered from strong disagreement to strong agreement.
/// The wire codes (`STS`..`SS`) are the instrument's original scale codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Answer {
    /// Strongly disagree (1).
    #[serde(rename = "STS")]
    StronglyDisagree,
    /// Disagree (2).
    #[serde(rename = "TS")]
    Disagree,
    /// Neutral (3).
    #[serde(rename = "N")]
    Neutral,
    /// Agree (4).
    #[serde(rename = "S")]
    Agree,
    /// Strongly agree (5).
    #[serde(rename = "SS")]
    StronglyAgree,
}

impl Answer {
    /// All scale points in ascending order.
    pub const ALL: [Answer; 5] = [
        Answer::StronglyDisagree,
        Answer::Disagree,
        Answer::Neutral,
        Answer::Agree,
        Answer::StronglyAgree,
    ];

    /// The scoring value of this answer.
    pub fn value(&self) -> u8 {
        match self {
            Answer::StronglyDisagree => 1,
            Answer::Disagree => 2,
            Answer::Neutral => 3,
            Answer::Agree => 4,
            Answer::StronglyAgree => 5,
        }
    }

    /// The instrument's short code for this answer.
    pub fn code(&self) -> &'static str {
        match self {
            Answer::StronglyDisagree => "STS",
            Answer::Disagree => "TS",
            Answer::Neutral => "N",
            Answer::Agree => "S",
            Answer::StronglyAgree => "SS",
        }
    }

    /// Long-form label shown in the answer legend.
    pub fn label(&self) -> &'static str {
        match self {
            Answer::StronglyDisagree => "Strongly Disagree",
            Answer::Disagree => "Disagree",
            Answer::Neutral => "Neutral",
            Answer::Agree => "Agree",
            Answer::StronglyAgree => "Strongly Agree",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Answer {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STS" => Ok(Answer::StronglyDisagree),
            "TS" => Ok(Answer::Disagree),
            "N" => Ok(Answer::Neutral),
            "S" => Ok(Answer::Agree),
            "SS" => Ok(Answer::StronglyAgree),
            other => Err(ValidationError::invalid_format(
                "answer",
                format!("unknown scale code '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_values_are_exact() {
        assert_eq!(Answer::StronglyDisagree.value(), 1);
        assert_eq!(Answer::Disagree.value(), 2);
        assert_eq!(Answer::Neutral.value(), 3);
        assert_eq!(Answer::Agree.value(), 4);
        assert_eq!(Answer::StronglyAgree.value(), 5);
    }

    #[test]
    fn scale_has_total_ordering() {
        let mut points = Answer::ALL;
        points.reverse();
        points.sort();
        assert_eq!(points, Answer::ALL);
    }

    #[test]
    fn codes_parse_back() {
        for answer in Answer::ALL {
            assert_eq!(answer.code().parse::<Answer>().unwrap(), answer);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!("XX".parse::<Answer>().is_err());
        assert!("sts".parse::<Answer>().is_err());
    }

    #[test]
    fn serde_uses_scale_codes() {
        assert_eq!(
            serde_json::to_string(&Answer::StronglyAgree).unwrap(),
            "\"SS\""
        );
        let parsed: Answer = serde_json::from_str("\"N\"").unwrap();
        assert_eq!(parsed, Answer::Neutral);
    }
}
