//! HTTP DTOs for the respondent-facing survey endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::instrument::{
    all_items, Answer, DominantStyle, NarrativeText, Scores,
};
use crate::domain::session::{Session, SessionStatus};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to begin a new session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BeginSessionRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub test_date: Option<NaiveDate>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Request to record one answer.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordAnswerRequest {
    /// 1-based position in the presented order.
    pub position: usize,
    /// Scale code: STS, TS, N, S, or SS.
    pub answer: Answer,
}

/// Body of the answers endpoint: one answer, or a batch of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordAnswersRequest {
    One(RecordAnswerRequest),
    Many { answers: Vec<RecordAnswerRequest> },
}

/// Request to submit the questionnaire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub test_date: Option<NaiveDate>,
    #[serde(default)]
    pub email: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One item as presented to the respondent.
///
/// Trait categories are deliberately not exposed here; the respondent
/// should not see which dimension a statement measures.
#[derive(Debug, Clone, Serialize)]
pub struct PresentedItem {
    pub position: usize,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<Answer>,
}

/// One entry of the answer-scale legend.
#[derive(Debug, Clone, Serialize)]
pub struct ScaleOption {
    pub code: &'static str,
    pub label: &'static str,
    pub value: u8,
}

/// A session's current state, in presentation order.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub name: String,
    pub test_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub status: SessionStatus,
    pub items: Vec<PresentedItem>,
    pub scale: Vec<ScaleOption>,
    pub answered_count: usize,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        let bank = all_items();
        let items = session
            .item_order()
            .iter()
            .enumerate()
            .map(|(i, bank_index)| PresentedItem {
                position: i + 1,
                text: bank[*bank_index].text,
                answer: session.answer_at(i + 1),
            })
            .collect();

        let scale = Answer::ALL
            .iter()
            .map(|a| ScaleOption {
                code: a.code(),
                label: a.label(),
                value: a.value(),
            })
            .collect();

        Self {
            session_id: session.id().to_string(),
            name: session.respondent_name().to_string(),
            test_date: session.test_date().to_string(),
            email: session.email().map(String::from),
            status: session.status(),
            items,
            scale,
            answered_count: session.answered_count(),
        }
    }
}

/// One bar of the score comparison chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: u16,
    pub color: &'static str,
}

/// Bar-chart payload comparing the two trait scores.
#[derive(Debug, Clone, Serialize)]
pub struct ChartResponse {
    pub title: &'static str,
    pub bars: [ChartBar; 2],
}

impl ChartResponse {
    pub fn from_scores(scores: Scores) -> Self {
        Self {
            title: "Decision-Making Style Comparison",
            bars: [
                ChartBar {
                    label: "Rational",
                    value: scores.rational,
                    color: "#2E7D32",
                },
                ChartBar {
                    label: "Intuitive",
                    value: scores.intuitive,
                    color: "#D32F2F",
                },
            ],
        }
    }
}

/// The narrative block of a result.
#[derive(Debug, Clone, Serialize)]
pub struct NarrativeResponse {
    pub headline: &'static str,
    pub profile: Vec<&'static str>,
    pub strengths: &'static str,
    pub challenges: &'static str,
    pub advice: &'static str,
}

impl From<&'static NarrativeText> for NarrativeResponse {
    fn from(text: &'static NarrativeText) -> Self {
        Self {
            headline: text.headline,
            profile: text.profile.to_vec(),
            strengths: text.strengths,
            challenges: text.challenges,
            advice: text.advice,
        }
    }
}

/// Everything shown to the respondent after a successful submit.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub rational_score: u16,
    pub intuitive_score: u16,
    pub dominant_style: DominantStyle,
    pub chart: ChartResponse,
    pub narrative: NarrativeResponse,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_positions: Option<Vec<usize>>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            missing_positions: None,
        }
    }

    pub fn with_missing(mut self, missing: Vec<usize>) -> Self {
        self.missing_positions = Some(missing);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::domain::instrument::ITEM_COUNT;

    #[test]
    fn begin_request_fields_are_all_optional() {
        let req: BeginSessionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
        assert!(req.test_date.is_none());
        assert!(req.email.is_none());
    }

    #[test]
    fn record_answer_request_parses_scale_codes() {
        let req: RecordAnswerRequest =
            serde_json::from_str(r#"{"position": 3, "answer": "SS"}"#).unwrap();
        assert_eq!(req.position, 3);
        assert_eq!(req.answer, Answer::StronglyAgree);
    }

    #[test]
    fn answers_body_accepts_single_and_batch_shapes() {
        let one: RecordAnswersRequest =
            serde_json::from_str(r#"{"position": 1, "answer": "N"}"#).unwrap();
        assert!(matches!(one, RecordAnswersRequest::One(_)));

        let many: RecordAnswersRequest = serde_json::from_str(
            r#"{"answers": [{"position": 1, "answer": "N"}, {"position": 2, "answer": "S"}]}"#,
        )
        .unwrap();
        match many {
            RecordAnswersRequest::Many { answers } => assert_eq!(answers.len(), 2),
            other => panic!("expected batch shape, got {other:?}"),
        }
    }

    #[test]
    fn session_response_presents_every_item_with_positions() {
        let session = Session::begin(SessionId::new(), "Ana", None);
        let response = SessionResponse::from(&session);

        assert_eq!(response.items.len(), ITEM_COUNT);
        assert_eq!(response.items[0].position, 1);
        assert_eq!(response.items[ITEM_COUNT - 1].position, ITEM_COUNT);
        assert_eq!(response.scale.len(), 5);
        assert_eq!(response.answered_count, 0);
    }

    #[test]
    fn chart_carries_both_labeled_bars() {
        let chart = ChartResponse::from_scores(Scores {
            rational: 35,
            intuitive: 7,
        });
        assert_eq!(chart.bars[0].label, "Rational");
        assert_eq!(chart.bars[0].value, 35);
        assert_eq!(chart.bars[1].label, "Intuitive");
        assert_eq!(chart.bars[1].value, 7);
    }

    #[test]
    fn error_response_serializes_missing_positions_only_when_set() {
        let plain = serde_json::to_value(ErrorResponse::new("BAD_REQUEST", "nope")).unwrap();
        assert!(plain.get("missing_positions").is_none());

        let with = serde_json::to_value(
            ErrorResponse::new("INCOMPLETE", "unanswered").with_missing(vec![2, 5]),
        )
        .unwrap();
        assert_eq!(with["missing_positions"][0], 2);
    }
}
