//! Session aggregate - one respondent's in-progress questionnaire attempt.
//!
//! The item order is materialized exactly once, when the session begins.
//! Editing the respondent's name afterwards never reshuffles; only
//! beginning a brand-new session produces a new order.
//!
//! # Invariants
//!
//! - `item_order` is a permutation of the 14 bank indexes, fixed for the
//!   session's lifetime
//! - `answers` only ever holds bank indexes present in `item_order`
//! - a submitted session accepts no further mutation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, TestDate};
use crate::domain::instrument::{
    classify, entropy_order, score, seed_from_name, shuffled_order, Answer, ITEM_COUNT,
};
use crate::domain::results::Submission;

use super::errors::SessionError;

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Submitted,
}

/// One respondent's attempt at the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    respondent_name: String,
    test_date: TestDate,
    email: Option<String>,
    /// Bank indexes in presentation order. Fixed once generated.
    item_order: Vec<usize>,
    /// Recorded answers, keyed by bank index. Absence means unanswered.
    answers: HashMap<usize, Answer>,
    status: SessionStatus,
}

impl Session {
    /// Begins a new session.
    ///
    /// A non-empty trimmed name seeds a deterministic shuffle so the same
    /// respondent always sees the same order; otherwise the order comes
    /// from entropy.
    pub fn begin(id: SessionId, respondent_name: &str, test_date: Option<TestDate>) -> Self {
        let item_order = match seed_from_name(respondent_name) {
            Some(seed) => shuffled_order(seed),
            None => entropy_order(),
        };

        Self {
            id,
            respondent_name: respondent_name.trim().to_string(),
            test_date: test_date.unwrap_or_default(),
            email: None,
            item_order,
            answers: HashMap::new(),
            status: SessionStatus::InProgress,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn respondent_name(&self) -> &str {
        &self.respondent_name
    }

    pub fn test_date(&self) -> &TestDate {
        &self.test_date
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Bank indexes in presentation order.
    pub fn item_order(&self) -> &[usize] {
        &self.item_order
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The recorded answer at a 1-based presentation position, if any.
    pub fn answer_at(&self, position: usize) -> Option<Answer> {
        let bank_index = self.bank_index(position).ok()?;
        self.answers.get(&bank_index).copied()
    }

    /// Count of answered items.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// 1-based presentation positions still unanswered, ascending.
    pub fn missing_positions(&self) -> Vec<usize> {
        self.item_order
            .iter()
            .enumerate()
            .filter(|(_, bank_index)| !self.answers.contains_key(bank_index))
            .map(|(i, _)| i + 1)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == ITEM_COUNT
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Updates respondent identity fields. Never reshuffles.
    pub fn update_identity(
        &mut self,
        name: Option<&str>,
        test_date: Option<TestDate>,
        email: Option<&str>,
    ) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        if let Some(name) = name {
            self.respondent_name = name.trim().to_string();
        }
        if let Some(date) = test_date {
            self.test_date = date;
        }
        if let Some(email) = email {
            let trimmed = email.trim();
            self.email = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
        Ok(())
    }

    /// Records an answer at a 1-based presentation position.
    ///
    /// Re-answering a position overwrites the previous choice; that is a
    /// correction, not a new answer.
    pub fn record_answer(&mut self, position: usize, answer: Answer) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        let bank_index = self.bank_index(position)?;
        self.answers.insert(bank_index, answer);
        Ok(())
    }

    /// Finalizes the session into an immutable [`Submission`].
    ///
    /// Rejects when the trimmed name is empty or any item is unanswered;
    /// a missing answer is never scored as a default scale value. On
    /// success the session transitions to `Submitted` and accepts no
    /// further mutation.
    pub fn finalize(&mut self) -> Result<Submission, SessionError> {
        self.ensure_in_progress()?;

        if self.respondent_name.trim().is_empty() {
            return Err(SessionError::NameRequired);
        }

        let missing = self.missing_positions();
        if !missing.is_empty() {
            return Err(SessionError::Incomplete { missing });
        }

        let scores = score(&self.item_order, &self.answers);
        let style = classify(scores);

        self.status = SessionStatus::Submitted;

        Ok(Submission::new(
            self.respondent_name.clone(),
            self.test_date,
            self.email.clone(),
            scores,
            style,
        ))
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        match self.status {
            SessionStatus::InProgress => Ok(()),
            SessionStatus::Submitted => Err(SessionError::AlreadySubmitted),
        }
    }

    fn bank_index(&self, position: usize) -> Result<usize, SessionError> {
        if position == 0 || position > self.item_order.len() {
            return Err(SessionError::PositionOutOfRange {
                position,
                count: self.item_order.len(),
            });
        }
        Ok(self.item_order[position - 1])
    }
}
