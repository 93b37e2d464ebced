//! The fixed 14-item questionnaire bank.
//!
//! Items are defined once at process start and never mutated. The bank
//! carries exactly seven rational and seven intuitive statements; the
//! balance is an instrument invariant that scoring relies on.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of items in the bank.
pub const ITEM_COUNT: usize = 14;

/// Items per trait category.
pub const ITEMS_PER_TRAIT: usize = 7;

/// The dimension a statement measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Rational,
    Intuitive,
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rational => write!(f, "Rational"),
            Self::Intuitive => write!(f, "Intuitive"),
        }
    }
}

/// One questionnaire statement and the trait it measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub text: &'static str,
    pub trait_category: TraitCategory,
}

impl Item {
    const fn new(text: &'static str, trait_category: TraitCategory) -> Self {
        Self {
            text,
            trait_category,
        }
    }
}

static ITEM_BANK: Lazy<[Item; ITEM_COUNT]> = Lazy::new(|| {
    use TraitCategory::{Intuitive, Rational};
    [
        Item::new(
            "I make a list of pros and cons before choosing an option.",
            Rational,
        ),
        Item::new(
            "I check facts or data to back up my decisions.",
            Rational,
        ),
        Item::new(
            "I trust numbers and objective evidence more than hunches.",
            Rational,
        ),
        Item::new(
            "I evaluate each option systematically, one at a time.",
            Rational,
        ),
        Item::new(
            "I often ask, 'What evidence supports this choice?'",
            Rational,
        ),
        Item::new(
            "I use logical, step-by-step reasoning when solving problems.",
            Rational,
        ),
        Item::new(
            "I weigh long-term consequences before deciding.",
            Rational,
        ),
        Item::new(
            "I often feel I 'know' the answer before I can explain why.",
            Intuitive,
        ),
        Item::new(
            "When choosing, I pay attention to how I feel inside (calm versus uneasy).",
            Intuitive,
        ),
        Item::new(
            "I trust my inner voice in uncertain situations.",
            Intuitive,
        ),
        Item::new(
            "Mental images help me find solutions.",
            Intuitive,
        ),
        Item::new(
            "I am comfortable deciding even when information is incomplete.",
            Intuitive,
        ),
        Item::new(
            "Insights often come to me suddenly after I set a problem aside.",
            Intuitive,
        ),
        Item::new(
            "I recognize patterns or meaning in situations without analyzing the details.",
            Intuitive,
        ),
    ]
});

/// Returns the fixed item bank in its canonical order.
pub fn all_items() -> &'static [Item; ITEM_COUNT] {
    &ITEM_BANK
}
