//! Per-trait score aggregation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::answer::Answer;
use super::item::{all_items, TraitCategory, ITEMS_PER_TRAIT};

/// Minimum per-trait sum (seven items answered 1).
pub const MIN_TRAIT_SCORE: u16 = ITEMS_PER_TRAIT as u16;

/// Maximum per-trait sum (seven items answered 5).
pub const MAX_TRAIT_SCORE: u16 = ITEMS_PER_TRAIT as u16 * 5;

/// The two aggregate sums of a fully-answered questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub rational: u16,
    pub intuitive: u16,
}

impl Scores {
    /// Sum over all fourteen answers, regardless of trait.
    pub fn total(&self) -> u16 {
        self.rational + self.intuitive
    }
}

/// Sums answer values per trait category.
///
/// `item_order` holds bank indexes in presentation order; `answers` maps
/// each of those indexes to the recorded answer. Pure and deterministic.
/// The caller guarantees completeness; an index missing from `answers`
/// contributes nothing, which is why the collector rejects incomplete
/// submissions before this runs.
pub fn score(item_order: &[usize], answers: &HashMap<usize, Answer>) -> Scores {
    let bank = all_items();
    let mut rational: u16 = 0;
    let mut intuitive: u16 = 0;

    for index in item_order {
        let Some(answer) = answers.get(index) else {
            continue;
        };
        match bank[*index].trait_category {
            TraitCategory::Rational => rational += u16::from(answer.value()),
            TraitCategory::Intuitive => intuitive += u16::from(answer.value()),
        }
    }

    Scores { rational, intuitive }
}
