//! The questionnaire instrument: item bank, answer scale, shuffling,
//! scoring, classification, and the narrative interpretations.

mod answer;
mod classifier;
mod item;
mod narrative;
mod scorer;
mod shuffle;

pub use answer::Answer;
pub use classifier::{classify, DominantStyle};
pub use item::{all_items, Item, TraitCategory, ITEMS_PER_TRAIT, ITEM_COUNT};
pub use narrative::{narrative, NarrativeText};
pub use scorer::{score, Scores, MAX_TRAIT_SCORE, MIN_TRAIT_SCORE};
pub use shuffle::{entropy_order, seed_from_name, shuffled_order};
