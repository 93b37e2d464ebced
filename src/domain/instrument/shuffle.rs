//! Per-session item ordering.
//!
//! A named respondent always sees the same order: the seed is derived
//! from the trimmed name, so a re-taken test stays comparable. This is a
//! reproducibility property, not a security control. Anonymous sessions
//! get an entropy seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use sha2::{Digest, Sha256};

use super::item::ITEM_COUNT;

/// Derives a deterministic shuffle seed from a respondent name.
///
/// Returns `None` for empty or whitespace-only names; those sessions
/// shuffle from entropy instead.
pub fn seed_from_name(name: &str) -> Option<u64> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    let digest = Sha256::digest(trimmed.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    Some(u64::from_le_bytes(bytes))
}

/// Produces a permutation of the 14 item indexes from a seed.
pub fn shuffled_order(seed: u64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..ITEM_COUNT).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);
    order
}

/// Produces a permutation from process entropy, for anonymous sessions.
pub fn entropy_order() -> Vec<usize> {
    shuffled_order(rand::thread_rng().next_u64())
}
