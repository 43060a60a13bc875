//! Order-independent position keys.
//!
//! Works like Zobrist hashing in board games: every word id, phrase id, and
//! side maps to a fixed 64-bit constant, and a position's hash is the XOR of
//! the constants for its last word, its used-phrase set, and the side to
//! move. XOR is commutative, so two move orders reaching the same set hash
//! identically, and make/unmake can maintain the hash incrementally.
//!
//! Constants are derived on demand from the id through a splitmix64-style
//! finalizer with a fixed per-domain seed. This keeps the per-id-constant
//! contract of a lazily-populated random table without any shared mutable
//! state.
//!
//! The 64-bit hash alone is not trusted for exactness: [`PositionKey`]
//! carries the full sorted phrase set and compares structurally, so both the
//! transposition table and the forced-win memo are collision free. The hash
//! only accelerates the `HashMap` lookup.

use std::hash::{Hash, Hasher};

use crate::types::{PhraseId, Side, WordId};

const WORD_SEED: u64 = 0x9e37_79b9_7f4a_7c15;
const PHRASE_SEED: u64 = 0xc2b2_ae3d_27d4_eb4f;
const SIDE_SEED: u64 = 0xd6e8_feb8_6659_fd93;

fn mix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^= x >> 31;
    x
}

pub fn word_key(word: WordId) -> u64 {
    mix(WORD_SEED ^ u64::from(word.0))
}

pub fn phrase_key(phrase: PhraseId) -> u64 {
    mix(PHRASE_SEED ^ u64::from(phrase.0))
}

pub fn side_key(side: Side) -> u64 {
    match side {
        Side::Engine => mix(SIDE_SEED),
        Side::Opponent => mix(SIDE_SEED ^ 1),
    }
}

/// Canonical identity of a search state: last word, used-phrase set, and
/// side to move. Hashes via the precomputed XOR combination, compares
/// structurally.
#[derive(Clone, Debug, Eq)]
pub struct PositionKey {
    hash: u64,
    last: WordId,
    side: Side,
    phrases: Box<[PhraseId]>,
}

impl PositionKey {
    /// `phrases` must already be sorted; `hash` must be the XOR combination
    /// for exactly these fields. `Position::key` upholds both.
    pub(crate) fn new(hash: u64, last: WordId, side: Side, phrases: &[PhraseId]) -> Self {
        debug_assert!(phrases.is_sorted());
        Self {
            hash,
            last,
            side,
            phrases: phrases.into(),
        }
    }
}

impl PartialEq for PositionKey {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && self.last == other.last
            && self.side == other.side
            && self.phrases == other.phrases
    }
}

impl Hash for PositionKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod key_tests;
