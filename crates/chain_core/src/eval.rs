//! Heuristic evaluation of non-terminal positions at the search horizon.

use crate::index::AdjacencyIndex;
use crate::types::{Phrase, WordId};

// Weights balancing the three components; relative magnitudes are tunable.
// Rarity carries a large weight because corpus frequencies are tiny.
const W_MOBILITY: f64 = 0.3;
const W_TRAP: f64 = 0.5;
const W_RARITY: f64 = 10_000.0;

// Keeps heuristic magnitudes well inside the terminal win/loss range (±1).
const NORMALIZER: f64 = 100.0;
const BOUND: f64 = 0.999;

/// Score the position from the side to move's perspective. Only called at
/// depth 0 of a node that still has moves; terminal nodes are scored by the
/// searcher itself.
///
/// Components:
/// - mobility: more continuations for the side to move is better;
/// - trap score: more escape routes from the last word is safer;
/// - rarity: a rarer last word is harder for the opponent to continue from,
///   so low frequency raises the score.
pub fn evaluate(idx: &AdjacencyIndex, last: WordId, candidates: &[Phrase]) -> f64 {
    let mobility = candidates.len() as f64;
    let trap = f64::from(idx.trap_score(last));
    let rarity = idx.word_freq(last);
    let raw = (W_MOBILITY * mobility + W_TRAP * trap - W_RARITY * rarity) / NORMALIZER;
    raw.clamp(-BOUND, BOUND)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
