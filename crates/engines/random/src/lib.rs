//! Random Phrase Engine
//!
//! Picks uniformly at random from the legal continuations. Useful for:
//! - The medium difficulty tier
//! - The timeout fallback behind the tactical tiers
//! - Baseline comparisons (any real tier should beat this)

use chain_core::{AdjacencyIndex, Engine, Position, SearchLimits, SearchResult, legal_moves_into};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// An opponent that plays random legal phrases.
///
/// No evaluation at all: it generates the legal continuations and picks
/// one. The simplest possible tier, and the reference point the stronger
/// tiers are measured against.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    moves: Vec<chain_core::Phrase>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for RandomEngine {
    fn choose_move(
        &mut self,
        idx: &AdjacencyIndex,
        pos: &Position,
        _limits: SearchLimits,
    ) -> SearchResult {
        legal_moves_into(idx, pos, &mut self.moves);
        let best_move = self.moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: 1,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
