//! Frequency Phrase Engine
//!
//! Ranks the legal continuations by corpus frequency and plays an extreme:
//! the most common phrase (a gentle, familiar opponent) or the most obscure
//! one (a vocabulary test). One-ply, no lookahead.

use chain_core::{AdjacencyIndex, Engine, Position, SearchLimits, SearchResult, legal_moves_into};

#[cfg(test)]
mod lib_tests;

/// Which end of the frequency ranking to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// Highest corpus frequency first.
    Common,
    /// Lowest corpus frequency first.
    Obscure,
}

/// An opponent that plays by phrase frequency alone.
#[derive(Debug, Clone)]
pub struct FrequencyEngine {
    preference: Preference,
    moves: Vec<chain_core::Phrase>,
}

impl FrequencyEngine {
    pub fn new(preference: Preference) -> Self {
        Self {
            preference,
            moves: Vec::new(),
        }
    }

    /// The easy tier: most common phrase.
    pub fn common() -> Self {
        Self::new(Preference::Common)
    }

    /// The hard tier: most obscure phrase.
    pub fn obscure() -> Self {
        Self::new(Preference::Obscure)
    }
}

impl Engine for FrequencyEngine {
    fn choose_move(
        &mut self,
        idx: &AdjacencyIndex,
        pos: &Position,
        _limits: SearchLimits,
    ) -> SearchResult {
        legal_moves_into(idx, pos, &mut self.moves);
        let best_move = match self.preference {
            Preference::Common => self
                .moves
                .iter()
                .max_by(|a, b| idx.phrase_freq(a.id).total_cmp(&idx.phrase_freq(b.id))),
            Preference::Obscure => self
                .moves
                .iter()
                .min_by(|a, b| idx.phrase_freq(a.id).total_cmp(&idx.phrase_freq(b.id))),
        }
        .copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: self.moves.len() as u64,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        match self.preference {
            Preference::Common => "Frequency (common) v1.0",
            Preference::Obscure => "Frequency (obscure) v1.0",
        }
    }
}
