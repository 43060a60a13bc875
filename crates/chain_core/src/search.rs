//! Negamax alpha-beta search with transposition memoization.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::eval::evaluate;
use crate::index::AdjacencyIndex;
use crate::key::PositionKey;
use crate::movegen::{count_legal_moves, legal_moves};
use crate::position::Position;
use crate::types::Phrase;

/// Certain win for the side to move.
pub const WIN: f64 = 1.0;
/// Certain loss for the side to move.
pub const LOSS: f64 = -1.0;

struct TtEntry {
    depth: u8,
    value: f64,
}

/// Heuristic memo for one root search. Entries record the depth they were
/// searched to; a shallower entry never satisfies a deeper request. The
/// table must be discarded after the invocation: depth-remaining is only
/// comparable within a single depth budget.
#[derive(Default)]
pub struct TranspositionTable {
    entries: HashMap<PositionKey, TtEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn probe(&self, key: &PositionKey, depth: u8) -> Option<f64> {
        self.entries
            .get(key)
            .filter(|entry| entry.depth >= depth)
            .map(|entry| entry.value)
    }

    pub(crate) fn store(&mut self, key: PositionKey, depth: u8, value: f64) {
        self.entries.insert(key, TtEntry { depth, value });
    }
}

/// Bounded-depth negamax with alpha-beta pruning, returning a score in
/// [-1, 1] from the side to move's perspective.
///
/// The stuck check runs on every call, even at depth 0: a mover with no
/// continuation has lost outright, and that outcome outranks the horizon.
pub fn negamax(
    idx: &AdjacencyIndex,
    pos: &mut Position,
    depth: u8,
    mut alpha: f64,
    beta: f64,
    tt: &mut TranspositionTable,
    nodes: &mut u64,
) -> f64 {
    *nodes += 1;

    let mut moves = legal_moves(idx, pos);
    if moves.is_empty() {
        return LOSS;
    }
    if depth == 0 {
        return evaluate(idx, pos.last, &moves);
    }

    let tt_key = pos.key();
    if let Some(value) = tt.probe(&tt_key, depth) {
        return value;
    }

    order_by_opponent_replies(idx, pos, &mut moves);

    let mut best = f64::NEG_INFINITY;
    for mv in moves {
        let undo = pos.make(mv);
        let value = -negamax(idx, pos, depth - 1, -beta, -alpha, tt, nodes);
        pos.unmake(mv, undo);
        if value > best {
            best = value;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break;
        }
    }

    tt.store(tt_key, depth, best);
    best
}

/// Sort ascending by the number of replies left to the opponent after each
/// move: most-restricting first. Pruning efficiency only, not correctness.
pub(crate) fn order_by_opponent_replies(
    idx: &AdjacencyIndex,
    pos: &mut Position,
    moves: &mut [Phrase],
) {
    let mut keyed: Vec<(usize, Phrase)> = moves
        .iter()
        .map(|&mv| {
            let undo = pos.make(mv);
            let replies = count_legal_moves(idx, pos);
            pos.unmake(mv, undo);
            (replies, mv)
        })
        .collect();
    keyed.sort_by_key(|&(replies, _)| replies);
    for (slot, (_, mv)) in moves.iter_mut().zip(keyed) {
        *slot = mv;
    }
}

/// Outcome of a root best-move search.
#[derive(Clone, Copy, Debug)]
pub struct RootOutcome {
    pub best_move: Phrase,
    pub score: f64,
    pub nodes: u64,
}

/// Search every root move to `depth` and keep the best, breaking ties
/// uniformly at random. `pv_move` (the previous iteration's best) is tried
/// first; the rest follow in most-restricting order. Root children get the
/// full window so tied scores stay comparable.
pub fn pick_best_move(
    idx: &AdjacencyIndex,
    pos: &Position,
    depth: u8,
    pv_move: Option<Phrase>,
) -> Option<RootOutcome> {
    let mut scratch = pos.clone();
    let mut moves = legal_moves(idx, &scratch);
    if moves.is_empty() {
        return None;
    }

    order_by_opponent_replies(idx, &mut scratch, &mut moves);
    if let Some(pv) = pv_move {
        if let Some(at) = moves.iter().position(|&mv| mv == pv) {
            moves.remove(at);
            moves.insert(0, pv);
        }
    }

    let mut tt = TranspositionTable::new();
    let mut nodes = 0u64;
    let mut best_score = f64::NEG_INFINITY;
    let mut best_moves: Vec<Phrase> = Vec::new();
    for mv in moves {
        let undo = scratch.make(mv);
        let score = -negamax(
            idx,
            &mut scratch,
            depth.saturating_sub(1),
            f64::NEG_INFINITY,
            f64::INFINITY,
            &mut tt,
            &mut nodes,
        );
        scratch.unmake(mv, undo);
        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(mv);
        } else if score == best_score {
            best_moves.push(mv);
        }
    }

    let best_move = *best_moves.choose(&mut thread_rng())?;
    Some(RootOutcome {
        best_move,
        score: best_score,
        nodes,
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
