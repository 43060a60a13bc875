//! Fair start-phrase selection.
//!
//! Samples openings from the corpus and rejects any that would end the game
//! on move one or hand the first mover a short forced win, using the
//! retrograde solver as the fairness oracle.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::index::AdjacencyIndex;
use crate::movegen::legal_moves;
use crate::position::Position;
use crate::solver::{SolveMemo, can_force_win};
use crate::types::{Phrase, PhraseId, Side};

/// Sampling policy for [`select_start`].
#[derive(Clone, Copy, Debug)]
pub struct StartPolicy {
    /// Candidates examined before giving up on the fairness filter.
    pub max_samples: usize,
    /// Forced-win horizon the first mover is checked against.
    pub lookahead_plies: u32,
    /// Wall-clock budget for the sampling loop, checked per iteration.
    pub time_budget: Duration,
}

impl Default for StartPolicy {
    fn default() -> Self {
        Self {
            max_samples: 50,
            lookahead_plies: 5,
            time_budget: Duration::from_millis(300),
        }
    }
}

const FALLBACK_ATTEMPTS: usize = 100;

/// Pick an opening phrase: shuffled sampling without replacement until a
/// fair candidate appears, the sample budget is spent, or time runs out.
///
/// A candidate is fair when its second word has at least one legal
/// continuation and the side about to move has no forced win within the
/// lookahead (an undetermined verdict counts as fair). If no fair candidate
/// turns up, a bounded scan returns any continuable phrase. `None` means
/// the corpus is empty or admits no continuation at all.
pub fn select_start(idx: &AdjacencyIndex, policy: &StartPolicy) -> Option<Phrase> {
    if idx.phrase_count() == 0 {
        return None;
    }
    let started = Instant::now();
    let mut rng = thread_rng();

    let mut order: Vec<PhraseId> = (0..idx.phrase_count() as u32).map(PhraseId).collect();
    order.shuffle(&mut rng);

    for &id in order.iter().take(policy.max_samples) {
        if started.elapsed() >= policy.time_budget {
            break;
        }
        let mut pos = Position::after_opening(idx, id, Side::Opponent);
        if legal_moves(idx, &pos).is_empty() {
            continue;
        }
        let mut memo = SolveMemo::new();
        let verdict = can_force_win(idx, &mut pos, Side::Opponent, policy.lookahead_plies, &mut memo);
        if verdict.is_win() {
            continue;
        }
        return Some(idx.phrase(id));
    }

    // No fair candidate within budget: any continuable phrase will do.
    for _ in 0..FALLBACK_ATTEMPTS {
        let &id = order.choose(&mut rng)?;
        let pos = Position::after_opening(idx, id, Side::Opponent);
        if !legal_moves(idx, &pos).is_empty() {
            return Some(idx.phrase(id));
        }
    }
    None
}

#[cfg(test)]
#[path = "opening_tests.rs"]
mod opening_tests;
