//! Tactical Phrase Engine
//!
//! The insane tiers. Two phases per invocation:
//! 1. Quick forced-win probes at short plies budgets. When the position
//!    already admits a guaranteed kill, play it without touching the
//!    heuristic search.
//! 2. Iterative-deepening negamax up to the depth cap, feeding each
//!    iteration's best move to the next as the principal variation.
//!
//! Time checks happen at phase and depth boundaries only; the opponent
//! layer wraps the whole call in a hard timeout. Anytime behavior: the
//! deepest completed iteration's move is always available, and if not even
//! depth one completed, a random legal phrase goes out instead of nothing.

use chain_core::{
    AdjacencyIndex, Engine, LOSS, Position, SearchLimits, SearchResult, WIN, best_forced_move,
    legal_moves, pick_best_move,
};
use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::debug;


/// Forced-win probe budgets, cheapest first.
const QUICK_PROBE_PLIES: [u32; 3] = [2, 3, 4];

/// An opponent that hunts forced wins and otherwise searches to depth.
#[derive(Debug, Clone, Default)]
pub struct TacticalEngine {
    nodes: u64,
}

impl TacticalEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for TacticalEngine {
    fn choose_move(
        &mut self,
        idx: &AdjacencyIndex,
        pos: &Position,
        limits: SearchLimits,
    ) -> SearchResult {
        self.nodes = 0;
        let clock = limits.start();

        let moves = legal_moves(idx, pos);
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: LOSS,
                depth: 0,
                nodes: 0,
                stopped: false,
            };
        }
        if moves.len() == 1 {
            return SearchResult {
                best_move: Some(moves[0]),
                score: 0.0,
                depth: 0,
                nodes: 1,
                stopped: false,
            };
        }

        for plies in QUICK_PROBE_PLIES {
            if clock.expired() {
                break;
            }
            if let Some((mv, won_in)) = best_forced_move(idx, pos, plies) {
                debug!(plies = won_in, phrase = %idx.phrase_text(mv.id), "forced win");
                return SearchResult {
                    best_move: Some(mv),
                    score: WIN,
                    depth: won_in as u8,
                    nodes: self.nodes,
                    stopped: false,
                };
            }
        }

        let mut completed: Option<(chain_core::Phrase, f64, u8)> = None;
        for depth in 1..=limits.max_depth {
            if clock.expired() {
                break;
            }
            let Some(outcome) = pick_best_move(idx, pos, depth, completed.map(|(mv, _, _)| mv))
            else {
                break;
            };
            self.nodes += outcome.nodes;
            debug!(
                depth,
                score = outcome.score,
                nodes = outcome.nodes,
                phrase = %idx.phrase_text(outcome.best_move.id),
                "iteration complete"
            );
            completed = Some((outcome.best_move, outcome.score, depth));
            if outcome.score >= WIN {
                break;
            }
        }

        match completed {
            Some((mv, score, depth)) => SearchResult {
                best_move: Some(mv),
                score,
                depth,
                nodes: self.nodes,
                stopped: clock.expired(),
            },
            None => {
                // not even depth one finished inside the budget
                let mv = moves.choose(&mut thread_rng()).copied();
                SearchResult {
                    best_move: mv,
                    score: 0.0,
                    depth: 0,
                    nodes: self.nodes,
                    stopped: true,
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Tactical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
