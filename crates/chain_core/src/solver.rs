//! Exact forced-win retrograde solver.
//!
//! Unlike the heuristic searcher this answers yes/no: can the forcing side
//! guarantee victory within a plies budget, assuming the defender first
//! tries to escape and, failing that, delays as long as possible?

use std::collections::HashMap;

use crate::index::AdjacencyIndex;
use crate::key::PositionKey;
use crate::movegen::legal_moves;
use crate::position::Position;
use crate::types::{Phrase, Side};

/// Verdict of a forced-win query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForcedWin {
    /// The forcing side wins within this many plies against any defence.
    Win(u32),
    /// The defender has an escape within the examined horizon.
    No,
    /// The plies budget ran out before the question was settled. Distinct
    /// from `No`: callers must escalate, not conclude.
    Undetermined,
}

impl ForcedWin {
    pub fn is_win(self) -> bool {
        matches!(self, ForcedWin::Win(_))
    }

    pub fn plies(self) -> Option<u32> {
        match self {
            ForcedWin::Win(plies) => Some(plies),
            _ => None,
        }
    }
}

/// Exact memo for one solver invocation. Entries carry no depth because
/// within a single call every reachable state sits at a fixed distance from
/// the root (the used-phrase set grows by exactly one per ply), so a stored
/// verdict was always computed under the same remaining budget. A new plies
/// budget needs a new memo.
#[derive(Default)]
pub struct SolveMemo {
    entries: HashMap<PositionKey, ForcedWin>,
}

impl SolveMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Can `forcing` guarantee victory within `max_plies`, with `pos.side_to_move`
/// about to play? The stuck check precedes the budget check: whoever cannot
/// move has lost, and the win is credited to the other side.
pub fn can_force_win(
    idx: &AdjacencyIndex,
    pos: &mut Position,
    forcing: Side,
    max_plies: u32,
    memo: &mut SolveMemo,
) -> ForcedWin {
    let key = pos.key();
    if let Some(&verdict) = memo.entries.get(&key) {
        return verdict;
    }

    let moves = legal_moves(idx, pos);
    let verdict = if moves.is_empty() {
        if pos.side_to_move == forcing {
            ForcedWin::No
        } else {
            ForcedWin::Win(0)
        }
    } else if max_plies == 0 {
        ForcedWin::Undetermined
    } else if pos.side_to_move == forcing {
        solve_forcing(idx, pos, forcing, max_plies, memo, &moves)
    } else {
        solve_defending(idx, pos, forcing, max_plies, memo, &moves)
    };

    memo.entries.insert(key, verdict);
    verdict
}

/// Existential step: one winning continuation suffices; report the quickest.
fn solve_forcing(
    idx: &AdjacencyIndex,
    pos: &mut Position,
    forcing: Side,
    max_plies: u32,
    memo: &mut SolveMemo,
    moves: &[Phrase],
) -> ForcedWin {
    let mut best: Option<u32> = None;
    let mut undetermined = false;
    for &mv in moves {
        let undo = pos.make(mv);
        let below = can_force_win(idx, pos, forcing, max_plies - 1, memo);
        pos.unmake(mv, undo);
        match below {
            ForcedWin::Win(plies) => {
                let total = plies + 1;
                if best.is_none_or(|b| total < b) {
                    best = Some(total);
                }
            }
            ForcedWin::Undetermined => undetermined = true,
            ForcedWin::No => {}
        }
    }
    match best {
        Some(plies) => ForcedWin::Win(plies),
        None if undetermined => ForcedWin::Undetermined,
        None => ForcedWin::No,
    }
}

/// Universal step: a single escape disproves the forced win; when every
/// continuation loses, the defender delays, so the longest line counts.
fn solve_defending(
    idx: &AdjacencyIndex,
    pos: &mut Position,
    forcing: Side,
    max_plies: u32,
    memo: &mut SolveMemo,
    moves: &[Phrase],
) -> ForcedWin {
    let mut worst = 0u32;
    let mut undetermined = false;
    for &mv in moves {
        let undo = pos.make(mv);
        let below = can_force_win(idx, pos, forcing, max_plies - 1, memo);
        pos.unmake(mv, undo);
        match below {
            ForcedWin::No => return ForcedWin::No,
            ForcedWin::Undetermined => undetermined = true,
            ForcedWin::Win(plies) => worst = worst.max(plies + 1),
        }
    }
    if undetermined {
        ForcedWin::Undetermined
    } else {
        ForcedWin::Win(worst)
    }
}

/// Root helper for the forced-win tiers and the opening oracle: solve for
/// the side to move and return the winning move with the smallest reported
/// plies-to-win (first found on ties), or `None` when no forced win exists
/// within the budget.
pub fn best_forced_move(
    idx: &AdjacencyIndex,
    pos: &Position,
    max_plies: u32,
) -> Option<(Phrase, u32)> {
    if max_plies == 0 {
        return None;
    }
    let mut scratch = pos.clone();
    let forcing = scratch.side_to_move;
    let mut memo = SolveMemo::new();
    if !can_force_win(idx, &mut scratch, forcing, max_plies, &mut memo).is_win() {
        return None;
    }

    let mut best: Option<(Phrase, u32)> = None;
    for mv in legal_moves(idx, &scratch) {
        let undo = scratch.make(mv);
        let below = can_force_win(idx, &mut scratch, forcing, max_plies - 1, &mut memo);
        scratch.unmake(mv, undo);
        if let ForcedWin::Win(plies) = below {
            let total = plies + 1;
            if best.is_none_or(|(_, b)| total < b) {
                best = Some((mv, total));
            }
        }
    }
    best
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod solver_tests;
