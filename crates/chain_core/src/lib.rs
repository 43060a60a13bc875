//! Core rules and search for the two-player word-chaining game.
//!
//! Each move is a two-word phrase whose first word must equal the previous
//! phrase's second word; phrases and words cannot repeat, and whoever has no
//! continuation loses. This crate owns the adjacency index view, move
//! generation, heuristic and exact search, opening selection, and the
//! [`Engine`] trait the difficulty-tier crates implement. Transport, chat
//! parsing, and persistence live in the surrounding system.

pub mod eval;
pub mod index;
pub mod key;
pub mod movegen;
pub mod opening;
pub mod position;
pub mod search;
pub mod solver;
pub mod time_control;
pub mod types;

pub use eval::evaluate;
pub use index::{AdjacencyIndex, IndexBuilder, IndexError};
pub use key::PositionKey;
pub use movegen::{count_legal_moves, legal_moves, legal_moves_into};
pub use opening::{StartPolicy, select_start};
pub use position::{Position, Undo};
pub use search::{LOSS, RootOutcome, TranspositionTable, WIN, negamax, pick_best_move};
pub use solver::{ForcedWin, SolveMemo, best_forced_move, can_force_win};
pub use time_control::{SearchClock, SearchLimits};
pub use types::{Phrase, PhraseId, Side, WordId};

// =============================================================================
// Engine trait — implemented by all difficulty tiers (random, frequency, ...)
// =============================================================================

/// Result of one engine invocation.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen phrase (None only when the position is already terminal)
    pub best_move: Option<Phrase>,
    /// Score in [-1, 1] from the engine's perspective, where applicable
    pub score: f64,
    /// Search depth (or solver plies) actually completed
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
    /// Whether the time budget cut the search short
    pub stopped: bool,
}

/// Trait all difficulty-tier engines implement, so the opponent layer can
/// swap tiers behind one interface.
pub trait Engine: Send {
    /// Pick a move for the side to move within the given limits. Timeouts
    /// are normal termination: some move must come back unless the position
    /// is terminal.
    fn choose_move(
        &mut self,
        idx: &AdjacencyIndex,
        pos: &Position,
        limits: SearchLimits,
    ) -> SearchResult;

    /// Engine name for logs and match reports.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
