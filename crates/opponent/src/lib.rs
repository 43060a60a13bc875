//! Async opponent layer.
//!
//! Maps a difficulty tier to an engine, runs the engine on the blocking
//! pool, and enforces the tier's wall-clock budget with a hard outer
//! timeout. Engines already check their clock cooperatively; the outer
//! timeout is the backstop, and when it fires a random legal phrase is
//! played so the opponent never stalls the game.

use std::sync::Arc;

use chain_core::{AdjacencyIndex, Phrase, Position, legal_moves};
use rand::seq::SliceRandom;
use rand::thread_rng;
use tokio::task;
use tokio::time::timeout;
use tracing::{debug, warn};

mod difficulty;

pub use difficulty::{Difficulty, UnknownDifficulty};


/// Pick the opponent's reply at the given difficulty. `None` means the
/// position is terminal: the opponent is stuck and has lost.
pub async fn choose_move(
    idx: Arc<AdjacencyIndex>,
    pos: Position,
    difficulty: Difficulty,
) -> Option<Phrase> {
    let limits = difficulty.limits();
    let task_idx = Arc::clone(&idx);
    let task_pos = pos.clone();
    let handle = task::spawn_blocking(move || {
        let mut engine = difficulty.engine();
        engine.choose_move(&task_idx, &task_pos, limits)
    });

    let joined = match limits.budget {
        Some(budget) => match timeout(budget, handle).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!(%difficulty, "engine ran over budget, playing a random phrase");
                return random_fallback(&idx, &pos);
            }
        },
        None => handle.await,
    };

    match joined {
        Ok(result) => {
            debug!(
                %difficulty,
                score = result.score,
                depth = result.depth,
                nodes = result.nodes,
                stopped = result.stopped,
                "engine reply"
            );
            result.best_move
        }
        Err(err) => {
            warn!(%difficulty, %err, "engine task failed, playing a random phrase");
            random_fallback(&idx, &pos)
        }
    }
}

fn random_fallback(idx: &AdjacencyIndex, pos: &Position) -> Option<Phrase> {
    legal_moves(idx, pos).choose(&mut thread_rng()).copied()
}
