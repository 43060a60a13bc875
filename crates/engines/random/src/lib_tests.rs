use super::*;
use chain_core::{Side, legal_moves};

#[test]
fn random_engine_returns_legal_move() {
    let idx = AdjacencyIndex::from_phrases(["hoa hồng", "hoa mai", "hồng nhạt"]).unwrap();
    let pos = Position::from_history(&idx, &["hoa"], Side::Opponent).unwrap();
    let mut engine = RandomEngine::new();

    let result = engine.choose_move(&idx, &pos, SearchLimits::depth(1));

    let legal = legal_moves(&idx, &pos);
    assert!(legal.contains(&result.best_move.unwrap()));
}

#[test]
fn random_engine_handles_dead_end() {
    let idx = AdjacencyIndex::from_phrases(["hoa hồng", "hồng nhạt"]).unwrap();
    let pos = Position::from_history(&idx, &["hoa", "hồng", "nhạt"], Side::Opponent).unwrap();
    let mut engine = RandomEngine::new();

    let result = engine.choose_move(&idx, &pos, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
    assert!(!result.stopped);
}
