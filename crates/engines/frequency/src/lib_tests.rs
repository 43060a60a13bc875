use super::*;
use chain_core::{IndexBuilder, Side};

fn ranked_index() -> AdjacencyIndex {
    let mut builder = IndexBuilder::new();
    builder.phrase_with_freq("hoa hồng", 10.0).unwrap();
    builder.phrase_with_freq("hồng nhạt", 7.0).unwrap();
    builder.phrase_with_freq("hồng hào", 3.0).unwrap();
    builder.phrase_with_freq("hồng ngọc", 1.0).unwrap();
    builder.build()
}

#[test]
fn common_preference_picks_highest_frequency() {
    let idx = ranked_index();
    let pos = Position::from_history(&idx, &["hoa", "hồng"], Side::Opponent).unwrap();
    let mut engine = FrequencyEngine::common();

    let result = engine.choose_move(&idx, &pos, SearchLimits::depth(1));

    assert_eq!(idx.phrase_text(result.best_move.unwrap().id), "hồng nhạt");
}

#[test]
fn obscure_preference_picks_lowest_frequency() {
    let idx = ranked_index();
    let pos = Position::from_history(&idx, &["hoa", "hồng"], Side::Opponent).unwrap();
    let mut engine = FrequencyEngine::obscure();

    let result = engine.choose_move(&idx, &pos, SearchLimits::depth(1));

    assert_eq!(idx.phrase_text(result.best_move.unwrap().id), "hồng ngọc");
}

#[test]
fn frequency_engine_handles_dead_end() {
    let idx = ranked_index();
    let pos = Position::from_history(&idx, &["hồng", "ngọc"], Side::Opponent).unwrap();
    let mut engine = FrequencyEngine::common();

    let result = engine.choose_move(&idx, &pos, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}
