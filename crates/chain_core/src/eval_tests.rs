use super::*;
use crate::index::IndexBuilder;
use crate::movegen::legal_moves;
use crate::position::Position;
use crate::search::{LOSS, WIN};
use crate::types::Side;

fn night_corpus(khuya_freq: f64) -> AdjacencyIndex {
    let mut builder = IndexBuilder::new();
    builder.phrase("đêm khuya").unwrap();
    builder.phrase("khuya khoắt").unwrap();
    builder.word_freq("khuya", khuya_freq);
    builder.build()
}

#[test]
fn test_rarity_raises_score() {
    let common = night_corpus(1e-4);
    let rare = night_corpus(0.0);
    let pos_c = Position::from_history(&common, &["đêm", "khuya"], Side::Engine).unwrap();
    let pos_r = Position::from_history(&rare, &["đêm", "khuya"], Side::Engine).unwrap();
    let cand_c = legal_moves(&common, &pos_c);
    let cand_r = legal_moves(&rare, &pos_r);
    assert!(evaluate(&common, pos_c.last, &cand_c) < evaluate(&rare, pos_r.last, &cand_r));
}

#[test]
fn test_mobility_raises_score() {
    let idx = AdjacencyIndex::from_phrases(["a b", "b c", "b d"]).unwrap();
    let pos = Position::from_history(&idx, &["a", "b"], Side::Engine).unwrap();
    let moves = legal_moves(&idx, &pos);
    assert_eq!(moves.len(), 2);
    assert!(evaluate(&idx, pos.last, &moves[..1]) < evaluate(&idx, pos.last, &moves));
}

#[test]
fn test_scores_stay_inside_terminal_range() {
    // a last word with hundreds of continuations must still score below a win
    let phrases: Vec<String> = (0..400).map(|i| format!("gốc lá{i}")).collect();
    let idx = AdjacencyIndex::from_phrases(phrases.iter().map(String::as_str)).unwrap();
    let pos = Position::from_history(&idx, &["gốc"], Side::Engine).unwrap();
    let moves = legal_moves(&idx, &pos);
    let score = evaluate(&idx, pos.last, &moves);
    assert!(score > LOSS && score < WIN);
}
