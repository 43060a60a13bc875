use super::*;
use crate::index::AdjacencyIndex;
use crate::types::Side;

fn build(phrases: &[&str]) -> AdjacencyIndex {
    AdjacencyIndex::from_phrases(phrases.iter().copied()).unwrap()
}

#[test]
fn test_example_graph_single_continuation() {
    let idx = build(&["hoa hồng", "hoa mai", "hồng nhạt"]);
    let pos = Position::from_history(&idx, &["hoa", "hồng"], Side::Engine).unwrap();
    let moves = legal_moves(&idx, &pos);
    assert_eq!(moves.len(), 1);
    assert_eq!(idx.phrase_text(moves[0].id), "hồng nhạt");
    assert_eq!(moves[0].link, pos.last);
    assert_eq!(count_legal_moves(&idx, &pos), 1);
}

#[test]
fn test_dead_end_is_empty_not_error() {
    let idx = build(&["hoa hồng", "hồng nhạt"]);
    let mut pos = Position::from_history(&idx, &["hoa", "hồng"], Side::Engine).unwrap();
    let mv = legal_moves(&idx, &pos)[0];
    pos.make(mv);
    assert!(legal_moves(&idx, &pos).is_empty());
    assert_eq!(count_legal_moves(&idx, &pos), 0);
}

#[test]
fn test_self_loop_excluded() {
    let idx = build(&["ca ba", "ba ba", "ba bể"]);
    let pos = Position::from_history(&idx, &["ca", "ba"], Side::Engine).unwrap();
    let moves = legal_moves(&idx, &pos);
    assert_eq!(moves.len(), 1);
    assert_eq!(idx.phrase_text(moves[0].id), "ba bể");
}

#[test]
fn test_used_word_excluded() {
    // "lam xanh" would chain back onto an already-used word
    let idx = build(&["xanh lam", "lam xanh"]);
    let pos = Position::from_history(&idx, &["xanh", "lam"], Side::Engine).unwrap();
    assert!(legal_moves(&idx, &pos).is_empty());
}

#[test]
fn test_buffer_reuse_clears_previous_contents() {
    let idx = build(&["hoa hồng", "hồng nhạt"]);
    let pos = Position::from_history(&idx, &["hoa", "hồng"], Side::Engine).unwrap();
    let mut buf = Vec::new();
    legal_moves_into(&idx, &pos, &mut buf);
    assert_eq!(buf.len(), 1);
    legal_moves_into(&idx, &pos, &mut buf);
    assert_eq!(buf.len(), 1);
}
