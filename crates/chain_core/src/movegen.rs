use crate::index::AdjacencyIndex;
use crate::position::Position;
use crate::types::Phrase;

/// Generate all legal continuations, returning a freshly allocated vector.
pub fn legal_moves(idx: &AdjacencyIndex, pos: &Position) -> Vec<Phrase> {
    let mut out = Vec::with_capacity(16);
    legal_moves_into(idx, pos, &mut out);
    out
}

/// Generate all legal continuations into the provided buffer, reusing it
/// across calls. A candidate `(last, w)` is legal iff the phrase is in the
/// corpus, neither the phrase nor `w` has been used, and `w` is not the last
/// word itself. A last word without successors (including one absent from
/// the index entirely) produces an empty list: terminal, not an error.
pub fn legal_moves_into(idx: &AdjacencyIndex, pos: &Position, out: &mut Vec<Phrase>) {
    out.clear();
    for &(next, id) in idx.successors(pos.last) {
        if next == pos.last || pos.uses_word(next) || pos.uses_phrase(id) {
            continue;
        }
        out.push(Phrase {
            id,
            link: pos.last,
            next,
        });
    }
}

/// Count legal continuations without allocating. Used for move ordering.
pub fn count_legal_moves(idx: &AdjacencyIndex, pos: &Position) -> usize {
    idx.successors(pos.last)
        .iter()
        .filter(|&&(next, id)| next != pos.last && !pos.uses_word(next) && !pos.uses_phrase(id))
        .count()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
