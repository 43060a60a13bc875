//! Game position with make/unmake move application.
//!
//! Invariants: every used phrase's second word is in `used_words`, and the
//! last word is always a member of `used_words`. The order-independent hash
//! is maintained incrementally across make/unmake.

use std::collections::HashSet;

use crate::index::AdjacencyIndex;
use crate::key::{self, PositionKey};
use crate::types::{Phrase, PhraseId, Side, WordId};

#[derive(Clone, Debug)]
pub struct Position {
    pub last: WordId,
    pub side_to_move: Side,
    /// Kept sorted so the memo key is a cheap copy.
    used_phrases: Vec<PhraseId>,
    used_words: HashSet<WordId>,
    hash: u64,
}

/// State needed to reverse one `make`.
#[derive(Debug)]
pub struct Undo {
    last: WordId,
}

impl Position {
    /// Position right after an opening phrase has been announced;
    /// `side_to_move` is whoever continues from its second word.
    pub fn after_opening(idx: &AdjacencyIndex, opening: PhraseId, side_to_move: Side) -> Self {
        let (first, second) = idx.phrase_words(opening);
        let mut used_words = HashSet::new();
        used_words.insert(first);
        used_words.insert(second);
        Position {
            last: second,
            side_to_move,
            hash: key::word_key(second) ^ key::phrase_key(opening) ^ key::side_key(side_to_move),
            used_phrases: vec![opening],
            used_words,
        }
    }

    /// Rebuild a position from the word history the session layer keeps.
    /// Returns `None` if any word or consecutive pair is not in the index.
    pub fn from_history<S: AsRef<str>>(
        idx: &AdjacencyIndex,
        words: &[S],
        side_to_move: Side,
    ) -> Option<Self> {
        let ids: Vec<WordId> = words
            .iter()
            .map(|w| idx.word_id(w.as_ref()))
            .collect::<Option<_>>()?;
        let last = *ids.last()?;

        let mut used_phrases: Vec<PhraseId> = ids
            .windows(2)
            .map(|pair| idx.phrase_id(pair[0], pair[1]))
            .collect::<Option<_>>()?;
        used_phrases.sort_unstable();

        let mut hash = key::word_key(last) ^ key::side_key(side_to_move);
        for &phrase in &used_phrases {
            hash ^= key::phrase_key(phrase);
        }

        Some(Position {
            last,
            side_to_move,
            used_phrases,
            used_words: ids.into_iter().collect(),
            hash,
        })
    }

    pub fn uses_word(&self, word: WordId) -> bool {
        self.used_words.contains(&word)
    }

    pub fn uses_phrase(&self, phrase: PhraseId) -> bool {
        self.used_phrases.binary_search(&phrase).is_ok()
    }

    pub fn used_phrases(&self) -> &[PhraseId] {
        &self.used_phrases
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn key(&self) -> PositionKey {
        PositionKey::new(self.hash, self.last, self.side_to_move, &self.used_phrases)
    }

    /// Play a legal move. The caller guarantees `mv.link == self.last` and
    /// that neither the phrase nor its second word has been used.
    pub fn make(&mut self, mv: Phrase) -> Undo {
        debug_assert_eq!(mv.link, self.last);
        debug_assert!(!self.uses_phrase(mv.id));
        debug_assert!(!self.uses_word(mv.next));

        let undo = Undo { last: self.last };
        let at = match self.used_phrases.binary_search(&mv.id) {
            Ok(at) | Err(at) => at,
        };
        self.used_phrases.insert(at, mv.id);
        self.used_words.insert(mv.next);
        self.hash ^= key::word_key(self.last)
            ^ key::word_key(mv.next)
            ^ key::phrase_key(mv.id)
            ^ key::side_key(self.side_to_move)
            ^ key::side_key(self.side_to_move.other());
        self.last = mv.next;
        self.side_to_move = self.side_to_move.other();
        undo
    }

    pub fn unmake(&mut self, mv: Phrase, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.last = undo.last;
        self.hash ^= key::word_key(undo.last)
            ^ key::word_key(mv.next)
            ^ key::phrase_key(mv.id)
            ^ key::side_key(self.side_to_move)
            ^ key::side_key(self.side_to_move.other());
        if let Ok(at) = self.used_phrases.binary_search(&mv.id) {
            self.used_phrases.remove(at);
        }
        self.used_words.remove(&mv.next);
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
