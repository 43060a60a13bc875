//! Phrase-adjacency index.
//!
//! Owned by the dictionary subsystem and treated as a read-only snapshot by
//! every search: callers hold an `Arc<AdjacencyIndex>` for the duration of a
//! turn, so an external reload never disturbs an in-flight search.
//!
//! Words and phrases are interned to dense ids at build time; everything on
//! the search side works on ids and touches strings only at the edges.

use std::collections::HashMap;

use thiserror::Error;

use crate::types::{Phrase, PhraseId, WordId};

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("phrase `{0}` must contain exactly two words")]
    MalformedPhrase(String),
}

struct PhraseEntry {
    first: WordId,
    second: WordId,
    freq: f64,
}

/// Word → legal-next-words mapping derived from the phrase corpus, plus the
/// per-word data the evaluator reads (trap scores, corpus frequencies).
pub struct AdjacencyIndex {
    words: Vec<String>,
    word_ids: HashMap<String, WordId>,
    phrases: Vec<PhraseEntry>,
    phrase_ids: HashMap<(WordId, WordId), PhraseId>,
    successors: Vec<Vec<(WordId, PhraseId)>>,
    trap_scores: Vec<u32>,
    word_freqs: Vec<f64>,
}

impl AdjacencyIndex {
    /// Build an index from bare phrases, all frequencies zero.
    pub fn from_phrases<I, S>(phrases: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = IndexBuilder::new();
        for phrase in phrases {
            builder.phrase(phrase.as_ref())?;
        }
        Ok(builder.build())
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    pub fn word_id(&self, word: &str) -> Option<WordId> {
        self.word_ids.get(word.trim().to_lowercase().as_str()).copied()
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.words[id.0 as usize]
    }

    /// Legal continuations of `word`. Unknown or foreign ids yield an empty
    /// slice; downstream code treats that as a terminal, never as an error.
    pub fn successors(&self, word: WordId) -> &[(WordId, PhraseId)] {
        self.successors
            .get(word.0 as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Phrase-validity predicate: is `first second` in the corpus?
    pub fn phrase_id(&self, first: WordId, second: WordId) -> Option<PhraseId> {
        self.phrase_ids.get(&(first, second)).copied()
    }

    pub fn phrase_words(&self, id: PhraseId) -> (WordId, WordId) {
        let entry = &self.phrases[id.0 as usize];
        (entry.first, entry.second)
    }

    /// The move value for a phrase id, ready to feed to `Position::make`.
    pub fn phrase(&self, id: PhraseId) -> Phrase {
        let entry = &self.phrases[id.0 as usize];
        Phrase {
            id,
            link: entry.first,
            next: entry.second,
        }
    }

    pub fn phrase_text(&self, id: PhraseId) -> String {
        let entry = &self.phrases[id.0 as usize];
        format!("{} {}", self.word(entry.first), self.word(entry.second))
    }

    pub fn phrase_freq(&self, id: PhraseId) -> f64 {
        self.phrases[id.0 as usize].freq
    }

    /// Corpus frequency of a single word; absent data reads as 0.0
    /// (maximally rare).
    pub fn word_freq(&self, id: WordId) -> f64 {
        self.word_freqs.get(id.0 as usize).copied().unwrap_or(0.0)
    }

    /// Precomputed out-degree of a word: the number of escape routes the
    /// opponent has when left on it.
    pub fn trap_score(&self, id: WordId) -> u32 {
        self.trap_scores.get(id.0 as usize).copied().unwrap_or(0)
    }
}

/// Incremental construction of an [`AdjacencyIndex`].
#[derive(Default)]
pub struct IndexBuilder {
    words: Vec<String>,
    word_ids: HashMap<String, WordId>,
    phrases: Vec<PhraseEntry>,
    phrase_ids: HashMap<(WordId, WordId), PhraseId>,
    word_freqs: HashMap<WordId, f64>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a phrase with zero corpus frequency.
    pub fn phrase(&mut self, text: &str) -> Result<(), IndexError> {
        self.phrase_with_freq(text, 0.0)
    }

    /// Add a phrase. Duplicates collapse to the first entry (set semantics).
    pub fn phrase_with_freq(&mut self, text: &str, freq: f64) -> Result<(), IndexError> {
        let normalized = text.trim().to_lowercase();
        let mut parts = normalized.split_whitespace();
        let (first, second) = match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) => (a.to_string(), b.to_string()),
            _ => return Err(IndexError::MalformedPhrase(text.to_string())),
        };
        let first = self.intern(first);
        let second = self.intern(second);
        if self.phrase_ids.contains_key(&(first, second)) {
            return Ok(());
        }
        let id = PhraseId(self.phrases.len() as u32);
        self.phrases.push(PhraseEntry {
            first,
            second,
            freq,
        });
        self.phrase_ids.insert((first, second), id);
        Ok(())
    }

    /// Record a word's corpus frequency, interning the word if unseen.
    pub fn word_freq(&mut self, word: &str, freq: f64) {
        let id = self.intern(word.trim().to_lowercase());
        self.word_freqs.insert(id, freq);
    }

    fn intern(&mut self, word: String) -> WordId {
        if let Some(&id) = self.word_ids.get(&word) {
            return id;
        }
        let id = WordId(self.words.len() as u32);
        self.words.push(word.clone());
        self.word_ids.insert(word, id);
        id
    }

    pub fn build(self) -> AdjacencyIndex {
        let mut successors: Vec<Vec<(WordId, PhraseId)>> = vec![Vec::new(); self.words.len()];
        for (i, entry) in self.phrases.iter().enumerate() {
            successors[entry.first.0 as usize].push((entry.second, PhraseId(i as u32)));
        }
        let trap_scores = successors.iter().map(|next| next.len() as u32).collect();
        let mut word_freqs = vec![0.0; self.words.len()];
        for (id, freq) in self.word_freqs {
            word_freqs[id.0 as usize] = freq;
        }
        AdjacencyIndex {
            words: self.words,
            word_ids: self.word_ids,
            phrases: self.phrases,
            phrase_ids: self.phrase_ids,
            successors,
            trap_scores,
            word_freqs,
        }
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod index_tests;
