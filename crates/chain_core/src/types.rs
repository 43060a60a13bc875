/// Interned word handle, assigned densely by the adjacency index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub u32);

/// Interned phrase handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhraseId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Engine,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Engine => Side::Opponent,
            Side::Opponent => Side::Engine,
        }
    }
}

/// A playable move: the phrase `link next`, where `link` must equal the
/// current last word and `next` becomes the new last word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phrase {
    pub id: PhraseId,
    pub link: WordId,
    pub next: WordId,
}
