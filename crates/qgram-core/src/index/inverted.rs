//! Inverted word index
//!
//! Maps every distinct lowercase word of the corpus to the items whose
//! title contains it. Words are interned: the q-gram index and the matcher
//! refer to them by [`WordId`].

use ahash::AHashMap;

/// Ordinal of an item within one index generation
pub type ItemId = usize;

/// Interned word handle within one index generation
pub type WordId = usize;

/// Word → items containing it.
///
/// Item lists are unique and ascending as long as each item's words are
/// inserted together and items arrive in corpus order, which is how
/// [`super::IndexGeneration::build`] feeds it.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    words: Vec<String>,
    lookup: AHashMap<String, WordId>,
    postings: Vec<Vec<ItemId>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `item` contains `word`.
    pub fn insert(&mut self, word: &str, item: ItemId) {
        let id = match self.lookup.get(word) {
            Some(&id) => id,
            None => {
                let id = self.words.len();
                self.words.push(word.to_string());
                self.lookup.insert(word.to_string(), id);
                self.postings.push(Vec::new());
                id
            }
        };

        let items = &mut self.postings[id];
        if items.last() != Some(&item) {
            items.push(item);
        }
    }

    pub fn word_id(&self, word: &str) -> Option<WordId> {
        self.lookup.get(word).copied()
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.words[id]
    }

    /// Items containing the word with this id.
    pub fn items(&self, id: WordId) -> &[ItemId] {
        &self.postings[id]
    }

    /// Items containing `word`; empty when the word is not indexed.
    pub fn items_for(&self, word: &str) -> &[ItemId] {
        self.word_id(word).map(|id| self.items(id)).unwrap_or_default()
    }

    /// All indexed words with their ids, in first-seen order.
    pub fn words(&self) -> impl Iterator<Item = (WordId, &str)> {
        self.words.iter().map(String::as_str).enumerate()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
