//! Q-gram index
//!
//! Maps every q-gram to the indexed words containing it, together with how
//! often the gram occurs in each word.

use ahash::AHashMap;

use super::inverted::{InvertedIndex, WordId};
use crate::qgram::gram_counts;

/// Gram → (word, occurrences of the gram in that word)
#[derive(Debug, Default, Clone)]
pub struct QGramIndex {
    q: usize,
    grams: AHashMap<String, Vec<(WordId, u32)>>,
}

impl QGramIndex {
    /// Index the q-grams of every word in `words`.
    pub fn build(words: &InvertedIndex, q: usize) -> Self {
        let mut grams: AHashMap<String, Vec<(WordId, u32)>> = AHashMap::new();

        for (id, word) in words.words() {
            for (gram, count) in gram_counts(word, q) {
                grams.entry(gram).or_default().push((id, count));
            }
        }

        Self { q, grams }
    }

    pub fn q(&self) -> usize {
        self.q
    }

    /// Words containing `gram`, each listed once with its occurrence count.
    pub fn postings(&self, gram: &str) -> &[(WordId, u32)] {
        self.grams.get(gram).map(Vec::as_slice).unwrap_or_default()
    }

    /// Occurrences of `gram` in the word with this id.
    #[cfg(test)]
    pub(crate) fn count(&self, gram: &str, word: WordId) -> u32 {
        self.postings(gram)
            .iter()
            .find(|(id, _)| *id == word)
            .map_or(0, |&(_, count)| count)
    }

    /// Number of distinct grams
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qgram::qgrams;

    fn words(list: &[&str]) -> InvertedIndex {
        let mut index = InvertedIndex::new();
        for (item, word) in list.iter().enumerate() {
            index.insert(word, item);
        }
        index
    }

    #[test]
    fn test_every_gram_of_every_word_is_indexed() {
        let inverted = words(&["calculator", "calendar", "banana"]);
        let index = QGramIndex::build(&inverted, 3);

        for (id, word) in inverted.words() {
            for gram in qgrams(word, 3) {
                let expected = qgrams(word, 3).iter().filter(|g| **g == gram).count() as u32;
                assert_eq!(index.count(&gram, id), expected, "{word} {gram:?}");
            }
        }
    }

    #[test]
    fn test_repeated_gram_counts() {
        let inverted = words(&["banana"]);
        let index = QGramIndex::build(&inverted, 3);
        // "  b", " ba", "ban", "ana", "nan", "ana"
        assert_eq!(index.count("ana", 0), 2);
        assert_eq!(index.count("nan", 0), 1);
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn test_shared_gram_lists_each_word() {
        let inverted = words(&["calculator", "calendar"]);
        let index = QGramIndex::build(&inverted, 3);

        let mut ids: Vec<WordId> = index.postings("cal").iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1]);
        assert!(index.postings("xyz").is_empty());
    }

    #[test]
    fn test_empty_words() {
        let index = QGramIndex::build(&InvertedIndex::new(), 3);
        assert!(index.is_empty());
        assert_eq!(index.q(), 3);
    }
}
