//! Index generations
//!
//! An [`IndexGeneration`] is one immutable snapshot of the corpus: the
//! items it was built from, the inverted word index over their titles and
//! the q-gram index over those words. A generation is built completely
//! before anyone can see it and is never mutated afterwards, so any number
//! of threads may query it at once.

mod grams;
mod inverted;

pub use grams::QGramIndex;
pub use inverted::{InvertedIndex, ItemId, WordId};

use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Instant;

use ahash::AHasher;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::corpus::Item;
use crate::fuzzy::matcher;
use crate::tokenize::tokenize;

/// Size and identity of an installed generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub items: usize,
    pub words: usize,
    pub grams: usize,
    pub generation: u64,
    pub build_time_us: u64,
    pub index_hash: String,
}

/// One complete, immutable inverted index + q-gram index pair.
pub struct IndexGeneration<T> {
    items: Vec<Arc<T>>,
    inverted: InvertedIndex,
    grams: QGramIndex,
    config: EngineConfig,
    generation: u64,
    index_hash: String,
    build_time_us: u64,
}

impl<T: Item> IndexGeneration<T> {
    /// Generation with no items; every query on it is empty.
    pub fn empty(config: EngineConfig) -> Self {
        Self {
            items: Vec::new(),
            inverted: InvertedIndex::new(),
            grams: QGramIndex::build(&InvertedIndex::new(), config.q),
            index_hash: fingerprint::<T>(&[]),
            config,
            generation: 0,
            build_time_us: 0,
        }
    }

    /// Index `items` in the given order.
    ///
    /// The order is significant: an item's position is its [`ItemId`] and
    /// the tiebreak between equally weighted results.
    pub fn build(items: Vec<Arc<T>>, config: EngineConfig, generation: u64) -> Self {
        let start = Instant::now();

        let mut inverted = InvertedIndex::new();
        for (item, words) in tokenize_titles(&items).into_iter().enumerate() {
            for word in words {
                inverted.insert(&word, item);
            }
        }

        let grams = QGramIndex::build(&inverted, config.q);
        let index_hash = fingerprint(&items);

        Self {
            items,
            inverted,
            grams,
            config,
            generation,
            index_hash,
            build_time_us: start.elapsed().as_micros() as u64,
        }
    }

    /// Items ranked best-first against `text`.
    pub fn query(&self, text: &str) -> Vec<Arc<T>> {
        matcher::rank(self, text)
            .into_iter()
            .map(|(item, _)| Arc::clone(&self.items[item]))
            .collect()
    }

    /// Items ranked best-first against `text`, with their match weights.
    pub fn query_scored(&self, text: &str) -> Vec<(Arc<T>, u32)> {
        matcher::rank(self, text)
            .into_iter()
            .map(|(item, weight)| (Arc::clone(&self.items[item]), weight))
            .collect()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            items: self.items.len(),
            words: self.inverted.len(),
            grams: self.grams.len(),
            generation: self.generation,
            build_time_us: self.build_time_us,
            index_hash: self.index_hash.clone(),
        }
    }
}

impl<T> IndexGeneration<T> {
    pub fn items(&self) -> &[Arc<T>] {
        &self.items
    }

    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    pub fn grams(&self) -> &QGramIndex {
        &self.grams
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Monotonic build counter; 0 until the first build is installed
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn index_hash(&self) -> &str {
        &self.index_hash
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Lowercase words of every title, in item order.
#[cfg(not(feature = "parallel"))]
fn tokenize_titles<T: Item>(items: &[Arc<T>]) -> Vec<Vec<String>> {
    items.iter().map(|item| tokenize(item.title())).collect()
}

/// Lowercase words of every title, in item order (parallel).
#[cfg(feature = "parallel")]
fn tokenize_titles<T: Item>(items: &[Arc<T>]) -> Vec<Vec<String>> {
    let titles: Vec<&str> = items.iter().map(|item| item.title()).collect();
    titles.par_iter().map(|title| tokenize(title)).collect()
}

/// Hash of the item titles in order, for change detection.
pub(crate) fn fingerprint<T: Item>(items: &[Arc<T>]) -> String {
    let mut hasher = AHasher::default();
    items.len().hash(&mut hasher);
    for item in items {
        item.title().hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}
