//! FuzzySearch - corpus-backed search engine with atomic index swaps

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::index::{fingerprint, IndexGeneration, IndexStats};

/// A ranked result with its match weight
#[derive(Debug)]
pub struct ScoredItem<T> {
    pub item: Arc<T>,
    pub weight: u32,
}

impl<T> Clone for ScoredItem<T> {
    fn clone(&self) -> Self {
        Self {
            item: Arc::clone(&self.item),
            weight: self.weight,
        }
    }
}

/// Thread-safe fuzzy search over a host-provided corpus
///
/// Queries run against the generation installed when they start. Rebuilds
/// index a fresh snapshot of the corpus without holding any lock the
/// queries need, then swap it in.
pub struct FuzzySearch<C: Corpus> {
    corpus: C,
    config: EngineConfig,
    current: RwLock<Arc<IndexGeneration<C::Item>>>,

    // Serializes rebuilds; holds the last generation number handed out
    rebuild: Mutex<u64>,
}

impl<C: Corpus> FuzzySearch<C> {
    /// Create an engine with default configuration
    pub fn new(corpus: C) -> Result<Self> {
        Self::with_config(corpus, EngineConfig::default())
    }

    /// Create an engine with custom configuration
    pub fn with_config(corpus: C, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            corpus,
            current: RwLock::new(Arc::new(IndexGeneration::empty(config.clone()))),
            config,
            rebuild: Mutex::new(0),
        })
    }

    /// Rebuild the index from the current corpus and install it.
    pub fn build_index(&self) -> IndexStats {
        let mut last = self.rebuild.lock();
        self.install(&mut last, self.corpus.items())
    }

    /// Signal that the corpus changed.
    pub fn corpus_changed(&self) -> IndexStats {
        self.build_index()
    }

    /// Rebuild only if the corpus differs from the installed generation.
    ///
    /// Returns the new stats when a rebuild happened.
    pub fn refresh(&self) -> Option<IndexStats> {
        let mut last = self.rebuild.lock();
        let items = self.corpus.items();

        let hash = fingerprint(&items);
        if *last > 0 && hash == self.current.read().index_hash() {
            debug!(index_hash = %hash, "corpus unchanged, keeping generation");
            return None;
        }

        Some(self.install(&mut last, items))
    }

    fn install(&self, last: &mut u64, items: Vec<Arc<C::Item>>) -> IndexStats {
        *last += 1;
        let next = Arc::new(IndexGeneration::build(items, self.config.clone(), *last));
        let stats = next.stats();

        *self.current.write() = next;

        info!(
            generation = stats.generation,
            items = stats.items,
            words = stats.words,
            grams = stats.grams,
            build_time_us = stats.build_time_us,
            index_hash = %stats.index_hash,
            "index generation installed"
        );

        stats
    }

    /// The generation queries currently run against.
    ///
    /// Holding the snapshot keeps it alive across later rebuilds, so a
    /// caller can run several queries against one fixed generation.
    pub fn snapshot(&self) -> Arc<IndexGeneration<C::Item>> {
        Arc::clone(&self.current.read())
    }

    /// Items matching `text`, best first.
    pub fn query(&self, text: &str) -> Vec<Arc<C::Item>> {
        self.snapshot().query(text)
    }

    /// Items matching `text` with their weights, best first.
    pub fn query_scored(&self, text: &str) -> Vec<ScoredItem<C::Item>> {
        self.snapshot()
            .query_scored(text)
            .into_iter()
            .map(|(item, weight)| ScoredItem { item, weight })
            .collect()
    }

    /// At most `limit` items matching `text`, best first.
    pub fn query_limited(&self, text: &str, limit: usize) -> Vec<Arc<C::Item>> {
        let mut results = self.query(text);
        results.truncate(limit);
        results
    }

    pub fn stats(&self) -> IndexStats {
        self.current.read().stats()
    }

    /// Fingerprint of the corpus the installed generation was built from
    pub fn index_hash(&self) -> String {
        self.current.read().index_hash().to_string()
    }

    pub fn generation(&self) -> u64 {
        self.current.read().generation()
    }

    /// Check if the installed generation has any items
    pub fn is_ready(&self) -> bool {
        !self.current.read().is_empty()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn corpus(&self) -> &C {
        &self.corpus
    }
}
