//! Q-Gram Fuzzy Search
//!
//! Ranks short titled items against free-text queries:
//!
//! - **Index**: every title word is cut into q-grams; each gram points at the
//!   words containing it, and each word at the items containing it
//! - **Candidates**: indexed words sharing grams with a query word
//! - **Filter**: prefix edit distance within a per-word budget, so partially
//!   typed or misspelled words still match
//! - **Ranking**: items must match every query word; weights are summed gram
//!   overlaps, ties broken by corpus order
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use qgram_core::fuzzy::FuzzySearch;
//!
//! let corpus = vec![Arc::new("Calculator".to_string()), Arc::new("Calendar".to_string())];
//! let engine = FuzzySearch::new(corpus).unwrap();
//! engine.build_index();
//!
//! let results = engine.query("calc");
//! assert_eq!(results[0].as_str(), "Calculator");
//! assert!(engine.query("xyz").is_empty());
//! ```

pub mod distance;
mod engine;
pub(crate) mod matcher;

pub use distance::is_prefix_match;
pub use engine::{FuzzySearch, ScoredItem};
