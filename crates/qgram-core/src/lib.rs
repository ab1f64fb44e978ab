//! Q-Gram Search Core
//!
//! Approximate text matching for short labeled items (application names,
//! bookmarks, commands). A corpus is indexed into an inverted word index and
//! a q-gram index; queries are answered by combining typo-tolerant prefix
//! matches per query word into a ranked item list.
//!
//! # Features
//!
//! - `parallel` - Tokenize titles on a rayon pool while building an index
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use qgram_core::{DeltaPolicy, EngineConfig, FuzzySearch};
//!
//! let config = EngineConfig::new().with_q(3).with_delta(DeltaPolicy::Fixed(1));
//! let corpus = vec![
//!     Arc::new("Web Browser".to_string()),
//!     Arc::new("Text Editor".to_string()),
//! ];
//!
//! let engine = FuzzySearch::with_config(corpus, config).unwrap();
//! engine.build_index();
//!
//! let results = engine.query("web brwser");
//! assert_eq!(results.len(), 1);
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod qgram;
pub mod tokenize;

// Re-export main types at crate root
pub use config::{DeltaPolicy, EngineConfig};
pub use corpus::{Corpus, Item};
pub use error::{ConfigError, Result};
pub use fuzzy::{is_prefix_match, FuzzySearch, ScoredItem};
pub use index::{IndexGeneration, IndexStats};
pub use qgram::qgrams;
pub use tokenize::tokenize;
