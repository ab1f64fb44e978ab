//! Configuration error types

use thiserror::Error;

/// Errors raised while constructing a search engine.
///
/// Queries and index rebuilds never fail; every error here surfaces before
/// the first index generation exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Q-gram length must be at least one character
    #[error("invalid q-gram length: {0} (must be >= 1)")]
    InvalidGramLength(usize),

    /// Divisor-derived edit distance with a zero divisor
    #[error("edit distance divisor must be >= 1")]
    ZeroDivisor,

    /// Environment override that does not parse
    #[error("invalid value for {var}: {value:?}")]
    Env { var: &'static str, value: String },

    /// Serialized configuration that does not deserialize
    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
