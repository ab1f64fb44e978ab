//! Engine configuration
//!
//! Configuration is fixed at construction. It can be built in code, read
//! from JSON, or overridden from the environment:
//!
//! - `QGRAM_Q`: q-gram length (default: 3)
//! - `QGRAM_DELTA`: fixed edit-distance budget per query word (default: 1)
//! - `QGRAM_DELTA_DIVISOR`: derive the budget as `word length / divisor`;
//!   takes precedence over `QGRAM_DELTA` when both are set

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const DEFAULT_Q: usize = 3;
pub const DEFAULT_DELTA: usize = 1;

const ENV_Q: &str = "QGRAM_Q";
const ENV_DELTA: &str = "QGRAM_DELTA";
const ENV_DELTA_DIVISOR: &str = "QGRAM_DELTA_DIVISOR";

/// How many edits a query word may be away from a candidate prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum DeltaPolicy {
    /// Same budget for every query word
    Fixed(usize),
    /// Budget grows with the query word: `chars / divisor`
    Divisor(usize),
}

impl DeltaPolicy {
    /// Edit-distance budget for a query word of `word_len` characters.
    ///
    /// A zero divisor never reaches here through a validated config; it is
    /// treated as a zero budget rather than a panic.
    #[inline]
    pub fn delta_for(&self, word_len: usize) -> usize {
        match *self {
            DeltaPolicy::Fixed(delta) => delta,
            DeltaPolicy::Divisor(divisor) => word_len.checked_div(divisor).unwrap_or(0),
        }
    }
}

impl Default for DeltaPolicy {
    fn default() -> Self {
        DeltaPolicy::Fixed(DEFAULT_DELTA)
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Q-gram length in characters
    pub q: usize,
    /// Edit-distance policy for the prefix filter
    pub delta: DeltaPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            q: DEFAULT_Q,
            delta: DeltaPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_q(mut self, q: usize) -> Self {
        self.q = q;
        self
    }

    pub fn with_delta(mut self, delta: DeltaPolicy) -> Self {
        self.delta = delta;
        self
    }

    /// Reject configurations the matcher cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.q < 1 {
            return Err(ConfigError::InvalidGramLength(self.q));
        }
        if self.delta == DeltaPolicy::Divisor(0) {
            return Err(ConfigError::ZeroDivisor);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `QGRAM_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(q) = parse_var(&lookup, ENV_Q)? {
            config.q = q;
        }
        if let Some(delta) = parse_var(&lookup, ENV_DELTA)? {
            config.delta = DeltaPolicy::Fixed(delta);
        }
        if let Some(divisor) = parse_var(&lookup, ENV_DELTA_DIVISOR)? {
            config.delta = DeltaPolicy::Divisor(divisor);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<F>(lookup: &F, var: &'static str) -> Result<Option<usize>>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Env { var, value }),
    }
}
