//! Q-gram encoding
//!
//! A word is left-padded with `q - 1` spaces and cut into one `q`-character
//! window per character of the unpadded word. The padding makes the first
//! grams carry start-of-word context, and guarantees that even a
//! one-character word produces a gram.
//!
//! ```rust
//! use qgram_core::qgram::qgrams;
//!
//! assert_eq!(qgrams("calc", 3), vec!["  c", " ca", "cal", "alc"]);
//! ```

use ahash::AHashMap;

/// Padding character; never produced by the tokenizer.
pub const PAD: char = ' ';

/// Ordered q-grams of `word`.
///
/// Lengths are measured in `char`s, so the result always has exactly
/// `word.chars().count()` entries. `q == 0` yields no grams; configurations
/// reject it before any word is encoded.
pub fn qgrams(word: &str, q: usize) -> Vec<String> {
    if q == 0 {
        return Vec::new();
    }

    let padded: Vec<char> = std::iter::repeat(PAD)
        .take(q - 1)
        .chain(word.chars())
        .collect();

    padded.windows(q).map(|w| w.iter().collect()).collect()
}

/// Occurrence count of every distinct q-gram of `word`.
pub fn gram_counts(word: &str, q: usize) -> AHashMap<String, u32> {
    let mut counts = AHashMap::new();
    for gram in qgrams(word, q) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}
