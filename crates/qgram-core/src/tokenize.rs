//! Word tokenizer shared by indexing and querying
//!
//! A word character is any Unicode alphanumeric character or `_`. Every
//! other character is a delimiter, and a run of delimiters separates two
//! words. Empty tokens never surface.

/// Word character test
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Zero-copy iterator over the raw (not lowercased) words of a text
pub struct Words<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Words<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remaining();
        let start = self.position + rest.find(is_word_char)?;

        let word = &self.input[start..];
        let len = word
            .char_indices()
            .find(|&(_, c)| !is_word_char(c))
            .map_or(word.len(), |(i, _)| i);

        self.position = start + len;
        Some(&self.input[start..start + len])
    }
}

/// Split `text` into lowercase words.
pub fn tokenize(text: &str) -> Vec<String> {
    Words::new(text).map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_split() {
        assert_eq!(tokenize("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_delimiter_runs_and_edges() {
        assert_eq!(
            tokenize("  --foo,,  bar!!baz.  "),
            vec!["foo", "bar", "baz"]
        );
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert_eq!(tokenize("is_author_of v2"), vec!["is_author_of", "v2"]);
    }

    #[test]
    fn test_empty_and_delimiters_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" .,;-/ ").is_empty());
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(tokenize("Größe Ärger-Straße"), vec!["größe", "ärger", "straße"]);
    }

    #[test]
    fn test_words_borrow_input() {
        let text = "Web Browser (Firefox)";
        let words: Vec<&str> = Words::new(text).collect();
        assert_eq!(words, vec!["Web", "Browser", "Firefox"]);
    }
}
